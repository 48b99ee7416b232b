use gstvallib::currency::{format_inr, format_inr_text};
use rust_decimal::Decimal;

#[test]
fn groups_by_lakh_and_crore() {
    assert_eq!(format_inr(Some(Decimal::from(826_000))), "₹8,26,000");
    assert_eq!(format_inr(Some(Decimal::from(1_000_000))), "₹10,00,000");
    assert_eq!(format_inr(Some(Decimal::from(123_456_789))), "₹12,34,56,789");
    assert_eq!(format_inr(Some(Decimal::from(1_234))), "₹1,234");
    assert_eq!(format_inr(Some(Decimal::from(999))), "₹999");
    assert_eq!(format_inr(Some(Decimal::ZERO)), "₹0");
}

#[test]
fn missing_amount_gets_placeholder() {
    assert_eq!(format_inr(None), "₹0");
}

#[test]
fn fractions_round_to_two_places() {
    assert_eq!(format_inr(Some(Decimal::new(185, 1))), "₹18.50");
    assert_eq!(format_inr(Some(Decimal::new(1234565, 2))), "₹12,345.65");
    // .004 пропадает при округлении — целая сумма без дробной части
    assert_eq!(format_inr(Some(Decimal::new(18004, 3))), "₹18");
}

#[test]
fn negative_amounts() {
    assert_eq!(format_inr(Some(Decimal::new(-12345675, 1))), "-₹12,34,567.50");
    assert_eq!(format_inr(Some(Decimal::from(-999))), "-₹999");
}

#[test]
fn raw_form_input() {
    assert_eq!(format_inr_text("826000"), "₹8,26,000");
    assert_eq!(format_inr_text(" 18.5 "), "₹18.50");
    assert_eq!(format_inr_text("abc"), "₹0");
    assert_eq!(format_inr_text(""), "₹0");
}
