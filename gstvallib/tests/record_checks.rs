use gstvallib::model::{BankRecord, GstRecord, HsnRecord, Reason};
use gstvallib::traits::Validate;
use rust_decimal::Decimal;

fn hsn_form() -> HsnRecord {
    HsnRecord {
        gstin: "29AAAGO1111W1ZB".into(),
        hsn_code: "9954".into(),
        service_name: "Public Administration".into(),
        total_gst: "18".into(),
        igst: "18".into(),
        cgst: "9".into(),
        sgst: "9".into(),
    }
}

#[test]
fn hsn_form_accepted() {
    let c = hsn_form().check();
    let clean = c.into_cleaned().expect("hsn record");
    assert_eq!(clean.gstin, "29AAAGO1111W1ZB");
    assert_eq!(clean.igst, Decimal::from(18));
    assert_eq!(clean.cgst + clean.sgst, clean.igst);
}

#[test]
fn hsn_rejects_unbalanced_split() {
    let mut rec = hsn_form();
    rec.sgst = "10".into();
    let c = rec.check();
    assert_eq!(c.reason(), Some(Reason::Invariant));
    assert!(c.message().expect("message").contains("CGST + SGST"));
}

#[test]
fn hsn_tolerates_rounding() {
    let mut rec = hsn_form();
    rec.cgst = "9.005".into();
    rec.sgst = "9".into();
    assert!(rec.check().is_valid());
}

#[test]
fn hsn_reports_most_specific_error_first() {
    // и GSTIN, и HSN-код испорчены — сообщение про первое поле по порядку
    let mut rec = hsn_form();
    rec.gstin = "".into();
    rec.hsn_code = "99".into();
    let c = rec.check();
    assert_eq!(c.reason(), Some(Reason::Empty));
    assert_eq!(c.message(), Some("GSTIN is required"));
}

#[test]
fn hsn_normalizes_fields() {
    let mut rec = hsn_form();
    rec.gstin = " 29aaago1111w1zb ".into();
    rec.hsn_code = " 9954 ".into();
    let clean = rec.check().into_cleaned().expect("valid");
    assert_eq!(clean.gstin, "29AAAGO1111W1ZB");
    assert_eq!(clean.hsn_code, "9954");
}

fn bank_form() -> BankRecord {
    BankRecord {
        account_number: "110012345678".into(),
        holder_name: "Asha Rao".into(),
        bank_name: "State Bank of India".into(),
        branch_name: "Bengaluru Main".into(),
        ifsc: "sbin0001234".into(),
        micr: "560002001".into(),
    }
}

#[test]
fn bank_record_accepted_and_normalized() {
    let clean = bank_form().check().into_cleaned().expect("bank record");
    assert_eq!(clean.ifsc, "SBIN0001234");
    assert_eq!(clean.account_number, "110012345678");
}

#[test]
fn bank_record_checks_fields_in_order() {
    let mut rec = bank_form();
    rec.ifsc = "SBIN1001234".into();
    rec.micr = "bad".into();
    let c = rec.check();
    assert_eq!(c.reason(), Some(Reason::Format));
    assert!(c.message().expect("message").contains("IFSC"));
}

fn gst_form() -> GstRecord {
    GstRecord {
        gstin: "29AAAGO1111W1ZB".into(),
        pan: "AAAGO1111W".into(),
        legal_name: "Directorate of Treasuries".into(),
        address: "Vidhana Soudha, Bengaluru".into(),
        email: "ddo@treasury.example.in".into(),
        mobile: "9876543210".into(),
        registration_date: "2021-07-01".into(),
    }
}

#[test]
fn gst_record_accepted() {
    let clean = gst_form().check().into_cleaned().expect("gst record");
    assert_eq!(clean.pan, "AAAGO1111W");
    assert_eq!(clean.mobile, "9876543210");
}

#[test]
fn gst_record_pan_must_match_gstin() {
    let mut rec = gst_form();
    rec.pan = "AAAGO1112W".into();
    let c = rec.check();
    assert_eq!(c.reason(), Some(Reason::Invariant));
    assert!(c.message().expect("message").contains("PAN"));
}
