//! Пополевые проверки. Каждая — чистая функция `&str -> Checked<_>`,
//! никогда не паникует; `Valid` несёт канонизированное значение.

use crate::model::{Checked, Reason};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// Настраиваемые границы длин. В исходных формах они нигде не закреплены
/// жёстко, поэтому вынесены в явный объект конфигурации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub hsn_digits_min: usize,
    pub hsn_digits_max: usize,
    pub account_digits_min: usize,
    pub account_digits_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            hsn_digits_min: 4,
            hsn_digits_max: 8,
            account_digits_min: 9,
            account_digits_max: 18,
        }
    }
}

// 2 цифры штата + PAN + код юрлица + фиксированная 'Z' + контрольный символ.
// Контрольный символ проверяется только по форме, без арифметики.
fn re_gstin() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]Z[0-9A-Z]$").expect("static pattern")
    })
}

fn re_pan() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("static pattern"))
}

// 4 буквы банка + зарезервированный '0' + 6 символов отделения.
fn re_ifsc() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{4}0[0-9A-Z]{6}$").expect("static pattern"))
}

pub fn check_gstin(value: &str) -> Checked<String> {
    let v = value.trim().to_ascii_uppercase();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "GSTIN is required");
    }
    if !re_gstin().is_match(&v) {
        return Checked::invalid(
            Reason::Format,
            "GSTIN must be 15 characters like 22AAAAA0000A1Z5",
        );
    }
    Checked::Valid(v)
}

pub fn check_pan(value: &str) -> Checked<String> {
    let v = value.trim().to_ascii_uppercase();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "PAN is required");
    }
    if !re_pan().is_match(&v) {
        return Checked::invalid(Reason::Format, "PAN must be 10 characters like AAAAA0000A");
    }
    Checked::Valid(v)
}

pub fn check_hsn_code(value: &str) -> Checked<String> {
    check_hsn_code_with(&Limits::default(), value)
}

pub fn check_hsn_code_with(limits: &Limits, value: &str) -> Checked<String> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "HSN code is required");
    }
    let n = v.chars().count();
    if n < limits.hsn_digits_min
        || n > limits.hsn_digits_max
        || !v.chars().all(|c| c.is_ascii_digit())
    {
        return Checked::invalid(
            Reason::Format,
            format!(
                "HSN code must be {}-{} digits",
                limits.hsn_digits_min, limits.hsn_digits_max
            ),
        );
    }
    Checked::Valid(v.to_string())
}

/// `label` — имя поля в сообщении: одной функцией проверяются
/// totalGst/IGST/CGST/SGST.
pub fn check_rate(value: &str, label: &str) -> Checked<Decimal> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, format!("{label} is required"));
    }
    let n: Decimal = match v.parse() {
        Ok(n) => n,
        Err(_) => return Checked::invalid(Reason::Format, format!("{label} must be a number")),
    };
    if n < Decimal::ZERO || n > Decimal::ONE_HUNDRED {
        return Checked::invalid(Reason::Range, format!("{label} must be between 0 and 100"));
    }
    Checked::Valid(n)
}

pub fn check_ifsc(value: &str) -> Checked<String> {
    let v = value.trim().to_ascii_uppercase();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "IFSC is required");
    }
    if !re_ifsc().is_match(&v) {
        return Checked::invalid(
            Reason::Format,
            "IFSC must be 11 characters with '0' in the fifth place, like SBIN0001234",
        );
    }
    Checked::Valid(v)
}

pub fn check_micr(value: &str) -> Checked<String> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "MICR is required");
    }
    if v.chars().count() != 9 || !v.chars().all(|c| c.is_ascii_digit()) {
        return Checked::invalid(Reason::Format, "MICR must be exactly 9 digits");
    }
    Checked::Valid(v.to_string())
}

pub fn check_account_number(value: &str) -> Checked<String> {
    check_account_number_with(&Limits::default(), value)
}

pub fn check_account_number_with(limits: &Limits, value: &str) -> Checked<String> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "Account number is required");
    }
    let n = v.chars().count();
    if n < limits.account_digits_min
        || n > limits.account_digits_max
        || !v.chars().all(|c| c.is_ascii_digit())
    {
        return Checked::invalid(
            Reason::Format,
            format!(
                "Account number must be {}-{} digits",
                limits.account_digits_min, limits.account_digits_max
            ),
        );
    }
    Checked::Valid(v.to_string())
}

pub fn check_name(value: &str, label: &str) -> Checked<String> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, format!("{label} is required"));
    }
    if v.chars().count() < 2 || !v.chars().any(|c| c.is_alphabetic()) {
        return Checked::invalid(Reason::Format, format!("{label} must be at least 2 letters"));
    }
    Checked::Valid(v.to_string())
}

pub fn check_address(value: &str) -> Checked<String> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "Address is required");
    }
    if v.chars().count() < 5 {
        return Checked::invalid(Reason::Format, "Address looks too short");
    }
    Checked::Valid(v.to_string())
}

pub fn check_email(value: &str) -> Checked<String> {
    let v = value.trim().to_ascii_lowercase();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "Email is required");
    }
    let shape_ok = !v.contains(char::is_whitespace)
        && match v.split_once('@') {
            // точка в домене, с непустым «хвостом» после неё
            Some((local, domain)) => {
                !local.is_empty()
                    && matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
            }
            None => false,
        };
    if !shape_ok {
        return Checked::invalid(Reason::Format, "Email must look like name@example.com");
    }
    Checked::Valid(v)
}

/// Разделители (пробелы, дефисы, скобки) отбрасываются; остаться должны
/// ровно 10 цифр с первой из 6-9.
pub fn check_mobile(value: &str) -> Checked<String> {
    if value.trim().is_empty() {
        return Checked::invalid(Reason::Empty, "Mobile number is required");
    }
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 || !matches!(digits.as_bytes()[0], b'6'..=b'9') {
        return Checked::invalid(
            Reason::Format,
            "Mobile number must be 10 digits starting with 6-9",
        );
    }
    Checked::Valid(digits)
}

pub fn check_date(value: &str) -> Checked<NaiveDate> {
    let v = value.trim();
    if v.is_empty() {
        return Checked::invalid(Reason::Empty, "Date is required");
    }
    match NaiveDate::parse_from_str(v, "%Y-%m-%d") {
        Ok(d) => Checked::Valid(d),
        Err(_) => Checked::invalid(Reason::Format, "Date must be in YYYY-MM-DD format"),
    }
}
