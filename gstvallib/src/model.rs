//! Доменные модели — «сырые» записи форм и их нормализованные варианты.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Причина отказа проверки.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Reason {
    /// Обязательное поле пустое.
    Empty,
    /// Значение есть, но не проходит по структуре.
    Format,
    /// Число вне допустимого диапазона.
    Range,
    /// Поля по отдельности валидны, но межполевое правило нарушено.
    Invariant,
}

/// Непройденная проверка: причина + сообщение для пользователя.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fail {
    pub reason: Reason,
    pub message: String,
}

/// Результат проверки поля или записи целиком.
///
/// `Valid` несёт канонизированное значение (trim/uppercase/распарсенное
/// число); повторная проверка канонизированного значения даёт его же.
#[derive(Debug, Clone, PartialEq)]
pub enum Checked<T> {
    Valid(T),
    Invalid(Fail),
}

impl<T> Checked<T> {
    pub fn invalid(reason: Reason, message: impl Into<String>) -> Self {
        Checked::Invalid(Fail {
            reason,
            message: message.into(),
        })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Checked::Valid(_))
    }

    pub fn cleaned(&self) -> Option<&T> {
        match self {
            Checked::Valid(v) => Some(v),
            Checked::Invalid(_) => None,
        }
    }

    pub fn into_cleaned(self) -> Option<T> {
        match self {
            Checked::Valid(v) => Some(v),
            Checked::Invalid(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Checked::Valid(_) => None,
            Checked::Invalid(f) => Some(&f.message),
        }
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            Checked::Valid(_) => None,
            Checked::Invalid(f) => Some(f.reason),
        }
    }

    /// Для композитных проверок: `?` по полям.
    pub fn ok(self) -> std::result::Result<T, Fail> {
        match self {
            Checked::Valid(v) => Ok(v),
            Checked::Invalid(f) => Err(f),
        }
    }
}

impl<T> From<std::result::Result<T, Fail>> for Checked<T> {
    fn from(r: std::result::Result<T, Fail>) -> Self {
        match r {
            Ok(v) => Checked::Valid(v),
            Err(f) => Checked::Invalid(f),
        }
    }
}

/// HSN/SAC-запись, как она приходит из формы: все поля — строки.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HsnRecord {
    pub gstin: String,
    pub hsn_code: String,
    pub service_name: String,
    pub total_gst: String,
    pub igst: String,
    pub cgst: String,
    pub sgst: String,
}

/// Банковские реквизиты DDO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankRecord {
    pub account_number: String,
    pub holder_name: String,
    pub bank_name: String,
    pub branch_name: String,
    pub ifsc: String,
    pub micr: String,
}

/// Мастер-запись регистрации GST.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstRecord {
    pub gstin: String,
    pub pan: String,
    pub legal_name: String,
    pub address: String,
    pub email: String,
    pub mobile: String,
    pub registration_date: String,
}

/// Нормализованная HSN/SAC-запись: ставки уже распарсены.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanHsn {
    pub gstin: String,
    pub hsn_code: String,
    pub service_name: String,
    pub total_gst: Decimal,
    pub igst: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanBank {
    pub account_number: String,
    pub holder_name: String,
    pub bank_name: String,
    pub branch_name: String,
    pub ifsc: String,
    pub micr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanGst {
    pub gstin: String,
    pub pan: String,
    pub legal_name: String,
    pub address: String,
    pub email: String,
    pub mobile: String,
    pub registration_date: NaiveDate,
}
