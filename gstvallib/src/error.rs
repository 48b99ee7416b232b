//! Единый тип ошибок публичного API.
//!
//! Сюда попадают только проблемы уровня файла/формата. Отказ валидации
//! отдельной записи — это данные (`model::Checked`), а не ошибка.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GstvalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("{0} invalid record(s)")]
    Invalid(usize),
}

pub type Result<T> = std::result::Result<T, GstvalError>;
