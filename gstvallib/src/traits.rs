//! Унифицированные трэйты: проверка записей и чтение/запись пакетов
//! на основе std::io::{BufRead, Write}.

use crate::error::Result;
use crate::model::Checked;
use std::io::{BufRead, Write};

/// Композитная проверка записи: поля по порядку, затем межполевое правило.
pub trait Validate {
    type Clean;
    fn check(&self) -> Checked<Self::Clean>;
}

pub trait ReadBatch<T> {
    fn read<R: BufRead>(r: R) -> Result<Vec<T>>;
}

pub trait WriteBatch<T> {
    fn write<W: Write>(w: W, records: &[T]) -> Result<()>;
}
