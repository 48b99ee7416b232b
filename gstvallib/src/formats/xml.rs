//! Простой XML: <Records><Record>...</Record></Records>, поля записи —
//! вложенные элементы (serde).

use crate::error::{GstvalError, Result};
use crate::traits::{ReadBatch, WriteBatch};
use quick_xml::{de::from_reader, se::to_string};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Serialize, Deserialize)]
#[serde(rename = "Records")]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct XmlFile<T> {
    #[serde(rename = "Record", default)]
    record: Vec<T>,
}

pub struct Xml;

impl<T: DeserializeOwned> ReadBatch<T> for Xml {
    fn read<R: BufRead>(r: R) -> Result<Vec<T>> {
        let file: XmlFile<T> = from_reader(r).map_err(|e| GstvalError::Xml(e.to_string()))?;
        Ok(file.record)
    }
}

impl<T: Serialize + Clone> WriteBatch<T> for Xml {
    fn write<W: Write>(mut w: W, records: &[T]) -> Result<()> {
        let file = XmlFile {
            record: records.to_vec(),
        };
        let s = to_string(&file).map_err(|e| GstvalError::Xml(e.to_string()))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
