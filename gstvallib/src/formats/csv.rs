//! CSV с заголовками по именам полей записи (см. model.rs), например для
//! HSN: gstin,hsn_code,service_name,total_gst,igst,cgst,sgst

use crate::error::Result;
use crate::traits::{ReadBatch, WriteBatch};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::io::{BufRead, Write};

pub struct Csv;

impl<T: DeserializeOwned> ReadBatch<T> for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<T>> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut out = Vec::new();
        for rec in rdr.deserialize::<T>() {
            out.push(rec?);
        }
        Ok(out)
    }
}

impl<T: Serialize> WriteBatch<T> for Csv {
    fn write<W: Write>(mut w: W, records: &[T]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);
        for rec in records {
            wrt.serialize(rec)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
