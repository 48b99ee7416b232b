use clap::{Parser, ValueEnum};
use gstvallib::{
    error::{GstvalError, Result},
    formats::{csv::Csv, xml::Xml},
    model::{BankRecord, Checked, GstRecord, HsnRecord},
    traits::{ReadBatch, Validate, WriteBatch},
};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Xml,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Entity {
    Hsn,
    Bank,
    Gst,
}

#[derive(Parser, Debug)]
#[command(name="gstval", version, about="Проверка и нормализация мастер-данных GST")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short='i', long="input")]
    input: Option<String>,

    /// Выходной файл для нормализованных записей (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,

    /// Тип записей во входе
    #[arg(long="entity", value_enum)]
    entity: Entity,

    /// Формат входа
    #[arg(long="in-format", value_enum)]
    in_format: Fmt,

    /// Формат выхода
    #[arg(long="out-format", value_enum)]
    out_format: Fmt,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.entity {
        Entity::Hsn => run::<HsnRecord>(&cli),
        Entity::Bank => run::<BankRecord>(&cli),
        Entity::Gst => run::<GstRecord>(&cli),
    }
}

fn run<T>(cli: &Cli) -> Result<()>
where
    T: Validate + DeserializeOwned,
    T::Clean: Serialize + Clone,
{
    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let raw: Vec<T> = match cli.in_format {
        Fmt::Csv => Csv::read(br),
        Fmt::Xml => Xml::read(br),
    }?;
    info!(records = raw.len(), "input read");

    let mut clean = Vec::new();
    let mut bad = 0usize;
    for (idx, rec) in raw.iter().enumerate() {
        match rec.check() {
            Checked::Valid(c) => clean.push(c),
            Checked::Invalid(f) => {
                bad += 1;
                warn!(row = idx + 1, reason = ?f.reason, "{}", f.message);
            }
        }
    }

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        Fmt::Csv => Csv::write(&mut writer, &clean),
        Fmt::Xml => Xml::write(&mut writer, &clean),
    }?;
    writer.flush()?;

    info!(valid = clean.len(), invalid = bad, "done");
    if bad > 0 {
        return Err(GstvalError::Invalid(bad));
    }
    Ok(())
}
