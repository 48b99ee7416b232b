use gstvallib::{
    formats::csv::Csv,
    model::{Checked, HsnRecord},
    traits::{ReadBatch, Validate},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: читаем CSV с HSN-записями из stdin и печатаем вердикт по строкам
    let records: Vec<HsnRecord> = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    for (i, rec) in records.iter().enumerate() {
        match rec.check() {
            Checked::Valid(c) => println!("{}: ok ({} / {})", i + 1, c.gstin, c.hsn_code),
            Checked::Invalid(f) => println!("{}: {}", i + 1, f.message),
        }
    }
    Ok(())
}
