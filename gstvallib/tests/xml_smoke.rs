use gstvallib::{
    formats::xml::Xml,
    model::BankRecord,
    traits::{ReadBatch, Validate, WriteBatch},
};
use std::io::Cursor;

#[test]
fn xml_roundtrip() {
    let records = vec![
        BankRecord {
            account_number: "110012345678".into(),
            holder_name: "Asha Rao".into(),
            bank_name: "State Bank of India".into(),
            branch_name: "Bengaluru Main".into(),
            ifsc: "SBIN0001234".into(),
            micr: "560002001".into(),
        },
        BankRecord {
            account_number: "220098765432".into(),
            holder_name: "Ravi Kumar".into(),
            bank_name: "Canara Bank".into(),
            branch_name: "Mysuru".into(),
            ifsc: "CNRB0000501".into(),
            micr: "570015002".into(),
        },
    ];

    let mut out = Vec::new();
    Xml::write(&mut out, &records).expect("write xml");
    let back: Vec<BankRecord> = Xml::read(Cursor::new(out)).expect("read xml");
    assert_eq!(back, records);

    for rec in &back {
        assert!(rec.check().is_valid(), "{rec:?}");
    }
}

#[test]
fn xml_writes_normalized_records() {
    let raw = vec![BankRecord {
        account_number: "110012345678".into(),
        holder_name: "Asha Rao".into(),
        bank_name: "State Bank of India".into(),
        branch_name: "Bengaluru Main".into(),
        ifsc: "sbin0001234".into(),
        micr: "560002001".into(),
    }];

    let clean: Vec<_> = raw
        .iter()
        .map(|r| r.check().into_cleaned().expect("valid"))
        .collect();

    let mut out = Vec::new();
    Xml::write(&mut out, &clean).expect("write xml");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("SBIN0001234"));
}
