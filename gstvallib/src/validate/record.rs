//! Композитные проверки записей: поля в объявленном порядке с обрывом на
//! первой ошибке, затем (не более одного) межполевое правило.

use crate::model::{
    BankRecord, Checked, CleanBank, CleanGst, CleanHsn, Fail, GstRecord, HsnRecord, Reason,
};
use crate::traits::Validate;
use crate::validate::field::{
    check_account_number, check_address, check_date, check_email, check_gstin, check_hsn_code,
    check_ifsc, check_micr, check_mobile, check_name, check_pan, check_rate,
};
use rust_decimal::Decimal;

impl Validate for HsnRecord {
    type Clean = CleanHsn;

    fn check(&self) -> Checked<CleanHsn> {
        hsn_fields(self).into()
    }
}

fn hsn_fields(rec: &HsnRecord) -> Result<CleanHsn, Fail> {
    let gstin = check_gstin(&rec.gstin).ok()?;
    let hsn_code = check_hsn_code(&rec.hsn_code).ok()?;
    let service_name = check_name(&rec.service_name, "Service name").ok()?;
    let total_gst = check_rate(&rec.total_gst, "Total GST").ok()?;
    let igst = check_rate(&rec.igst, "IGST").ok()?;
    let cgst = check_rate(&rec.cgst, "CGST").ok()?;
    let sgst = check_rate(&rec.sgst, "SGST").ok()?;

    // допуск 0.01 на округление ставок
    if (cgst + sgst - igst).abs() > Decimal::new(1, 2) {
        return Err(Fail {
            reason: Reason::Invariant,
            message: "CGST + SGST should equal IGST".into(),
        });
    }

    Ok(CleanHsn {
        gstin,
        hsn_code,
        service_name,
        total_gst,
        igst,
        cgst,
        sgst,
    })
}

impl Validate for BankRecord {
    type Clean = CleanBank;

    fn check(&self) -> Checked<CleanBank> {
        bank_fields(self).into()
    }
}

fn bank_fields(rec: &BankRecord) -> Result<CleanBank, Fail> {
    Ok(CleanBank {
        account_number: check_account_number(&rec.account_number).ok()?,
        holder_name: check_name(&rec.holder_name, "Account holder name").ok()?,
        bank_name: check_name(&rec.bank_name, "Bank name").ok()?,
        branch_name: check_name(&rec.branch_name, "Branch name").ok()?,
        ifsc: check_ifsc(&rec.ifsc).ok()?,
        micr: check_micr(&rec.micr).ok()?,
    })
}

impl Validate for GstRecord {
    type Clean = CleanGst;

    fn check(&self) -> Checked<CleanGst> {
        gst_fields(self).into()
    }
}

fn gst_fields(rec: &GstRecord) -> Result<CleanGst, Fail> {
    let gstin = check_gstin(&rec.gstin).ok()?;
    let pan = check_pan(&rec.pan).ok()?;
    let legal_name = check_name(&rec.legal_name, "Legal name").ok()?;
    let address = check_address(&rec.address).ok()?;
    let email = check_email(&rec.email).ok()?;
    let mobile = check_mobile(&rec.mobile).ok()?;
    let registration_date = check_date(&rec.registration_date).ok()?;

    // символы 3..12 GSTIN — это PAN владельца
    if gstin[2..12] != pan[..] {
        return Err(Fail {
            reason: Reason::Invariant,
            message: "PAN does not match the PAN embedded in GSTIN".into(),
        });
    }

    Ok(CleanGst {
        gstin,
        pan,
        legal_name,
        address,
        email,
        mobile,
        registration_date,
    })
}
