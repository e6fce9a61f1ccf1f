//! Всё, что нужно рендереру: вычисленные поля плюс проверенный текст.

use crate::{
    amount::Amount, barcode::Barcode, error::Result, model::SlipRecord, traits::BankStrategy,
    typing_line::TypingLine,
};
use chrono::NaiveDate;
use serde::Serialize;

const DATE_FMT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintableSlip {
    pub bank_code_with_dv: String,
    pub barcode: Barcode,
    pub typing_line: TypingLine,
    pub agency_account: String,
    pub nosso_numero: String,
    pub due_date: String,
    pub document_date: Option<String>,
    pub processing_date: String,
    pub amount: Option<Amount>,
    pub document_amount: Option<Amount>,
    pub document_number: String,
    pub document_kind: String,
    pub acceptance: String,
    pub currency_symbol: String,
    pub wallet: String,
    pub quantity: String,
    pub payment_place: String,
    pub payee_name: String,
    pub payee_document: String,
    pub payee_address: String,
    pub payer: Vec<String>,
    pub instructions: Vec<String>,
    pub statement: Vec<String>,
}

fn fmt_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

impl PrintableSlip {
    pub fn build(slip: &SlipRecord, bank: &dyn BankStrategy) -> Result<Self> {
        let barcode = slip.barcode(bank)?;
        let typing_line = TypingLine::from_barcode(&barcode)?;

        Ok(Self {
            bank_code_with_dv: slip.bank_code_with_dv_for(bank)?,
            typing_line,
            barcode,
            agency_account: slip.agency_account()?,
            nosso_numero: bank.format_nosso_numero(slip)?,
            // штрихкод уже проверил, что дата задана
            due_date: slip.due_date.map(fmt_date).unwrap_or_default(),
            document_date: slip.document_date.map(fmt_date),
            processing_date: fmt_date(slip.processing_date),
            amount: slip.amount(),
            document_amount: slip.document_amount(),
            document_number: slip.document_number.clone(),
            document_kind: slip.document_kind.clone(),
            acceptance: slip.acceptance.clone(),
            currency_symbol: slip.currency_symbol.clone(),
            wallet: slip.wallet.clone(),
            quantity: slip.quantity.clone(),
            payment_place: slip.payment_place.clone(),
            payee_name: slip.payee.name.clone(),
            payee_document: slip.payee.document.clone(),
            payee_address: slip.payee_address(),
            payer: slip.payer_block(),
            instructions: slip.instructions().to_vec(),
            statement: slip.statement().to_vec(),
        })
    }
}
