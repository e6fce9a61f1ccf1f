//! Доменные модели: данные одного boleto, которые заполняет вызывающий код.

use crate::{
    amount::Amount,
    barcode::Barcode,
    checksum::{modulo11, Modulo11Mode},
    due_factor::due_factor,
    error::{BoletoError, Result},
    format::{ensure_digits, pad_numeric_field},
    identifier::PaddedIdentifier,
    lines::{self, TextLines},
    printable::PrintableSlip,
    traits::{BankStrategy, FieldWidths},
    typing_line::TypingLine,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCEPTANCE: &str = "N";
pub const DEFAULT_CURRENCY_CODE: &str = "9";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";
pub const DEFAULT_PAYMENT_PLACE: &str = "Pagável em qualquer banco até o vencimento";

/// Cedente: получатель платежа.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payee {
    pub name: String,
    pub document: String,
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Sacado: плательщик.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payer {
    pub name: String,
    pub document: String,
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Поля boleto. Свободный текст открыт, проверяемые поля меняются через сеттеры.
///
/// Штрихкод и линия не кэшируются: каждый вызов считает их заново
/// из текущих значений.
#[derive(Debug, Clone, PartialEq)]
pub struct SlipRecord {
    pub bank_code: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub acceptance: String,
    pub wallet: String,
    pub document_kind: String,
    pub document_number: String,
    pub quantity: String,
    pub payment_place: String,
    pub document_date: Option<NaiveDate>,
    pub processing_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub payee: Payee,
    pub payer: Payer,

    widths: FieldWidths,
    agency: Option<PaddedIdentifier>,
    account: Option<PaddedIdentifier>,
    nosso_numero: Option<PaddedIdentifier>,
    amount: Option<Amount>,
    document_amount: Option<Amount>,
    instructions: TextLines,
    statement: TextLines,
    payer_block: Option<TextLines>,
    payee_address: Option<String>,
}

impl Default for SlipRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl SlipRecord {
    pub fn new() -> Self {
        Self::with_widths(FieldWidths::default())
    }

    pub fn with_widths(widths: FieldWidths) -> Self {
        Self {
            bank_code: String::new(),
            currency_code: DEFAULT_CURRENCY_CODE.into(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            acceptance: DEFAULT_ACCEPTANCE.into(),
            wallet: String::new(),
            document_kind: String::new(),
            document_number: String::new(),
            quantity: String::new(),
            payment_place: DEFAULT_PAYMENT_PLACE.into(),
            document_date: None,
            processing_date: chrono::Local::now().date_naive(),
            due_date: None,
            payee: Payee::default(),
            payer: Payer::default(),
            widths,
            agency: None,
            account: None,
            nosso_numero: None,
            amount: None,
            document_amount: None,
            instructions: TextLines::default(),
            statement: TextLines::default(),
            payer_block: None,
            payee_address: None,
        }
    }

    /// Код и ширины полей берутся у банка.
    pub fn for_bank(bank: &dyn BankStrategy) -> Self {
        let mut slip = Self::with_widths(bank.widths());
        slip.bank_code = bank.bank_code().to_string();
        slip
    }

    pub fn widths(&self) -> FieldWidths {
        self.widths
    }

    /* ------------------------- identifiers ------------------------- */

    pub fn set_agency(&mut self, value: &str) -> Result<()> {
        self.agency = Some(PaddedIdentifier::parse("agency", value, self.widths.agency)?);
        Ok(())
    }

    pub fn agency(&self) -> Option<&PaddedIdentifier> {
        self.agency.as_ref()
    }

    pub fn set_account(&mut self, value: &str) -> Result<()> {
        self.account = Some(PaddedIdentifier::parse("account", value, self.widths.account)?);
        Ok(())
    }

    pub fn account(&self) -> Option<&PaddedIdentifier> {
        self.account.as_ref()
    }

    pub fn set_nosso_numero(&mut self, value: &str) -> Result<()> {
        self.nosso_numero = Some(PaddedIdentifier::parse(
            "nosso_numero",
            value,
            self.widths.nosso_numero,
        )?);
        Ok(())
    }

    pub fn nosso_numero(&self) -> Option<&PaddedIdentifier> {
        self.nosso_numero.as_ref()
    }

    /* ---------------------------- amounts --------------------------- */

    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = Some(amount);
    }

    /// Valor; обычно совпадает с суммой документа.
    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn set_document_amount(&mut self, amount: Amount) {
        self.document_amount = Some(amount);
    }

    /// Valor do documento: эта сумма попадает в штрихкод.
    pub fn document_amount(&self) -> Option<Amount> {
        self.document_amount
    }

    /* --------------------------- text blocks ------------------------- */

    /// Инструкции кассиру: до 7 строк по 90 символов.
    pub fn set_instructions<I, S>(&mut self, text: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = TextLines::new(
            "instructions",
            text,
            lines::INSTRUCTION_LINES,
            lines::LINE_WIDTH,
        )?;
        Ok(())
    }

    pub fn instructions(&self) -> &[String] {
        self.instructions.lines()
    }

    /// Текст квитанции плательщика: до 12 строк по 90 символов.
    pub fn set_statement<I, S>(&mut self, text: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statement =
            TextLines::new("statement", text, lines::STATEMENT_LINES, lines::LINE_WIDTH)?;
        Ok(())
    }

    pub fn statement(&self) -> &[String] {
        self.statement.lines()
    }

    /// Блок плательщика: до 3 строк, первая — имя.
    pub fn set_payer_block<I, S>(&mut self, text: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payer_block = Some(TextLines::new(
            "payer_block",
            text,
            lines::PAYER_LINES,
            lines::LINE_WIDTH,
        )?);
        Ok(())
    }

    /// Заданный блок или три строки, собранные из [`Payer`].
    pub fn payer_block(&self) -> Vec<String> {
        if let Some(block) = &self.payer_block {
            return block.lines().to_vec();
        }
        let p = &self.payer;
        vec![
            format!("{} - CPF/CNPJ: {}", p.name, p.document),
            p.street.clone(),
            format!("{} - {} - {} - {}", p.district, p.city, p.state, p.postal_code),
        ]
    }

    pub fn set_payee_address(&mut self, address: impl Into<String>) -> Result<()> {
        let address = address.into();
        lines::check_line("payee_address", &address, lines::ADDRESS_WIDTH)?;
        self.payee_address = Some(address);
        Ok(())
    }

    /// Заданный адрес или строка из полей [`Payee`].
    pub fn payee_address(&self) -> String {
        match &self.payee_address {
            Some(address) => address.clone(),
            None => {
                let p = &self.payee;
                format!(
                    "{} - {} - {} - {} - {}",
                    p.street, p.district, p.city, p.state, p.postal_code
                )
            }
        }
    }

    /* ----------------------------- derived --------------------------- */

    pub fn due_factor(&self) -> Result<u32> {
        due_factor(self.due_date)
    }

    /// `"agency/account"`.
    pub fn agency_account(&self) -> Result<String> {
        let agency = self.agency().ok_or(BoletoError::MissingField("agency"))?;
        let account = self.account().ok_or(BoletoError::MissingField("account"))?;
        Ok(format!("{agency}/{account}"))
    }

    /// Код банка с DV, например `"001-9"`.
    pub fn bank_code_with_dv(&self) -> Result<String> {
        if self.bank_code.is_empty() {
            return Err(BoletoError::MissingField("bank_code"));
        }
        with_dv(&pad_bank_code(&self.bank_code)?)
    }

    /// Код банка берётся у стратегии; заданный в boleto код обязан с ним совпадать.
    pub(crate) fn bank_code_for(&self, bank: &dyn BankStrategy) -> Result<String> {
        let code = pad_bank_code(bank.bank_code())?;
        if !self.bank_code.is_empty() && pad_bank_code(&self.bank_code)? != code {
            return Err(BoletoError::BankMismatch {
                slip: self.bank_code.clone(),
                bank: code,
            });
        }
        Ok(code)
    }

    pub(crate) fn bank_code_with_dv_for(&self, bank: &dyn BankStrategy) -> Result<String> {
        with_dv(&self.bank_code_for(bank)?)
    }

    pub fn barcode(&self, bank: &dyn BankStrategy) -> Result<Barcode> {
        Barcode::assemble(self, bank)
    }

    pub fn typing_line(&self, bank: &dyn BankStrategy) -> Result<TypingLine> {
        TypingLine::from_barcode(&self.barcode(bank)?)
    }

    pub fn printable(&self, bank: &dyn BankStrategy) -> Result<PrintableSlip> {
        PrintableSlip::build(self, bank)
    }
}

fn pad_bank_code(code: &str) -> Result<String> {
    ensure_digits("bank_code", code)?;
    pad_numeric_field("bank_code", code, 3)
}

fn with_dv(code: &str) -> Result<String> {
    let dv = modulo11(code, 9, Modulo11Mode::Digit)?;
    Ok(format!("{code}-{dv}"))
}
