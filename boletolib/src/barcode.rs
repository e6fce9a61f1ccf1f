//! Штрихкод из 44 цифр:
//! banco(3) moeda(1) DV(1) fator(4) valor(10) campo livre(25)

use crate::{
    error::{BoletoError, Result},
    format::{ensure_digits, pad_numeric_field, strip_amount_to_digits},
    model::SlipRecord,
    traits::BankStrategy,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

pub const BARCODE_LEN: usize = 44;
pub const FREE_FIELD_LEN: usize = 25;
const AMOUNT_LEN: usize = 10;
const FACTOR_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Barcode(String);

impl Barcode {
    /// Собирает штрихкод из текущего состояния boleto.
    pub fn assemble(slip: &SlipRecord, bank: &dyn BankStrategy) -> Result<Self> {
        let bank_code = slip.bank_code_for(bank)?;
        ensure_digits("currency_code", &slip.currency_code)?;
        let currency = pad_numeric_field("currency_code", &slip.currency_code, 1)?;

        let factor = bank.due_factor(slip)?.to_string();
        let factor = pad_numeric_field("due_factor", &factor, FACTOR_LEN)?;
        let amount = slip
            .document_amount()
            .ok_or(BoletoError::MissingField("document_amount"))?;
        let amount = strip_amount_to_digits(&amount.to_string(), AMOUNT_LEN)?;

        let free_field = bank
            .free_field(slip)?
            .filter(|f| !f.is_empty())
            .ok_or(BoletoError::MissingBarcode)?;
        let actual = free_field.chars().count();
        if actual != FREE_FIELD_LEN {
            warn!(bank = bank.bank_code(), actual, "free field has wrong length");
            return Err(BoletoError::InvalidLength {
                field: "free_field",
                limit: FREE_FIELD_LEN,
                actual,
            });
        }
        ensure_digits("free_field", &free_field)?;

        let line = format!("{bank_code}{currency}{factor}{amount}{free_field}");
        let dv = bank.barcode_check_digit(&line)?;
        let barcode = format!("{}{}{}", &line[..4], dv, &line[4..]);

        debug!(bank = %bank_code, factor = %factor, amount = %amount, dv, "barcode assembled");
        Self::parse(&barcode)
    }

    /// Проверяет готовую строку штрихкода.
    pub fn parse(digits: &str) -> Result<Self> {
        if digits.is_empty() {
            return Err(BoletoError::EmptyBarcode);
        }
        if digits.len() != BARCODE_LEN {
            return Err(BoletoError::InvalidLength {
                field: "barcode",
                limit: BARCODE_LEN,
                actual: digits.chars().count(),
            });
        }
        ensure_digits("barcode", digits)?;
        Ok(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bank_code(&self) -> &str {
        &self.0[0..3]
    }

    pub fn currency_code(&self) -> &str {
        &self.0[3..4]
    }

    pub fn check_digit(&self) -> &str {
        &self.0[4..5]
    }

    pub fn due_factor(&self) -> &str {
        &self.0[5..9]
    }

    pub fn amount_digits(&self) -> &str {
        &self.0[9..19]
    }

    pub fn free_field(&self) -> &str {
        &self.0[19..44]
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_empty_and_short() {
        assert_eq!(Barcode::parse("").unwrap_err(), BoletoError::EmptyBarcode);
        assert!(matches!(
            Barcode::parse("0019"),
            Err(BoletoError::InvalidLength { limit: 44, actual: 4, .. })
        ));
        let mut almost = "0".repeat(43);
        almost.push('x');
        assert!(matches!(Barcode::parse(&almost), Err(BoletoError::InvalidDigits { .. })));
    }

    #[test]
    fn slices_positions() {
        let b = Barcode::parse("00191971200001234560000001234567890123456717").unwrap();
        assert_eq!(b.bank_code(), "001");
        assert_eq!(b.currency_code(), "9");
        assert_eq!(b.check_digit(), "1");
        assert_eq!(b.due_factor(), "9712");
        assert_eq!(b.amount_digits(), "0000123456");
        assert_eq!(b.free_field(), "0000001234567890123456717");
    }
}
