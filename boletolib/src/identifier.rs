//! Числовые идентификаторы с необязательным DV через дефис: агентство, счёт, «nosso número».

use crate::error::{BoletoError, Result};
use crate::format::{ensure_digits, pad_numeric_field};
use serde::Serialize;
use std::fmt;

/// Номер, дополненный нулями до ширины банка, и DV как есть.
///
/// `"123-4"` при ширине 4 становится `"0123-4"`. Проверяется и
/// дополняется только часть до дефиса.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddedIdentifier {
    number: String,
    check_digit: Option<String>,
}

impl PaddedIdentifier {
    pub fn parse(field: &'static str, value: &str, width: usize) -> Result<Self> {
        let parts: Vec<&str> = value.split('-').collect();
        let (number, check_digit) = match parts.as_slice() {
            [number] => (*number, None),
            [number, dv] => (*number, Some((*dv).to_string())),
            _ => {
                return Err(BoletoError::MalformedIdentifier {
                    field,
                    value: value.to_string(),
                })
            }
        };

        if !number.is_empty() {
            ensure_digits(field, number)?;
        }

        Ok(Self {
            number: pad_numeric_field(field, number, width)?,
            check_digit,
        })
    }

    /// Номер без DV, уже дополненный нулями.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn check_digit(&self) -> Option<&str> {
        self.check_digit.as_deref()
    }
}

impl fmt::Display for PaddedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.check_digit {
            Some(dv) => write!(f, "{}-{}", self.number, dv),
            None => f.write_str(&self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_check_digit_verbatim() {
        let id = PaddedIdentifier::parse("agency", "123-4", 4).unwrap();
        assert_eq!(id.to_string(), "0123-4");
        assert_eq!(id.number(), "0123");
        assert_eq!(id.check_digit(), Some("4"));

        let id = PaddedIdentifier::parse("account", "55-X", 7).unwrap();
        assert_eq!(id.to_string(), "0000055-X");
    }

    #[test]
    fn without_check_digit() {
        let id = PaddedIdentifier::parse("nosso_numero", "42", 13).unwrap();
        assert_eq!(id.to_string(), "0000000000042");
        assert_eq!(id.check_digit(), None);
    }

    #[test]
    fn rejects_three_parts() {
        let err = PaddedIdentifier::parse("agency", "1-2-3", 4).unwrap_err();
        assert!(matches!(err, BoletoError::MalformedIdentifier { field: "agency", .. }));
    }

    #[test]
    fn length_checked_on_number_only() {
        assert!(PaddedIdentifier::parse("agency", "1234-56789", 4).is_ok());
        assert!(matches!(
            PaddedIdentifier::parse("agency", "12345-6", 4),
            Err(BoletoError::InvalidLength { limit: 4, actual: 5, .. })
        ));
        assert!(matches!(
            PaddedIdentifier::parse("agency", "12a", 4),
            Err(BoletoError::InvalidDigits { .. })
        ));
    }
}
