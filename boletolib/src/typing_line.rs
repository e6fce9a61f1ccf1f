//! «Linha digitável» — штрихкод, перегруппированный для ручного ввода.
//!
//! | группа | источник                        | DV        |
//! |--------|---------------------------------|-----------|
//! | 1      | `barcode[0..4] + barcode[19..24]` | модуль 10 |
//! | 2      | `barcode[24..34]`               | модуль 10 |
//! | 3      | `barcode[34..44]`               | модуль 10 |
//! | 4      | `barcode[4]`                    | —         |
//! | 5      | `barcode[5..19]`                | —         |

use crate::{barcode::Barcode, checksum::modulo10, error::Result};
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypingLine(String);

/// Дописывает DV по модулю 10 и ставит точку после пятой цифры.
fn field_with_dv(source: &str) -> Result<String> {
    let dv = modulo10(source)?;
    let with_dv = format!("{source}{dv}");
    Ok(format!("{}.{}", &with_dv[..5], &with_dv[5..]))
}

impl TypingLine {
    pub fn from_barcode(barcode: &Barcode) -> Result<Self> {
        let b = barcode.as_str();

        let field1 = field_with_dv(&format!("{}{}", &b[0..4], &b[19..24]))?;
        let field2 = field_with_dv(&b[24..34])?;
        let field3 = field_with_dv(&b[34..44])?;
        let field4 = &b[4..5];
        let field5 = &b[5..19];

        let line = format!("{field1} {field2} {field3} {field4} {field5}");
        debug!(%line, "typing line formatted");
        Ok(Self(line))
    }

    /// То же из сырой строки; пустая строка — [`crate::error::BoletoError::EmptyBarcode`].
    pub fn from_digits(barcode: &str) -> Result<Self> {
        Self::from_barcode(&Barcode::parse(barcode)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Только цифры, без точек и пробелов (47 знаков).
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for TypingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
