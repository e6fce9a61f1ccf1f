//! Контракт конкретного банка поверх общих правил FEBRABAN.

use crate::{
    checksum,
    error::{BoletoError, Result},
    model::SlipRecord,
};
use serde::{Deserialize, Serialize};

/// Ширины числовых полей; у некоторых банков отличаются от стандартных.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWidths {
    pub agency: usize,
    pub account: usize,
    pub nosso_numero: usize,
}

impl Default for FieldWidths {
    fn default() -> Self {
        Self {
            agency: 4,
            account: 7,
            nosso_numero: 13,
        }
    }
}

/// Реализуется для каждого банка; сборщик штрихкода получает его по ссылке.
pub trait BankStrategy {
    /// Трёхзначный код банка, например `"001"`.
    fn bank_code(&self) -> &str;

    fn widths(&self) -> FieldWidths {
        FieldWidths::default()
    }

    /// Фактор vencimento для штрихкода. Банки, которые после 9999
    /// начинают счёт заново, переопределяют этот метод.
    fn due_factor(&self, slip: &SlipRecord) -> Result<u32> {
        slip.due_factor()
    }

    /// 25 цифр «campo livre». `Ok(None)` — данных для поля ещё нет.
    fn free_field(&self, slip: &SlipRecord) -> Result<Option<String>>;

    fn nosso_numero_check_digit(&self, slip: &SlipRecord) -> Result<u8> {
        let nosso_numero = slip
            .nosso_numero()
            .ok_or(BoletoError::MissingField("nosso_numero"))?;
        checksum::modulo11_check_digit(nosso_numero.number())
    }

    /// DV штрихкода по 43 цифрам без него.
    fn barcode_check_digit(&self, line: &str) -> Result<u8> {
        checksum::modulo11_check_digit(line)
    }

    fn format_nosso_numero(&self, slip: &SlipRecord) -> Result<String> {
        slip.nosso_numero()
            .map(ToString::to_string)
            .ok_or(BoletoError::MissingField("nosso_numero"))
    }
}
