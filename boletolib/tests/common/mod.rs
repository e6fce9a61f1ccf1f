#![allow(dead_code)]

use boletolib::{BankStrategy, BoletoError, FieldWidths, Result, SlipRecord};
use chrono::NaiveDate;

/// Банк с заранее известным свободным полем.
pub struct FixedBank {
    pub code: &'static str,
    pub free_field: Option<String>,
    pub widths: FieldWidths,
}

impl FixedBank {
    pub fn new(code: &'static str, free_field: &str) -> Self {
        Self { code, free_field: Some(free_field.to_string()), widths: FieldWidths::default() }
    }
}

impl BankStrategy for FixedBank {
    fn bank_code(&self) -> &str {
        self.code
    }

    fn widths(&self) -> FieldWidths {
        self.widths
    }

    fn free_field(&self, _slip: &SlipRecord) -> Result<Option<String>> {
        Ok(self.free_field.clone())
    }
}

/// Банк, который не умеет считать DV «nosso número».
pub struct PartialBank;

impl BankStrategy for PartialBank {
    fn bank_code(&self) -> &str {
        "104"
    }

    fn free_field(&self, _slip: &SlipRecord) -> Result<Option<String>> {
        Err(BoletoError::NotImplemented("free_field"))
    }

    fn nosso_numero_check_digit(&self, _slip: &SlipRecord) -> Result<u8> {
        Err(BoletoError::NotImplemented("nosso_numero_check_digit"))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 001, 2024-05-10, 1234.56 — штрихкод 00191971200001234560000001234567890123456717
pub fn banco_do_brasil_slip() -> (FixedBank, SlipRecord) {
    let bank = FixedBank::new("001", "0000001234567890123456717");
    let mut slip = SlipRecord::for_bank(&bank);
    slip.due_date = Some(date(2024, 5, 10));
    slip.set_document_amount("1234.56".parse().unwrap());
    slip.set_amount("1234.56".parse().unwrap());
    slip.set_agency("1234-5").unwrap();
    slip.set_account("98765-0").unwrap();
    slip.set_nosso_numero("123").unwrap();
    (bank, slip)
}

/// Банк, который после 9999 начинает фактор снова с 1000.
pub struct WrappingBank(pub FixedBank);

impl BankStrategy for WrappingBank {
    fn bank_code(&self) -> &str {
        self.0.bank_code()
    }

    fn due_factor(&self, slip: &SlipRecord) -> Result<u32> {
        let factor = slip.due_factor()?;
        Ok(if factor > 9999 { factor - 9000 } else { factor })
    }

    fn free_field(&self, slip: &SlipRecord) -> Result<Option<String>> {
        self.0.free_field(slip)
    }
}
