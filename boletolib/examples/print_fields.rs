use boletolib::{BankStrategy, Result, SlipRecord};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// Учебный банк: свободное поле = «nosso número» (13) + агентство (4) + счёт (7) + '1'.
struct DemoBank;

impl BankStrategy for DemoBank {
    fn bank_code(&self) -> &str {
        "001"
    }

    fn free_field(&self, slip: &SlipRecord) -> Result<Option<String>> {
        let (Some(nn), Some(agency), Some(account)) =
            (slip.nosso_numero(), slip.agency(), slip.account())
        else {
            return Ok(None);
        };
        Ok(Some(format!("{}{}{}1", nn.number(), agency.number(), account.number())))
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Пример: печатаем вычисленные поля в JSON (stdout)
    let mut slip = SlipRecord::for_bank(&DemoBank);
    slip.due_date = NaiveDate::from_ymd_opt(2024, 5, 10);
    slip.set_document_amount("1234.56".parse()?);
    slip.set_agency("1234-5")?;
    slip.set_account("98765-0")?;
    slip.set_nosso_numero("123")?;
    slip.payee.name = "Loja Exemplo Ltda".into();
    slip.payer.name = "Maria Silva".into();
    slip.set_instructions(["Não receber após o vencimento"])?;

    let printable = slip.printable(&DemoBank)?;
    println!("{}", serde_json::to_string_pretty(&printable)?);
    Ok(())
}
