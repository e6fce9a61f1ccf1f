//! «Fator de vencimento»: число дней от 2000-07-03 плюс 1000.

use crate::error::{BoletoError, Result};
use chrono::NaiveDate;

pub const FACTOR_EPOCH_VALUE: i64 = 1000;

pub fn factor_epoch() -> NaiveDate {
    // 2000-07-03 всегда валидна
    NaiveDate::from_ymd_opt(2000, 7, 3).unwrap_or(NaiveDate::MIN)
}

/// Фактор для даты; `None` означает, что дата не задана.
pub fn due_factor(due_date: Option<NaiveDate>) -> Result<u32> {
    let date = due_date.ok_or_else(|| BoletoError::InvalidDate("due date is not set".into()))?;
    let factor = (date - factor_epoch()).num_days() + FACTOR_EPOCH_VALUE;
    u32::try_from(factor)
        .map_err(|_| BoletoError::InvalidDate(format!("{date} is before the due factor range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_valid() {
        assert_eq!(factor_epoch(), NaiveDate::from_ymd_opt(2000, 7, 3).unwrap());
    }

    #[test]
    fn first_representable_day() {
        let d = NaiveDate::from_ymd_opt(1997, 10, 7).unwrap();
        assert_eq!(due_factor(Some(d)).unwrap(), 0);
        assert!(due_factor(d.pred_opt()).is_err());
    }
}
