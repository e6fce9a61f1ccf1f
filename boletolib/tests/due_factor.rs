mod common;

use boletolib::{due_factor::due_factor, BoletoError, SlipRecord};
use common::date;
use rstest::rstest;

#[rstest]
#[case(date(2000, 7, 3), 1000)]
#[case(date(2000, 7, 4), 1001)]
#[case(date(2000, 7, 2), 999)]
#[case(date(2024, 5, 10), 9712)]
#[case(date(2025, 2, 21), 9999)]
fn factor_for_date(#[case] d: chrono::NaiveDate, #[case] expected: u32) {
    assert_eq!(due_factor(Some(d)).unwrap(), expected);
}

#[test]
fn unset_due_date_is_invalid() {
    assert!(matches!(due_factor(None), Err(BoletoError::InvalidDate(_))));

    let slip = SlipRecord::new();
    assert!(matches!(slip.due_factor(), Err(BoletoError::InvalidDate(_))));
}

#[test]
fn no_upper_bound() {
    assert_eq!(due_factor(Some(date(2025, 2, 22))).unwrap(), 10000);
}
