use boletolib::checksum::{digit_from_residue, modulo10, modulo11, modulo11_check_digit, Modulo11Mode};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn modulo10_regression() {
    assert_eq!(modulo10("1234567890").unwrap(), 3);
    assert_eq!(modulo10("001900000").unwrap(), 9);
    assert_eq!(modulo10("0123456789").unwrap(), 7);
}

#[test]
fn modulo10_sums_digits_of_products() {
    // 9*2 = 18 -> 1+8 = 9, а не 18
    assert_eq!(modulo10("9").unwrap(), 1);
    assert_eq!(modulo10("0").unwrap(), 0);
}

#[test]
fn modulo11_modes() {
    // 3*2 + 2*3 + 1*4 = 16
    assert_eq!(modulo11("123", 9, Modulo11Mode::Residue).unwrap(), 5);
    assert_eq!(modulo11("123", 9, Modulo11Mode::Digit).unwrap(), 6);
    assert_eq!(modulo11("1234567890", 9, Modulo11Mode::Residue).unwrap(), 0);
}

#[rstest]
#[case("001", 9)]
#[case("237", 2)]
#[case("341", 7)]
fn bank_code_digit(#[case] code: &str, #[case] dv: u8) {
    assert_eq!(modulo11(code, 9, Modulo11Mode::Digit).unwrap(), dv);
}

#[rstest]
#[case("0000000000123", 6)]
#[case("1234567", 9)]
#[case("00000000001", 9)]
fn nosso_numero_digit(#[case] number: &str, #[case] dv: u8) {
    assert_eq!(modulo11_check_digit(number).unwrap(), dv);
}

#[test]
fn barcode_line_with_residue_ten_maps_to_one() {
    let line = "0019971200001234560000001234567890123456717";
    assert_eq!(modulo11(line, 9, Modulo11Mode::Residue).unwrap(), 10);
    assert_eq!(modulo11_check_digit(line).unwrap(), 1);
}

proptest! {
    #[test]
    fn checksums_are_deterministic_single_digits(digits in "[0-9]{1,60}") {
        let a = modulo10(&digits).unwrap();
        prop_assert_eq!(a, modulo10(&digits).unwrap());
        prop_assert!(a <= 9);

        let d = modulo11(&digits, 9, Modulo11Mode::Digit).unwrap();
        let r = modulo11(&digits, 9, Modulo11Mode::Residue).unwrap();
        prop_assert!(d <= 9);
        prop_assert!(r <= 10);
    }

    #[test]
    fn digit_mode_with_mapping_matches_canonical_rule(digits in "[0-9]{1,60}") {
        let d = modulo11(&digits, 9, Modulo11Mode::Digit).unwrap();
        let mapped = if matches!(d, 0 | 1 | 10) { 1 } else { d };
        let r = modulo11(&digits, 9, Modulo11Mode::Residue).unwrap();
        prop_assert_eq!(mapped, digit_from_residue(r));
    }
}
