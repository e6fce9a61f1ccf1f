//! Контрольные цифры по модулю 10 и 11 (правила FEBRABAN).

use crate::error::{BoletoError, Result};
use crate::format::ensure_digits;
use tracing::trace;

/// Что возвращает [`modulo11`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulo11Mode {
    /// `(sum * 10) % 11`, где 10 превращается в 0.
    Digit,
    /// Сырой остаток `sum % 11`.
    Residue,
}

fn digits_from_right(digits: &str) -> impl Iterator<Item = u32> + '_ {
    digits.bytes().rev().map(|b| u32::from(b - b'0'))
}

/// Модуль 10: веса 2,1,2,1… справа налево, у произведений > 9 складываются цифры.
pub fn modulo10(digits: &str) -> Result<u8> {
    ensure_digits("modulo10 input", digits)?;

    let mut sum = 0u32;
    let mut weight = 2;
    for d in digits_from_right(digits) {
        let partial = d * weight;
        sum += if partial > 9 { partial / 10 + partial % 10 } else { partial };
        weight = if weight == 2 { 1 } else { 2 };
    }

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Модуль 11: веса 2..=`base` справа налево, затем снова с 2.
pub fn modulo11(digits: &str, base: u32, mode: Modulo11Mode) -> Result<u8> {
    ensure_digits("modulo11 input", digits)?;
    // при base < 2 вес никогда не сбрасывается
    if base < 2 {
        return Err(BoletoError::InvalidChecksumBase(base));
    }

    let overflow = || BoletoError::ChecksumOverflow(digits.len());
    let mut sum = 0u64;
    let mut weight = 2u64;
    for d in digits_from_right(digits) {
        sum = u64::from(d)
            .checked_mul(weight)
            .and_then(|p| sum.checked_add(p))
            .ok_or_else(overflow)?;
        if weight == u64::from(base) {
            weight = 1;
        }
        weight += 1;
    }

    let out = match mode {
        Modulo11Mode::Digit => match sum.checked_mul(10).ok_or_else(overflow)? % 11 {
            10 => 0,
            d => d,
        },
        Modulo11Mode::Residue => sum % 11,
    };
    trace!(sum, ?mode, out, "modulo11");
    Ok(out as u8)
}

/// Остатки 0, 1 и 10 дают 1, остальные `11 - residue`.
pub fn digit_from_residue(residue: u8) -> u8 {
    match residue {
        0 | 1 | 10 => 1,
        r => 11 - r,
    }
}

/// Общий DV по модулю 11 (база 9) — для штрихкода и «nosso número».
pub fn modulo11_check_digit(digits: &str) -> Result<u8> {
    modulo11(digits, 9, Modulo11Mode::Residue).map(digit_from_residue)
}
