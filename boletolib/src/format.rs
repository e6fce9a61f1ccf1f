//! Примитивы полей фиксированной ширины: нули слева для чисел, пробелы справа для текста.

use crate::error::{BoletoError, Result};

fn check_width(field: &'static str, value: &str, width: usize) -> Result<usize> {
    let len = value.chars().count();
    if len > width {
        return Err(BoletoError::InvalidLength {
            field,
            limit: width,
            actual: len,
        });
    }
    Ok(len)
}

/// Дополняет число нулями слева до `width`.
pub fn pad_numeric(value: &str, width: usize) -> Result<String> {
    pad_numeric_field("number", value, width)
}

pub(crate) fn pad_numeric_field(field: &'static str, value: &str, width: usize) -> Result<String> {
    let len = check_width(field, value, width)?;
    let mut out = "0".repeat(width - len);
    out.push_str(value);
    Ok(out)
}

/// Дополняет текст пробелами справа до `width`.
pub fn pad_text(value: &str, width: usize) -> Result<String> {
    let len = check_width("text", value, width)?;
    let mut out = String::with_capacity(value.len() + width - len);
    out.push_str(value);
    out.extend(std::iter::repeat(' ').take(width - len));
    Ok(out)
}

/// "1234.56" -> "0000123456" при `width = 10`.
pub fn strip_amount_to_digits(amount: &str, width: usize) -> Result<String> {
    let digits = amount.replace('.', "");
    pad_numeric_field("amount", &digits, width)
}

pub(crate) fn ensure_digits(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoletoError::InvalidDigits {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
