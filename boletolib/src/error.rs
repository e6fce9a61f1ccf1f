//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoletoError {
    #[error("{field}: {actual} characters, at most {limit} allowed")]
    InvalidLength {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    #[error("{field}: expected only digits, got {value:?}")]
    InvalidDigits { field: &'static str, value: String },

    #[error("{field}: {actual} lines, at most {limit} allowed")]
    TooManyLines {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    #[error("{field}: line has {actual} characters, at most {limit} allowed")]
    LineTooLong {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    #[error("{field}: malformed identifier {value:?}, expected NUMBER or NUMBER-DV")]
    MalformedIdentifier { field: &'static str, value: String },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("modulo 11 base must be at least 2, got {0}")]
    InvalidChecksumBase(u32),

    #[error("checksum overflow on {0}-digit input")]
    ChecksumOverflow(usize),

    #[error("slip is for bank {slip}, strategy is for bank {bank}")]
    BankMismatch { slip: String, bank: String },

    #[error("required field is not set: {0}")]
    MissingField(&'static str),

    #[error("no barcode")]
    MissingBarcode,

    #[error("boleto doesn't have a barcode")]
    EmptyBarcode,

    #[error("not implemented by this bank: {0}")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, BoletoError>;
