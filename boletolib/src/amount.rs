//! Денежные суммы: `Decimal` с ровно двумя знаками, без `f64`.

use crate::error::{BoletoError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Amount {
    /// Округляет до центов (банковское округление) и отвергает отрицательные суммы.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(BoletoError::InvalidAmount(format!("{value} is negative")));
        }
        let value = if value.is_zero() { Decimal::ZERO } else { value };
        let mut cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        cents.rescale(2);
        Ok(Self(cents))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|e| BoletoError::InvalidAmount(format!("{s:?}: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BoletoError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let value = rust_decimal::serde::str::deserialize(d)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
