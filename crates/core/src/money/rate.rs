//! Exchange rate multiplier.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use super::decimal::{parse_literal, shift_down};
use super::error::MoneyError;

/// Immutable multiplier turning an amount of one currency into another.
///
/// `1 source = magnitude target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rate {
    magnitude: Decimal,
}

impl Rate {
    /// Parses a plain decimal literal, keeping every digit.
    pub fn from_literal(value: &str) -> Result<Self, MoneyError> {
        parse_literal(value).map(Self::from_decimal)
    }

    /// Builds `mantissa / 10^pow` without any rounding.
    ///
    /// This is the shape rate records arrive in from the gateway.
    pub fn from_scaled(mantissa: &str, pow: u32) -> Result<Self, MoneyError> {
        let value = parse_literal(mantissa)?;
        shift_down(value, pow).map(Self::from_decimal)
    }

    /// Wraps an already exact decimal.
    #[must_use]
    pub const fn from_decimal(magnitude: Decimal) -> Self {
        Self { magnitude }
    }

    /// The multiplier.
    #[must_use]
    pub const fn magnitude(&self) -> Decimal {
        self.magnitude
    }
}

impl FromStr for Rate {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s)
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.magnitude)
    }
}
