//! The `Coin` money value.
//!
//! A coin is an exact decimal tied to at most one currency. Once a currency
//! is attached the amount is always stored ceiling-rounded to that
//! currency's precision, so an amount owed is never under-reported.
//!
//! Coins of different currencies never mix: comparing or combining them
//! fails with [`MoneyError::NotEqualCurrency`].

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::{Currency, Iso};
use super::decimal::{ceil_to, multiply};
use super::error::MoneyError;
use super::rate::Rate;

/// The state of a coin's amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// No currency and no rounding yet; full working precision is kept.
    Unassigned(Decimal),
    /// Rounded to a bare precision that is not tied to a registry entry.
    Precise {
        /// Amount, scale equal to `precision`.
        value: Decimal,
        /// Fractional digits.
        precision: u32,
    },
    /// Rounded to the precision of a registered currency.
    Currency {
        /// Amount, scale equal to `precision`.
        value: Decimal,
        /// Currency code.
        iso: Iso,
        /// Fractional digits of the currency.
        precision: u32,
    },
}

impl Amount {
    const fn value(&self) -> Decimal {
        match *self {
            Self::Unassigned(value)
            | Self::Precise { value, .. }
            | Self::Currency { value, .. } => value,
        }
    }
}

/// An amount of money.
///
/// Every operation returns a new coin; the receiver is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    amount: Amount,
}

impl Coin {
    /// A coin with no currency attached.
    pub(crate) const fn unassigned(value: Decimal) -> Self {
        Self {
            amount: Amount::Unassigned(value),
        }
    }

    /// A coin of `currency`, ceiling-rounded to its precision.
    pub(crate) fn with_currency(value: Decimal, currency: &Currency) -> Result<Self, MoneyError> {
        Ok(Self {
            amount: Amount::Currency {
                value: ceil_to(value, currency.precision)?,
                iso: currency.iso,
                precision: currency.precision,
            },
        })
    }

    /// A currency-less coin ceiling-rounded to `precision`.
    pub(crate) fn with_precision(value: Decimal, precision: u32) -> Result<Self, MoneyError> {
        Ok(Self {
            amount: Amount::Precise {
                value: ceil_to(value, precision)?,
                precision,
            },
        })
    }

    /// Same denomination, new value.
    fn rebuild(&self, value: Decimal) -> Result<Self, MoneyError> {
        let amount = match self.amount {
            Amount::Unassigned(_) => Amount::Unassigned(value),
            Amount::Precise { precision, .. } => Amount::Precise {
                value: ceil_to(value, precision)?,
                precision,
            },
            Amount::Currency { iso, precision, .. } => Amount::Currency {
                value: ceil_to(value, precision)?,
                iso,
                precision,
            },
        };
        Ok(Self { amount })
    }

    /// The amount's state.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// The stored decimal.
    #[must_use]
    pub const fn decimal(&self) -> Decimal {
        self.amount.value()
    }

    /// Currency code, if one is attached.
    #[must_use]
    pub const fn currency_iso(&self) -> Option<Iso> {
        match self.amount {
            Amount::Currency { iso, .. } => Some(iso),
            Amount::Unassigned(_) | Amount::Precise { .. } => None,
        }
    }

    /// Fractional digits the amount is rounded to; `0` while unassigned.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        match self.amount {
            Amount::Unassigned(_) => 0,
            Amount::Precise { precision, .. } | Amount::Currency { precision, .. } => precision,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.decimal().is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.decimal().is_sign_negative() && !self.is_zero()
    }

    /// Canonical decimal string, padded to exactly `precision` digits.
    ///
    /// An unassigned coin is rendered at full working precision.
    #[must_use]
    pub fn value(&self) -> String {
        self.decimal().to_string()
    }

    /// The amount times `10^precision` as an integer string.
    ///
    /// This is the integer form the gateway sends and receives; pair it
    /// with [`precision`](Self::precision) as the exponent.
    #[must_use]
    pub fn powed(&self) -> String {
        match self.amount {
            // Stored scale equals precision, so the mantissa is the powed form.
            Amount::Precise { value, .. } | Amount::Currency { value, .. } => {
                value.mantissa().to_string()
            }
            Amount::Unassigned(value) => value
                .round_dp_with_strategy(0, RoundingStrategy::ToPositiveInfinity)
                .mantissa()
                .to_string(),
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency_iso() == other.currency_iso() {
            Ok(())
        } else {
            Err(MoneyError::NotEqualCurrency {
                left: self.currency_iso(),
                right: other.currency_iso(),
            })
        }
    }

    /// Three-way comparison of the stored amounts.
    pub fn compare(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.decimal().cmp(&other.decimal()))
    }

    /// Returns true if both amounts are equal.
    pub fn equals(&self, other: &Self) -> Result<bool, MoneyError> {
        self.compare(other).map(Ordering::is_eq)
    }

    /// Returns true if this amount is greater than `other`.
    pub fn greater_than(&self, other: &Self) -> Result<bool, MoneyError> {
        self.compare(other).map(Ordering::is_gt)
    }

    /// Returns true if this amount is less than `other`.
    pub fn less_than(&self, other: &Self) -> Result<bool, MoneyError> {
        self.compare(other).map(Ordering::is_lt)
    }

    /// Exact sum of two coins of the same currency.
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let sum = self
            .decimal()
            .checked_add(other.decimal())
            .ok_or(MoneyError::Overflow)?;
        self.rebuild(sum)
    }

    /// Exact difference of two coins of the same currency.
    pub fn subtract(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let difference = self
            .decimal()
            .checked_sub(other.decimal())
            .ok_or(MoneyError::Overflow)?;
        self.rebuild(difference)
    }

    /// Converts into `target` using `rate`.
    ///
    /// Converting into the coin's own currency returns an equal coin and
    /// ignores the rate.
    pub fn convert(&self, rate: &Rate, target: &Currency) -> Result<Self, MoneyError> {
        if self.currency_iso() == Some(target.iso) {
            return Ok(*self);
        }

        let converted = multiply(self.decimal(), rate.magnitude())?;
        Self::with_currency(converted, target)
    }

    /// Converts using `rate` and rounds to a bare `precision`.
    ///
    /// The result carries no currency; use [`convert`](Self::convert) when
    /// the target is a registered currency.
    pub fn convert_to_precision(&self, rate: &Rate, precision: u32) -> Result<Self, MoneyError> {
        let converted = multiply(self.decimal(), rate.magnitude())?;
        Self::with_precision(converted, precision)
    }

    /// Adds `percent` percent of the amount to itself.
    ///
    /// A negative percent lowers the amount.
    pub fn percentage(&self, percent: i32) -> Result<Self, MoneyError> {
        let factor = Decimal::new(100 + i64::from(percent), 2);
        self.rebuild(multiply(self.decimal(), factor)?)
    }

    /// Uses the stored amount as a conversion rate.
    #[must_use]
    pub const fn as_rate(&self) -> Rate {
        Rate::from_decimal(self.decimal())
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.decimal())
    }
}
