//! Rate records and the source they come from.

use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use crate::money::{Iso, MoneyError, Rate};

/// Target side of a rate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTarget {
    /// Currency code the rate converts into.
    pub iso: Iso,
}

/// One exchange rate as published by the gateway.
///
/// The rate is an integer mantissa scaled by `10^pow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Target currency.
    pub to: RateTarget,
    /// Integer mantissa, as a string to keep every digit.
    pub rate: String,
    /// Power-of-ten exponent of the mantissa.
    pub pow: u32,
}

impl RateRecord {
    /// Creates a new rate record.
    #[must_use]
    pub fn new(to_iso: Iso, rate: impl Into<String>, pow: u32) -> Self {
        Self {
            to: RateTarget { iso: to_iso },
            rate: rate.into(),
            pow,
        }
    }

    /// Currency code the rate converts into.
    #[must_use]
    pub const fn target_iso(&self) -> Iso {
        self.to.iso
    }

    /// The exact multiplier.
    pub fn to_rate(&self) -> Result<Rate, MoneyError> {
        Rate::from_scaled(&self.rate, self.pow)
    }
}

/// Anything that can list the rates published for a source currency.
///
/// Closures with the matching signature are rate sources too.
pub trait RateSource {
    /// Lists rates from the currency with this alpha code.
    fn rates(&self, alpha: &str) -> Result<Vec<RateRecord>, ProviderError>;
}

impl<F> RateSource for F
where
    F: Fn(&str) -> Result<Vec<RateRecord>, ProviderError>,
{
    fn rates(&self, alpha: &str) -> Result<Vec<RateRecord>, ProviderError> {
        self(alpha)
    }
}
