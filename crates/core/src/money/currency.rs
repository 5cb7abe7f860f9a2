//! Currency registry.
//!
//! Maps the gateway's numeric currency codes to their alpha code, display
//! name, and canonical precision. Codes up to 999 follow ISO 4217; codes
//! from 1000 up denote crypto assets.
//!
//! The built-in table is immutable once built. Tests and embedders that need
//! a different set of currencies build their own [`CurrencyTable`] and hand
//! it to a [`CoinFactory`](super::CoinFactory).

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use super::error::MoneyError;

/// Numeric currency identifier.
pub type Iso = u32;

/// Working precision floor for amounts with no currency attached yet.
pub const MAX_PRECISION: u32 = 18;

/// Returns the working precision floor.
#[must_use]
pub const fn max_precision() -> u32 {
    MAX_PRECISION
}

/// Counts the digits after the decimal point of a literal.
///
/// Works on the text only: `"100.1"` is 1, `"0.003"` is 3, `"100"` and
/// `"100."` are 0.
#[must_use]
pub fn scale_of(literal: &str) -> u32 {
    literal
        .trim()
        .split_once('.')
        .map_or(0, |(_, fraction)| {
            u32::try_from(fraction.chars().count()).unwrap_or(u32::MAX)
        })
}

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Numeric code.
    pub iso: Iso,
    /// Short alpha code, e.g. "USD" or "BTC".
    pub alpha: String,
    /// Display name.
    pub name: String,
    /// Number of canonical fractional digits.
    pub precision: u32,
}

impl Currency {
    /// Creates a new registry entry.
    #[must_use]
    pub fn new(iso: Iso, alpha: impl Into<String>, name: impl Into<String>, precision: u32) -> Self {
        Self {
            iso,
            alpha: alpha.into(),
            name: name.into(),
            precision,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.alpha)
    }
}

/// Currencies known to the payment gateway.
const BUILTIN_CURRENCIES: &[(Iso, &str, &str, u32)] = &[
    // Fiat
    (36, "AUD", "Australian Dollar", 2),
    (124, "CAD", "Canadian Dollar", 2),
    (156, "CNY", "Yuan Renminbi", 2),
    (392, "JPY", "Yen", 0),
    (398, "KZT", "Tenge", 2),
    (643, "RUB", "Russian Ruble", 2),
    (756, "CHF", "Swiss Franc", 2),
    (826, "GBP", "Pound Sterling", 2),
    (840, "USD", "US Dollar", 2),
    (978, "EUR", "Euro", 2),
    (980, "UAH", "Hryvnia", 2),
    // Crypto
    (1000, "BTC", "Bitcoin", 8),
    (1002, "ETH", "Ethereum", 18),
    (1003, "LTC", "Litecoin", 8),
    (1005, "DASH", "Dash", 8),
    (1006, "BCH", "Bitcoin Cash", 8),
    (1007, "XMR", "Monero", 12),
    (1010, "XRP", "Ripple", 6),
    (1012, "NEO", "NEO", 0),
    (1014, "ZEC", "Zcash", 8),
    (1019, "XEM", "NEM", 6),
    (1021, "DOGE", "Dogecoin", 8),
    (1026, "ETC", "Ethereum Classic", 18),
    (1031, "USDT", "Tether", 6),
    (1048, "TRX", "Tron", 6),
    (1053, "BNB", "Binance Coin", 8),
];

static BUILTIN: Lazy<CurrencyTable> = Lazy::new(|| {
    CurrencyTable::index(
        BUILTIN_CURRENCIES
            .iter()
            .map(|&(iso, alpha, name, precision)| Currency::new(iso, alpha, name, precision))
            .collect(),
    )
});

/// Immutable lookup table of currencies.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    entries: Vec<Currency>,
    by_iso: HashMap<Iso, usize>,
    by_alpha: HashMap<String, usize>,
}

impl CurrencyTable {
    /// Builds a table, rejecting duplicate codes.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIso` or `DuplicateAlpha` when two entries share a code.
    pub fn new(entries: Vec<Currency>) -> Result<Self, MoneyError> {
        let mut isos = HashSet::with_capacity(entries.len());
        let mut alphas = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !isos.insert(entry.iso) {
                return Err(MoneyError::DuplicateIso(entry.iso));
            }
            if !alphas.insert(entry.alpha.to_uppercase()) {
                return Err(MoneyError::DuplicateAlpha(entry.alpha.clone()));
            }
        }

        Ok(Self::index(entries))
    }

    /// The compiled-in table shared by the whole process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Indexes entries; on a collision the first entry wins.
    fn index(entries: Vec<Currency>) -> Self {
        let mut by_iso = HashMap::with_capacity(entries.len());
        let mut by_alpha = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            by_iso.entry(entry.iso).or_insert(position);
            by_alpha.entry(entry.alpha.to_uppercase()).or_insert(position);
        }

        Self {
            entries,
            by_iso,
            by_alpha,
        }
    }

    /// Looks up a currency by numeric code.
    pub fn get(&self, iso: Iso) -> Result<&Currency, MoneyError> {
        self.by_iso
            .get(&iso)
            .map(|&position| &self.entries[position])
            .ok_or(MoneyError::UnknownIso(iso))
    }

    /// Looks up a currency by alpha code, ignoring case.
    pub fn by_alpha(&self, alpha: &str) -> Result<&Currency, MoneyError> {
        self.by_alpha
            .get(&alpha.to_uppercase())
            .map(|&position| &self.entries[position])
            .ok_or_else(|| MoneyError::UnknownAlpha(alpha.to_string()))
    }

    /// Alpha code of a numeric code.
    pub fn alpha_of(&self, iso: Iso) -> Result<&str, MoneyError> {
        self.get(iso).map(|currency| currency.alpha.as_str())
    }

    /// Numeric code of an alpha code.
    pub fn iso_of(&self, alpha: &str) -> Result<Iso, MoneyError> {
        self.by_alpha(alpha).map(|currency| currency.iso)
    }

    /// Display name of a numeric code.
    pub fn name_of(&self, iso: Iso) -> Result<&str, MoneyError> {
        self.get(iso).map(|currency| currency.name.as_str())
    }

    /// Canonical precision of a numeric code.
    pub fn precision_of(&self, iso: Iso) -> Result<u32, MoneyError> {
        self.get(iso).map(|currency| currency.precision)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
