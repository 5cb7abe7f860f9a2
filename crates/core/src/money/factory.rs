//! Single construction entry point for coins.

use super::coin::Coin;
use super::currency::{CurrencyTable, Iso, max_precision, scale_of};
use super::decimal::{parse_literal, shift_down};
use super::error::MoneyError;
use super::rate::Rate;

/// Turns raw literals into coins against a currency table.
///
/// Call sites build coins here instead of touching `Coin` directly, so a
/// test can swap the table without touching global state.
#[derive(Debug, Clone, Copy)]
pub struct CoinFactory<'a> {
    currencies: &'a CurrencyTable,
}

impl Default for CoinFactory<'static> {
    fn default() -> Self {
        Self::new(CurrencyTable::builtin())
    }
}

impl<'a> CoinFactory<'a> {
    /// Creates a factory backed by `currencies`.
    #[must_use]
    pub const fn new(currencies: &'a CurrencyTable) -> Self {
        Self { currencies }
    }

    /// The table this factory resolves currencies against.
    #[must_use]
    pub const fn currencies(&self) -> &'a CurrencyTable {
        self.currencies
    }

    /// Creates a coin from a decimal literal.
    ///
    /// * `sum` - Plain decimal literal, e.g. `"0.02"`
    /// * `iso` - Currency to attach; `None` keeps the full working precision
    /// * `pow` - When set, `sum` is an integer amount scaled by `10^pow`
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::money::CoinFactory;
    ///
    /// let factory = CoinFactory::default();
    /// let btc = factory.create("0.0000001", Some(1000), None).unwrap();
    /// assert_eq!(btc.value(), "0.00000010");
    ///
    /// let scaled = factory.create("50", Some(1000), Some(8)).unwrap();
    /// assert_eq!(scaled.powed(), "50");
    /// ```
    pub fn create(&self, sum: &str, iso: Option<Iso>, pow: Option<u32>) -> Result<Coin, MoneyError> {
        let parsed = parse_literal(sum)?;
        let value = match pow {
            Some(pow) => shift_down(parsed, pow)?,
            None => {
                let mut working = parsed;
                working.rescale(scale_of(sum).max(max_precision()));
                working
            }
        };

        match iso {
            Some(iso) => Coin::with_currency(value, self.currencies.get(iso)?),
            None => Ok(Coin::unassigned(value)),
        }
    }

    /// Converts `coin` into the currency registered under `iso`.
    pub fn convert(&self, coin: &Coin, rate: &Rate, iso: Iso) -> Result<Coin, MoneyError> {
        coin.convert(rate, self.currencies.get(iso)?)
    }
}
