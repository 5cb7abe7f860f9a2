//! Payment provider orchestration.
//!
//! Glues the money core to the gateway's data: picks rates out of rate
//! records, converts and marks up amounts, and shapes bill payloads. The
//! transport itself stays behind [`RateSource`].

use coinage_shared::ProviderConfig;
use tracing::{debug, warn};

use super::bill::{BillRequest, NewBill};
use super::error::ProviderError;
use super::rates::{RateRecord, RateSource};
use crate::money::CoinFactory;

/// Gateway-facing service built on the money core.
pub struct Provider<'a, S> {
    config: ProviderConfig,
    source: S,
    factory: CoinFactory<'a>,
}

impl<S: RateSource> Provider<'static, S> {
    /// Creates a provider backed by the built-in currency table.
    pub fn new(config: ProviderConfig, source: S) -> Self {
        Self::with_factory(config, source, CoinFactory::default())
    }
}

impl<'a, S: RateSource> Provider<'a, S> {
    /// Creates a provider with an explicit coin factory.
    pub fn with_factory(config: ProviderConfig, source: S, factory: CoinFactory<'a>) -> Self {
        Self {
            config,
            source,
            factory,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Rates endpoint for a source currency.
    pub fn rates_url(&self, alpha: &str) -> String {
        format!(
            "{}/api/v1/pay/rates/{}",
            self.config.api_base(),
            alpha.to_lowercase()
        )
    }

    /// Wallet list endpoint, or a single wallet's.
    pub fn wallets_url(&self, wallet: Option<u64>) -> String {
        with_id(format!("{}/api/v1/pay/wallets", self.config.api_base()), wallet)
    }

    /// Bill list endpoint, or a single bill's.
    pub fn bills_url(&self, bill: Option<u64>) -> String {
        with_id(format!("{}/api/v1/pay/bills", self.config.api_base()), bill)
    }

    /// Fetches the rates published for `alpha`.
    pub fn rates(&self, alpha: &str) -> Result<Vec<RateRecord>, ProviderError> {
        let rates = self.source.rates(alpha)?;
        debug!(currency = %alpha, count = rates.len(), "Fetched rates");
        Ok(rates)
    }

    /// Converts `sum` of `from` into `to` and returns the canonical value.
    ///
    /// `rates` are the records published for `from`; when `None` they are
    /// fetched from the rate source. Same-currency conversion skips rates
    /// entirely. If several records target `to`, the last one wins.
    ///
    /// # Errors
    ///
    /// Returns `IncorrectRates` when no record targets `to`.
    pub fn convert_currency(
        &self,
        sum: &str,
        from: &str,
        to: &str,
        rates: Option<&[RateRecord]>,
    ) -> Result<String, ProviderError> {
        let currencies = self.factory.currencies();
        let iso_from = currencies.iso_of(from)?;
        let target = currencies.by_alpha(to)?;

        let input = self.factory.create(sum, Some(iso_from), None)?;
        if iso_from == target.iso {
            return Ok(input.value());
        }

        let fetched;
        let rates: &[RateRecord] = match rates {
            Some(rates) => rates,
            None => {
                fetched = self.rates(from)?;
                fetched.as_slice()
            }
        };

        let Some(record) = rates.iter().rev().find(|r| r.target_iso() == target.iso) else {
            warn!(from = iso_from, to = target.iso, "No rate for currency pair");
            return Err(ProviderError::IncorrectRates {
                from: iso_from,
                to: target.iso,
            });
        };

        let rate = record.to_rate()?;
        let converted = input.convert(&rate, target)?;
        debug!(
            from = iso_from,
            to = target.iso,
            %rate,
            amount = %converted,
            "Converted amount"
        );

        Ok(converted.value())
    }

    /// Adds `percent` percent to `sum` of `currency`.
    pub fn add_markup(&self, sum: &str, currency: &str, percent: i32) -> Result<String, ProviderError> {
        let iso = self.factory.currencies().iso_of(currency)?;
        let amount = self.factory.create(sum, Some(iso), None)?;
        let marked_up = amount.percentage(percent)?;
        debug!(iso, percent, amount = %marked_up, "Applied markup");

        Ok(marked_up.value())
    }

    /// Builds a new-bill request for `sum` of `currency` into `wallet`.
    ///
    /// `lifetime` falls back to the configured default.
    pub fn new_bill(
        &self,
        wallet: u64,
        sum: &str,
        currency: &str,
        lifetime: Option<u32>,
        tracking_id: Option<&str>,
        callback_url: Option<&str>,
    ) -> Result<BillRequest, ProviderError> {
        let iso = self.factory.currencies().iso_of(currency)?;
        let amount = self.factory.create(sum, Some(iso), None)?;

        let payload = NewBill {
            amount: amount.powed(),
            wallet,
            pow: amount.precision(),
            lifetime: lifetime.unwrap_or(self.config.default_bill_lifetime_secs),
            tracking_id: tracking_id.map(str::to_string),
            callback_url: callback_url.map(str::to_string),
        };
        debug!(wallet, iso, amount = %payload.amount, pow = payload.pow, "Prepared bill");

        Ok(BillRequest {
            url: self.bills_url(None),
            payload,
        })
    }
}

fn with_id(base: String, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("{base}/{id}"),
        None => base,
    }
}
