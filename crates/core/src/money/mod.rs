//! Currency-aware money values.
//!
//! This module implements the value types the payment flow relies on:
//! - Currency registry (code, name, and precision lookup)
//! - Exchange rate multipliers
//! - The `Coin` value type and its factory
//! - Error types for money operations

pub mod coin;
pub mod currency;
mod decimal;
pub mod error;
pub mod factory;
pub mod rate;

#[cfg(test)]
mod coin_props;

pub use coin::{Amount, Coin};
pub use currency::{Currency, CurrencyTable, Iso, MAX_PRECISION, max_precision, scale_of};
pub use error::MoneyError;
pub use factory::CoinFactory;
pub use rate::Rate;
