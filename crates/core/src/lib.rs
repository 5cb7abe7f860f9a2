//! Currency-safe money values for Coinage.
//!
//! This crate contains pure money logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `money` - Currency registry, exchange rates, and the `Coin` value type
//! - `provider` - Payment gateway orchestration: rate selection, conversion,
//!   markup, and bill payloads

pub mod money;
pub mod provider;
