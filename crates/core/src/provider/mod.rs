//! Payment gateway orchestration on top of the money core.
//!
//! - Rate records and the `RateSource` seam
//! - The `Provider` service (conversion, markup, bill payloads)
//! - Error types for provider operations

pub mod bill;
pub mod error;
pub mod rates;
pub mod service;

pub use bill::{BillRequest, NewBill};
pub use error::ProviderError;
pub use rates::{RateRecord, RateSource, RateTarget};
pub use service::Provider;
