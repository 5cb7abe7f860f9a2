//! Provider error types.

use coinage_shared::AppError;
use thiserror::Error;

use crate::money::{Iso, MoneyError};

/// Errors that can occur while orchestrating gateway operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No rate record converts into the requested currency.
    #[error("Can't get rates to convert from {from} to {to}")]
    IncorrectRates {
        /// Source currency code.
        from: Iso,
        /// Target currency code.
        to: Iso,
    },

    /// The rate source failed.
    #[error("Rate source failed: {0}")]
    Transport(String),

    /// A money operation failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl ProviderError {
    /// Create a transport error.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::IncorrectRates { .. } => "INCORRECT_RATES",
            Self::Transport(_) => "RATE_SOURCE_ERROR",
            Self::Money(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::IncorrectRates { .. } => 422,
            Self::Transport(_) => 502,
            Self::Money(err) => err.http_status_code(),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::IncorrectRates { .. } => Self::BusinessRule(err.to_string()),
            ProviderError::Transport(msg) => Self::ExternalService(msg),
            ProviderError::Money(err) => err.into(),
        }
    }
}
