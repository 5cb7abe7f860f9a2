//! Money error types.
//!
//! Every failure of the currency registry, rate parsing, and coin arithmetic
//! is reported through [`MoneyError`]. None of them are retryable: they
//! indicate bad input or a missing conversion step upstream.

use coinage_shared::AppError;
use thiserror::Error;

use super::currency::Iso;

/// Errors that can occur while building or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Registry Errors ==========
    /// No currency is registered under this numeric code.
    #[error("Unknown currency iso: {0}")]
    UnknownIso(Iso),

    /// No currency is registered under this alpha code.
    #[error("Unknown currency alpha: {0}")]
    UnknownAlpha(String),

    /// Two registry entries share a numeric code.
    #[error("Duplicate currency iso in table: {0}")]
    DuplicateIso(Iso),

    /// Two registry entries share an alpha code.
    #[error("Duplicate currency alpha in table: {0}")]
    DuplicateAlpha(String),

    // ========== Value Errors ==========
    /// Values of different currencies were compared or combined.
    #[error(
        "You should convert values to the same currency: {} vs {}",
        describe(.left),
        describe(.right)
    )]
    NotEqualCurrency {
        /// Currency of the receiver, if any.
        left: Option<Iso>,
        /// Currency of the other operand, if any.
        right: Option<Iso>,
    },

    /// The literal is not a plain decimal number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A precision wider than the decimal type can carry.
    #[error("Precision {0} is out of range")]
    PrecisionOutOfRange(u32),

    /// The exact result does not fit the decimal representation.
    #[error("Amount overflow")]
    Overflow,
}

#[allow(clippy::ref_option)]
fn describe(iso: &Option<Iso>) -> String {
    iso.map_or_else(|| "none".to_string(), |iso| iso.to_string())
}

impl MoneyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownIso(_) | Self::UnknownAlpha(_) => "UNKNOWN_VALUE",
            Self::DuplicateIso(_) | Self::DuplicateAlpha(_) => "DUPLICATE_CURRENCY",
            Self::NotEqualCurrency { .. } => "NOT_EQUAL_CURRENCY",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::PrecisionOutOfRange(_) => "PRECISION_OUT_OF_RANGE",
            Self::Overflow => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - caller input
            Self::UnknownIso(_)
            | Self::UnknownAlpha(_)
            | Self::InvalidAmount(_)
            | Self::PrecisionOutOfRange(_)
            | Self::Overflow => 400,

            // 422 Unprocessable - a conversion step is missing
            Self::NotEqualCurrency { .. } => 422,

            // 500 - the compiled-in table is broken
            Self::DuplicateIso(_) | Self::DuplicateAlpha(_) => 500,
        }
    }

    /// Create an invalid amount error.
    #[must_use]
    pub fn invalid_amount(literal: impl Into<String>) -> Self {
        Self::InvalidAmount(literal.into())
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::UnknownIso(_)
            | MoneyError::UnknownAlpha(_)
            | MoneyError::InvalidAmount(_)
            | MoneyError::PrecisionOutOfRange(_)
            | MoneyError::Overflow => Self::Validation(err.to_string()),
            MoneyError::NotEqualCurrency { .. } => Self::BusinessRule(err.to_string()),
            MoneyError::DuplicateIso(_) | MoneyError::DuplicateAlpha(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MoneyError::UnknownIso(9999).error_code(), "UNKNOWN_VALUE");
        assert_eq!(
            MoneyError::UnknownAlpha("test".into()).error_code(),
            "UNKNOWN_VALUE"
        );
        assert_eq!(
            MoneyError::NotEqualCurrency {
                left: Some(840),
                right: Some(1000),
            }
            .error_code(),
            "NOT_EQUAL_CURRENCY"
        );
        assert_eq!(MoneyError::Overflow.error_code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(MoneyError::UnknownIso(1).http_status_code(), 400);
        assert_eq!(
            MoneyError::invalid_amount("abc").http_status_code(),
            400
        );
        assert_eq!(
            MoneyError::NotEqualCurrency {
                left: None,
                right: Some(840),
            }
            .http_status_code(),
            422
        );
        assert_eq!(MoneyError::DuplicateIso(840).http_status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = MoneyError::NotEqualCurrency {
            left: Some(840),
            right: Some(1000),
        };
        assert_eq!(
            err.to_string(),
            "You should convert values to the same currency: 840 vs 1000"
        );

        let err = MoneyError::NotEqualCurrency {
            left: None,
            right: Some(1000),
        };
        assert_eq!(
            err.to_string(),
            "You should convert values to the same currency: none vs 1000"
        );

        assert_eq!(
            MoneyError::invalid_amount("1e5").to_string(),
            "Invalid amount: \"1e5\""
        );
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = MoneyError::UnknownAlpha("XYZ".into()).into();
        assert_eq!(app.status_code(), 400);

        let app: AppError = MoneyError::DuplicateIso(840).into();
        assert_eq!(app.status_code(), 500);
    }
}
