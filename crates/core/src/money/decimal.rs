//! Exact decimal helpers shared by rates and coins.
//!
//! CRITICAL: Rounding strategy for money values:
//! - Always round toward positive infinity (ceiling)
//! - Never route an amount through a float
//! - Divide by powers of ten by shifting the scale, not by dividing

use num_bigint::BigInt;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::MoneyError;

/// Widest scale `Decimal` can carry.
pub(crate) const MAX_SCALE: u32 = 28;

/// Parses a plain decimal literal without losing any digit.
pub(crate) fn parse_literal(literal: &str) -> Result<Decimal, MoneyError> {
    Decimal::from_str_exact(literal.trim()).map_err(|_| MoneyError::invalid_amount(literal))
}

/// Rounds toward positive infinity and pads to exactly `precision` digits.
///
/// Fails with `Overflow` when the padded mantissa no longer fits.
pub(crate) fn ceil_to(value: Decimal, precision: u32) -> Result<Decimal, MoneyError> {
    if precision > MAX_SCALE {
        return Err(MoneyError::PrecisionOutOfRange(precision));
    }

    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::ToPositiveInfinity);
    rounded.rescale(precision);
    if rounded.scale() == precision {
        Ok(rounded)
    } else {
        Err(MoneyError::Overflow)
    }
}

/// Divides `value` by `10^pow` exactly.
///
/// Digits that would fall past `MAX_SCALE` are collapsed with a ceiling, so
/// a tiny positive amount never becomes zero.
pub(crate) fn shift_down(value: Decimal, pow: u32) -> Result<Decimal, MoneyError> {
    let value = value.normalize();
    let target = value.scale().saturating_add(pow);

    if target <= MAX_SCALE {
        let mut shifted = value;
        shifted.set_scale(target).map_err(|_| MoneyError::Overflow)?;
        return Ok(shifted);
    }

    let collapsed = ceil_div_pow10(&BigInt::from(value.mantissa()), target - MAX_SCALE);
    to_decimal(&collapsed, MAX_SCALE).ok_or(MoneyError::Overflow)
}

/// Multiplies two amounts.
///
/// The product is formed exactly. When it has more digits than a `Decimal`
/// holds, trailing digits are dropped with a ceiling so the result is never
/// below the true product.
pub(crate) fn multiply(left: Decimal, right: Decimal) -> Result<Decimal, MoneyError> {
    let (left, right) = (left.normalize(), right.normalize());
    let product = BigInt::from(left.mantissa()) * BigInt::from(right.mantissa());
    let scale = left.scale() + right.scale();

    let mut dropped = scale.saturating_sub(MAX_SCALE);
    loop {
        let collapsed = ceil_div_pow10(&product, dropped);
        if let Some(value) = to_decimal(&collapsed, scale - dropped) {
            return Ok(value);
        }
        if dropped >= scale {
            return Err(MoneyError::Overflow);
        }
        dropped += 1;
    }
}

/// `value / 10^pow`, rounded toward positive infinity.
fn ceil_div_pow10(value: &BigInt, pow: u32) -> BigInt {
    if pow == 0 {
        return value.clone();
    }

    let divisor = BigInt::from(10u8).pow(pow);
    let quotient = value / &divisor;
    if value % &divisor > BigInt::from(0u8) {
        quotient + 1
    } else {
        quotient
    }
}

/// `None` when the mantissa does not fit 96 bits.
fn to_decimal(mantissa: &BigInt, scale: u32) -> Option<Decimal> {
    let mantissa = i128::try_from(mantissa).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}
