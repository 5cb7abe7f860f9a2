//! Property-based tests for coin rounding and currency safety.
//!
//! - Mixed currencies never compare or combine
//! - Values carry exactly the currency's precision
//! - Powed form round-trips
//! - Ceiling rounding never lowers an amount, checked against exact
//!   integer products

use num_bigint::BigInt;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rust_decimal::Decimal;

use super::coin::Coin;
use super::currency::{CurrencyTable, Iso};
use super::error::MoneyError;
use super::factory::CoinFactory;
use super::rate::Rate;

/// Strategy to pick a registered currency code.
fn registered_iso() -> impl Strategy<Value = Iso> {
    let isos: Vec<Iso> = CurrencyTable::builtin().iter().map(|c| c.iso).collect();
    prop::sample::select(isos)
}

/// Strategy to pick two distinct registered currency codes.
fn distinct_isos() -> impl Strategy<Value = (Iso, Iso)> {
    (registered_iso(), registered_iso()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to generate positive literals with 0 to 18 fractional digits.
///
/// Kept below 1e9 so an 18-digit currency still fits the mantissa.
fn positive_literal() -> impl Strategy<Value = String> {
    (1i64..1_000_000_000i64, 0u32..=18)
        .prop_map(|(units, scale)| Decimal::new(units, scale).to_string())
}

/// Strategy to generate rates with 18 fractional digits, up to about 9.2.
fn positive_rate() -> impl Strategy<Value = Rate> {
    (1i64..=i64::MAX).prop_map(|v| Rate::from_decimal(Decimal::new(v, 18)))
}

fn create(sum: &str, iso: Option<Iso>) -> Coin {
    CoinFactory::default().create(sum, iso, None).unwrap()
}

/// `value * 10^scale` as an integer. `scale` must not be below `value.scale()`.
fn units(value: Decimal, scale: u32) -> BigInt {
    BigInt::from(value.mantissa()) * BigInt::from(10u8).pow(scale - value.scale())
}

/// Checks that `rounded` is the ceiling of `mantissa / 10^scale` at the
/// precision `rounded` carries.
fn check_ceiling(mantissa: &BigInt, scale: u32, rounded: Decimal) -> Result<(), TestCaseError> {
    let common = scale.max(rounded.scale());
    let exact = mantissa * BigInt::from(10u8).pow(common - scale);
    let reported = units(rounded, common);
    let step = BigInt::from(10u8).pow(common - rounded.scale());

    prop_assert!(reported >= exact, "{} is below the exact value", rounded);
    prop_assert!(reported - &exact < step, "{} is a full step above the exact value", rounded);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* two different currencies, every comparison and arithmetic
    /// operation SHALL fail with `NotEqualCurrency`.
    #[test]
    fn prop_mixed_currencies_rejected(
        (left, right) in distinct_isos(),
        x in positive_literal(),
        y in positive_literal(),
    ) {
        let a = create(&x, Some(left));
        let b = create(&y, Some(right));
        let is_mismatch = |err: MoneyError| matches!(err, MoneyError::NotEqualCurrency { .. });

        prop_assert!(a.equals(&b).is_err_and(is_mismatch));
        prop_assert!(a.greater_than(&b).is_err_and(is_mismatch));
        prop_assert!(a.less_than(&b).is_err_and(is_mismatch));
        prop_assert!(a.add(&b).is_err_and(is_mismatch));
        prop_assert!(a.subtract(&b).is_err_and(is_mismatch));
    }

    /// *For any* registered currency, `value()` SHALL have exactly the
    /// currency's precision in fractional digits.
    #[test]
    fn prop_value_has_currency_precision(
        iso in registered_iso(),
        x in positive_literal(),
    ) {
        let precision = CurrencyTable::builtin().precision_of(iso).unwrap();
        let value = create(&x, Some(iso)).value();
        let digits = value.split_once('.').map_or(0, |(_, fraction)| fraction.len());
        prop_assert_eq!(digits, precision as usize, "value {} for iso {}", value, iso);
    }

    /// *For any* coin with a currency, reading `powed()` back with the
    /// currency's precision as exponent SHALL reproduce the coin.
    #[test]
    fn prop_powed_round_trips(
        iso in registered_iso(),
        x in positive_literal(),
    ) {
        let factory = CoinFactory::default();
        let coin = create(&x, Some(iso));
        let restored = factory
            .create(&coin.powed(), Some(iso), Some(coin.precision()))
            .unwrap();
        prop_assert!(restored.equals(&coin).unwrap());
        prop_assert_eq!(restored.value(), coin.value());
    }

    /// *For any* literal, the ceiling-rounded amount SHALL be at least the
    /// parsed amount and less than one unit of precision above it.
    #[test]
    fn prop_ceiling_is_monotonic_and_tight(
        iso in registered_iso(),
        x in positive_literal(),
    ) {
        let parsed = create(&x, None).decimal();
        let coin = create(&x, Some(iso));
        let unit = Decimal::new(1, coin.precision());

        prop_assert!(parsed <= coin.decimal());
        prop_assert!(coin.decimal() - parsed < unit);
    }

    /// *For any* rate, converting into the coin's own currency SHALL leave
    /// the value unchanged.
    #[test]
    fn prop_same_currency_convert_is_noop(
        iso in registered_iso(),
        x in positive_literal(),
        rate in positive_rate(),
    ) {
        let coin = create(&x, Some(iso));
        let target = CurrencyTable::builtin().get(iso).unwrap();
        let converted = coin.convert(&rate, target).unwrap();
        prop_assert_eq!(converted.value(), coin.value());
    }

    /// *For any* positive amount and rate, conversion SHALL report the
    /// ceiling of the exact product at the target's precision.
    #[test]
    fn prop_convert_is_ceiling_of_exact_product(
        (from, to) in distinct_isos(),
        x in positive_literal(),
        rate in positive_rate(),
    ) {
        let coin = create(&x, Some(from));
        let target = CurrencyTable::builtin().get(to).unwrap();
        let converted = coin.convert(&rate, target).unwrap();

        let (amount, magnitude) = (coin.decimal(), rate.magnitude());
        let product = BigInt::from(amount.mantissa()) * BigInt::from(magnitude.mantissa());
        check_ceiling(&product, amount.scale() + magnitude.scale(), converted.decimal())?;
    }

    /// *For any* unassigned amount and rate, converting to a raw precision
    /// SHALL report the ceiling of the exact product.
    #[test]
    fn prop_convert_to_precision_is_ceiling_of_exact_product(
        x in positive_literal(),
        rate in positive_rate(),
        precision in 0u32..=18,
    ) {
        let coin = create(&x, None);
        let converted = coin.convert_to_precision(&rate, precision).unwrap();

        let (amount, magnitude) = (coin.decimal(), rate.magnitude());
        let product = BigInt::from(amount.mantissa()) * BigInt::from(magnitude.mantissa());
        check_ceiling(&product, amount.scale() + magnitude.scale(), converted.decimal())?;
    }

    /// *For any* amount and markup, `percentage` SHALL report the ceiling
    /// of `amount * (100 + percent) / 100`.
    #[test]
    fn prop_percentage_is_ceiling_of_exact_markup(
        iso in registered_iso(),
        x in positive_literal(),
        percent in -99i32..=500,
    ) {
        let coin = create(&x, Some(iso));
        let marked = coin.percentage(percent).unwrap();

        let amount = coin.decimal();
        let product = BigInt::from(amount.mantissa()) * BigInt::from(100 + percent);
        check_ceiling(&product, amount.scale() + 2, marked.decimal())?;
    }

    /// *For any* pair of same-currency coins, subtracting what was added
    /// SHALL give back the original.
    #[test]
    fn prop_add_then_subtract_restores(
        iso in registered_iso(),
        x in positive_literal(),
        y in positive_literal(),
    ) {
        let a = create(&x, Some(iso));
        let b = create(&y, Some(iso));
        let restored = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert!(restored.equals(&a).unwrap());
    }
}
