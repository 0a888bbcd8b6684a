//! Property-based tests for amount conversion and arithmetic.
//!
//! - Property 1: Conversion to the own currency is the identity
//! - Property 2: Round trip through the base currency preserves the value
//! - Property 3: Addition is commutative in value
//! - Property 4: Subtraction undoes addition
//! - Property 5: Cross-base operations always fail
//! - Property 6: Allocation sum invariant

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::currency::{Currencies, Currency};
use crate::error::TraderError;
use crate::trader::Trader;

/// Tolerance for comparisons after a bounded-precision division.
const EPSILON: Decimal = dec!(0.000000001);

/// Strategy to generate decimal amounts (-1,000,000.00 to 1,000,000.00).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a currency code from the test registry.
fn any_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("JPY")]
}

fn trader(eur: Decimal, jpy: Decimal) -> Trader {
    Trader::new(
        Currencies::new(vec![
            Currency::new("USD", Decimal::ONE),
            Currency::new("EUR", eur),
            Currency::new("JPY", jpy),
        ]),
        "USD",
    )
    .unwrap()
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= EPSILON
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: *For any* amount, converting to its own currency SHALL
    /// return the same value.
    #[test]
    fn prop_to_own_currency_is_identity(
        value in any_amount(),
        code in any_code(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let amount = trader(eur, jpy).new_amount(value, code).unwrap();
        let converted = amount.to_currency(code).unwrap();
        prop_assert_eq!(converted.value(), amount.value());
    }

    /// Property 1.1: *For any* amount in the base currency, the base-currency
    /// value SHALL be the raw value.
    #[test]
    fn prop_base_currency_value_is_identity_for_base(
        value in any_amount(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let amount = trader(eur, jpy).new_amount(value, "usd").unwrap();
        prop_assert_eq!(amount.base_currency_value().unwrap(), value);
    }

    /// Property 2: *For any* amount in X, converting to the base currency and
    /// back SHALL give the original value within division precision.
    #[test]
    fn prop_round_trip_through_base(
        value in any_amount(),
        code in any_code(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let amount = trader(eur, jpy).new_amount(value, code).unwrap();
        let back = amount
            .to_currency("USD")
            .unwrap()
            .to_currency(code)
            .unwrap();
        prop_assert!(
            close(back.value(), value),
            "{} -> {} should round trip", value, back.value()
        );
    }

    /// Property 3: *For any* two amounts, `a + b` and `b + a` SHALL have the
    /// same base-currency value, each expressed in its receiver's currency.
    #[test]
    fn prop_add_commutes_in_value(
        a in any_amount(),
        b in any_amount(),
        code_a in any_code(),
        code_b in any_code(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let trader = trader(eur, jpy);
        let a = trader.new_amount(a, code_a).unwrap();
        let b = trader.new_amount(b, code_b).unwrap();

        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        prop_assert!(ab.currency().is(code_a));
        prop_assert!(ba.currency().is(code_b));
        prop_assert!(close(
            ab.base_currency_value().unwrap(),
            ba.base_currency_value().unwrap()
        ));
    }

    /// Property 4: *For any* compatible amounts, `(a + b) - b` SHALL equal `a`
    /// within division precision.
    #[test]
    fn prop_subtract_undoes_add(
        a in any_amount(),
        b in any_amount(),
        code_a in any_code(),
        code_b in any_code(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let trader = trader(eur, jpy);
        let a = trader.new_amount(a, code_a).unwrap();
        let b = trader.new_amount(b, code_b).unwrap();

        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert!(back.currency().is(code_a));
        prop_assert!(
            close(back.value(), a.value()),
            "{} should equal {}", back.value(), a.value()
        );
    }

    /// Property 5: *For any* amounts from contexts with different base
    /// currencies, every binary operation SHALL fail with a mismatch.
    #[test]
    fn prop_cross_base_always_fails(
        a in any_amount(),
        b in any_amount(),
        rate in positive_rate(),
    ) {
        let usd = trader(rate, rate).new_amount(a, "usd").unwrap();
        let other = Trader::new(
            Currencies::new(vec![
                Currency::new("USD", Decimal::ONE),
                Currency::new("BAD", rate),
            ]),
            "BAD",
        )
        .unwrap()
        .new_amount(b, "usd")
        .unwrap();

        let is_mismatch = |e: TraderError| matches!(e, TraderError::BaseCurrencyMismatch { .. });
        prop_assert!(is_mismatch(usd.add(&other).unwrap_err()));
        prop_assert!(is_mismatch(usd.subtract(&other).unwrap_err()));
        prop_assert!(is_mismatch(usd.multiply(&other).unwrap_err()));
        prop_assert!(is_mismatch(usd.divide(&other).unwrap_err()));
        prop_assert!(is_mismatch(usd.compare(&other).unwrap_err()));
    }

    /// Property 6: *For any* amount and weights, the allocated shares SHALL
    /// sum exactly to the amount rounded to its minor units.
    #[test]
    fn prop_allocate_sum_invariant(
        value in any_amount(),
        code in any_code(),
        weights in prop::collection::vec(1u32..100, 1..10),
    ) {
        let trader = trader(dec!(0.8), dec!(150));
        let amount = trader.new_amount(value, code).unwrap();
        let weights: Vec<Decimal> = weights.into_iter().map(Decimal::from).collect();

        let parts = amount.allocate(&weights).unwrap();
        prop_assert_eq!(parts.len(), weights.len());

        let sum: Decimal = parts.iter().map(crate::Amount::value).sum();
        let expected = trader.round(value, amount.currency().decimal_places());
        prop_assert_eq!(sum, expected);
    }
}
