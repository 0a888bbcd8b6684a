//! Rate context binding a currency registry to one base currency.
//!
//! Every [`Amount`] is created through a [`Trader`] and keeps a handle to it,
//! so later conversions re-derive rates from the same registry. The handle is
//! a cheap, read-only shared reference: cloning a `Trader` never copies the
//! registry.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use trader_shared::config::{EngineConfig, MAX_DIVISION_SCALE, MIN_DIVISION_SCALE};

use crate::amount::Amount;
use crate::currency::{Currencies, Currency};
use crate::error::{TraderError, TraderResult};

/// Rate context: a currency registry plus its designated base currency.
#[derive(Debug, Clone)]
pub struct Trader {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    currencies: Currencies,
    base_currency: Arc<Currency>,
    engine: EngineConfig,
}

impl Trader {
    /// Creates a rate context with the default engine configuration.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyNotFound` if `base_code` is not in `currencies`.
    pub fn new(currencies: Currencies, base_code: &str) -> TraderResult<Self> {
        Self::with_config(currencies, base_code, EngineConfig::default())
    }

    /// Creates a rate context with an explicit engine configuration.
    /// The division scale is clamped to `16..=28`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyNotFound` if `base_code` is not in `currencies`.
    pub fn with_config(
        currencies: Currencies,
        base_code: &str,
        mut engine: EngineConfig,
    ) -> TraderResult<Self> {
        let base_currency = Arc::clone(currencies.find(base_code)?);
        engine.division_scale = engine
            .division_scale
            .clamp(MIN_DIVISION_SCALE, MAX_DIVISION_SCALE);

        debug!(
            base = %base_currency,
            currencies = currencies.len(),
            division_scale = engine.division_scale,
            rounding = ?engine.rounding,
            "Rate context created"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                currencies,
                base_currency,
                engine,
            }),
        })
    }

    /// The registry this context governs.
    #[must_use]
    pub fn currencies(&self) -> &Currencies {
        &self.inner.currencies
    }

    /// The base currency entry.
    #[must_use]
    pub fn base_currency(&self) -> &Currency {
        &self.inner.base_currency
    }

    /// The engine configuration in effect.
    #[must_use]
    pub fn engine(&self) -> &EngineConfig {
        &self.inner.engine
    }

    /// Returns true if both handles point at the same context.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Creates an amount of `value` in the currency `code`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyNotFound` if `code` is not in the registry.
    pub fn new_amount(&self, value: Decimal, code: &str) -> TraderResult<Amount> {
        let currency = Arc::clone(self.inner.currencies.find(code)?);
        Ok(Amount::new(self.clone(), value, currency))
    }

    /// Creates an amount from a float, using its shortest decimal form
    /// (`4.2` becomes exactly `4.2`).
    ///
    /// # Errors
    ///
    /// Returns `Parse` for NaN, infinities or out-of-range values, and
    /// `CurrencyNotFound` if `code` is not in the registry.
    pub fn new_amount_from_float(&self, value: f64, code: &str) -> TraderResult<Amount> {
        let decimal = Decimal::try_from(value).map_err(|e| TraderError::parse(value, e))?;
        self.new_amount(decimal, code)
    }

    /// Creates an amount from a decimal string. Scientific notation
    /// (`"1.5e3"`) is accepted.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the string is not a decimal, and
    /// `CurrencyNotFound` if `code` is not in the registry.
    pub fn new_amount_from_str(&self, value: &str, code: &str) -> TraderResult<Amount> {
        let parsed = if value.contains(['e', 'E']) {
            Decimal::from_scientific(value)
        } else {
            Decimal::from_str(value)
        };
        let decimal = parsed.map_err(|e| TraderError::parse(value, e))?;
        self.new_amount(decimal, code)
    }

    /// Creates an amount from an integer count of minor units, e.g. `230`
    /// USD cents becomes `2.30` USD.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyNotFound` if `code` is not in the registry.
    pub fn new_amount_from_minor_units(&self, units: i64, code: &str) -> TraderResult<Amount> {
        let currency = Arc::clone(self.inner.currencies.find(code)?);
        let value = Decimal::new(units, currency.decimal_places());
        Ok(Amount::new(self.clone(), value, currency))
    }

    /// An amount in the base currency.
    pub(crate) fn base_amount(&self, value: Decimal) -> Amount {
        Amount::new(self.clone(), value, Arc::clone(&self.inner.base_currency))
    }

    /// Divides with the configured precision bound.
    pub(crate) fn divide(&self, lhs: Decimal, rhs: Decimal) -> TraderResult<Decimal> {
        if rhs.is_zero() {
            return Err(TraderError::DivisionByZero);
        }
        let quotient = lhs
            .checked_div(rhs)
            .ok_or(TraderError::ArithmeticOverflow { operation: "divide" })?;
        Ok(self.round(quotient, self.inner.engine.division_scale))
    }

    /// Rounds with the configured rounding mode.
    pub(crate) fn round(&self, value: Decimal, places: u32) -> Decimal {
        value.round_dp_with_strategy(places, self.inner.engine.rounding.strategy())
    }
}
