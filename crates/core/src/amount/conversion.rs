//! Conversion between currencies through the base currency.

use rust_decimal::Decimal;
use tracing::trace;

use super::Amount;
use crate::error::{TraderError, TraderResult};

impl Amount {
    /// Returns true if this amount is already in its context's base currency.
    fn is_base_currency(&self) -> bool {
        self.currency.is(self.trader.base_currency().code())
    }

    /// The value expressed in the base currency of the context.
    ///
    /// If the amount is already in the base currency the value is returned
    /// unchanged; otherwise it is `value / rate`, bounded to the context's
    /// division scale.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the currency's rate is zero.
    pub fn base_currency_value(&self) -> TraderResult<Decimal> {
        if self.is_base_currency() {
            return Ok(self.value);
        }
        self.trader.divide(self.value, self.currency.rate())
    }

    /// This amount converted to the base currency of the context.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the currency's rate is zero.
    pub fn base_currency_amount(&self) -> TraderResult<Self> {
        if self.is_base_currency() {
            return Ok(self.clone());
        }
        let value = self.base_currency_value()?;
        Ok(self.trader.base_amount(value))
    }

    /// Converts this amount to the currency `code`.
    ///
    /// Returns a copy if `code` is already this amount's currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyNotFound` if `code` is not in the registry,
    /// `DivisionByZero` for a zero source rate and `ArithmeticOverflow` if
    /// the converted value does not fit.
    pub fn to_currency(&self, code: &str) -> TraderResult<Self> {
        if self.currency.is(code) {
            return Ok(self.clone());
        }

        let base = self.base_currency_amount()?;
        if base.currency.is(code) {
            return Ok(base);
        }

        let target = self.trader.currencies().find(code)?;
        let value = base
            .value
            .checked_mul(target.rate())
            .ok_or(TraderError::ArithmeticOverflow {
                operation: "convert",
            })?;

        trace!(
            from = %self.currency,
            to = %target,
            value = %self.value,
            converted = %value,
            "Converted amount"
        );

        self.trader.new_amount(value, code)
    }
}
