//! Arithmetic and comparison between amounts.
//!
//! Both operands are normalised to base-currency value, combined, and the
//! result is converted back to the receiver's currency. Operands whose rate
//! contexts have different base currencies are never combined.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tracing::warn;

use super::Amount;
use crate::error::{TraderError, TraderResult};

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl Amount {
    /// Sum of `self` and `other`, in the currency of `self`.
    ///
    /// # Errors
    ///
    /// Returns `BaseCurrencyMismatch` if the rate contexts have different
    /// base currencies, or an arithmetic error.
    pub fn add(&self, other: &Self) -> TraderResult<Self> {
        self.combine(other, Operation::Add)
    }

    /// `self` minus `other`, in the currency of `self`.
    ///
    /// # Errors
    ///
    /// Returns `BaseCurrencyMismatch` if the rate contexts have different
    /// base currencies, or an arithmetic error.
    pub fn subtract(&self, other: &Self) -> TraderResult<Self> {
        self.combine(other, Operation::Subtract)
    }

    /// Product of the base-currency values of `self` and `other`, in the
    /// currency of `self`.
    ///
    /// # Errors
    ///
    /// Returns `BaseCurrencyMismatch` if the rate contexts have different
    /// base currencies, or an arithmetic error.
    pub fn multiply(&self, other: &Self) -> TraderResult<Self> {
        self.combine(other, Operation::Multiply)
    }

    /// Quotient of the base-currency values of `self` and `other`, in the
    /// currency of `self`. The quotient keeps the context's division scale
    /// (16 fractional digits by default), so it is not exact for
    /// non-terminating decimals.
    ///
    /// # Errors
    ///
    /// Returns `BaseCurrencyMismatch` if the rate contexts have different
    /// base currencies, `DivisionByZero` if `other` is zero, or an
    /// arithmetic error.
    pub fn divide(&self, other: &Self) -> TraderResult<Self> {
        self.combine(other, Operation::Divide)
    }

    /// Compares the base-currency values of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns `BaseCurrencyMismatch` if the rate contexts have different
    /// base currencies.
    pub fn compare(&self, other: &Self) -> TraderResult<Ordering> {
        self.ensure_same_base(other)?;
        Ok(self.base_currency_value()?.cmp(&other.base_currency_value()?))
    }

    fn ensure_same_base(&self, other: &Self) -> TraderResult<()> {
        let left = self.trader.base_currency().code();
        let right = other.trader.base_currency().code();
        if left != right {
            warn!(left, right, "Refusing to combine amounts with different base currencies");
            return Err(TraderError::BaseCurrencyMismatch {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        Ok(())
    }

    fn combine(&self, other: &Self, operation: Operation) -> TraderResult<Self> {
        self.ensure_same_base(other)?;

        let lhs = self.base_currency_value()?;
        let rhs = other.base_currency_value()?;
        let overflow = TraderError::ArithmeticOverflow {
            operation: operation.name(),
        };

        let value: Decimal = match operation {
            Operation::Add => lhs.checked_add(rhs).ok_or(overflow)?,
            Operation::Subtract => lhs.checked_sub(rhs).ok_or(overflow)?,
            Operation::Multiply => lhs.checked_mul(rhs).ok_or(overflow)?,
            Operation::Divide => self.trader.divide(lhs, rhs)?,
        };

        self.trader
            .base_amount(value)
            .to_currency(self.currency.code())
    }
}
