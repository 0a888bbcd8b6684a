//! Error types for currency lookup, parsing and amount arithmetic.
//!
//! Every fallible operation of the engine returns a [`TraderError`]; none of
//! these conditions panic. Lookups and arithmetic are pure, so retrying with
//! the same inputs never yields a different outcome.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `TraderError`.
pub type TraderResult<T> = Result<T, TraderError>;

/// Errors that can occur while creating or combining amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraderError {
    // ========== Lookup Errors ==========
    /// The currency code does not exist in the registry.
    #[error("The currency code {0} could not be found")]
    CurrencyNotFound(String),

    // ========== Input Errors ==========
    /// A string or float could not be turned into a decimal.
    #[error("Could not parse {input:?} as a decimal: {reason}")]
    Parse {
        /// The rejected input, as text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    // ========== Arithmetic Errors ==========
    /// The two operands belong to rate contexts with different base currencies.
    #[error("The base currency of a and b differ: {left} & {right}")]
    BaseCurrencyMismatch {
        /// Base currency code of the receiver.
        left: String,
        /// Base currency code of the operand.
        right: String,
    },

    /// Division by a zero amount, a zero rate or a zero weight sum.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit in the decimal type.
    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflow {
        /// Operation that overflowed.
        operation: &'static str,
    },

    // ========== Conversion Errors ==========
    /// The minor-unit count does not fit in an `i64`.
    #[error("{value} with {places} decimal places cannot be represented as i64 minor units")]
    MinorUnitOverflow {
        /// The amount value being converted.
        value: Decimal,
        /// Number of minor-unit decimal places of the currency.
        places: u32,
    },
}

impl TraderError {
    /// Returns a stable identifier for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyNotFound(_) => "CURRENCY_NOT_FOUND",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::BaseCurrencyMismatch { .. } => "BASE_CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::ArithmeticOverflow { .. } => "ARITHMETIC_OVERFLOW",
            Self::MinorUnitOverflow { .. } => "MINOR_UNIT_OVERFLOW",
        }
    }

    pub(crate) fn parse(input: impl ToString, reason: impl ToString) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
