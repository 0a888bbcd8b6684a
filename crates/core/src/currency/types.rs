//! The currency entity.

use rust_decimal::Decimal;

use super::minor_units;

/// A currency and its value relative to the base currency.
///
/// `rate` is the value of one unit of this currency expressed in base-currency
/// units; the base currency's own rate is conventionally 1. Rates are expected
/// to be positive. A zero rate is not rejected here but any conversion through
/// it fails with [`TraderError::DivisionByZero`](crate::TraderError::DivisionByZero).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    code: String,
    rate: Decimal,
}

impl Currency {
    /// Creates a new currency. The code is canonicalised to uppercase.
    #[must_use]
    pub fn new(code: impl AsRef<str>, rate: Decimal) -> Self {
        Self {
            code: code.as_ref().to_uppercase(),
            rate,
        }
    }

    /// ISO 4217 code, uppercase.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Value of one unit of this currency in base-currency units.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns true if `code` names this currency, ignoring case.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code == code.to_uppercase()
    }

    /// Number of decimal places of this currency's minor unit.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        minor_units::decimal_places(&self.code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
