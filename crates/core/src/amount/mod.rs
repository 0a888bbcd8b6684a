//! Amounts of money tagged with a currency and the rate context that issued them.
//!
//! Conversion and arithmetic always go through the base currency of the
//! issuing [`Trader`]; results are expressed in the receiver's currency.

mod allocation;
mod arithmetic;
mod conversion;

#[cfg(test)]
mod props;

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::currency::Currency;
use crate::error::{TraderError, TraderResult};
use crate::trader::Trader;

/// An amount in a given currency.
///
/// Amounts are value objects: every operation returns a new `Amount`, except
/// [`Amount::round`] which rewrites the value in place.
#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    #[serde(skip)]
    trader: Trader,
    value: Decimal,
    #[serde(serialize_with = "serialize_code")]
    currency: Arc<Currency>,
}

fn serialize_code<S: Serializer>(
    currency: &Arc<Currency>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(currency.code())
}

impl Amount {
    pub(crate) const fn new(trader: Trader, value: Decimal, currency: Arc<Currency>) -> Self {
        Self {
            trader,
            value,
            currency,
        }
    }

    /// The rate context that issued this amount.
    #[must_use]
    pub const fn trader(&self) -> &Trader {
        &self.trader
    }

    /// The raw decimal value, in this amount's currency.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The currency of this amount.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Rounds the value in place to `places` fractional digits using the
    /// context's rounding mode. Currency and context are unchanged.
    pub fn round(&mut self, places: u32) {
        self.value = self.trader.round(self.value, places);
    }

    /// Converts the amount to an integer count of minor units, e.g. cents for
    /// USD (`2.3` -> `230`) or fils for BHD (`2.3` -> `2300`).
    ///
    /// # Errors
    ///
    /// Returns `MinorUnitOverflow` if the count does not fit in an `i64`.
    pub fn to_minor_units(&self) -> TraderResult<i64> {
        let places = self.currency.decimal_places();
        let overflow = || TraderError::MinorUnitOverflow {
            value: self.value,
            places,
        };

        let factor = Decimal::from(10_u64.pow(places));
        let scaled = self.value.checked_mul(factor).ok_or_else(overflow)?;
        self.trader.round(scaled, 0).to_i64().ok_or_else(overflow)
    }

    /// Formats the value with exactly `decimals` fractional digits,
    /// zero-padded. The currency is not included.
    #[must_use]
    pub fn to_display_string(&self, decimals: u32) -> String {
        let rounded = self.trader.round(self.value, decimals);
        // Precision pads past the 28-digit internal scale
        let prec = usize::try_from(decimals).unwrap_or(usize::MAX);
        format!("{rounded:.prec$}")
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
