//! Amount allocation using the Largest Remainder Method.
//!
//! Allocations are made at the currency's minor-unit precision and always
//! sum exactly to the amount rounded to its minor units (no cents lost).
//!
//! The method works by:
//! 1. Calculate exact shares
//! 2. Round each share toward zero
//! 3. Calculate the remainder (total - sum of rounded shares)
//! 4. Distribute remainder units to the shares with largest fractional parts

use std::sync::Arc;

use rust_decimal::prelude::*;

use super::Amount;
use crate::error::{TraderError, TraderResult};

impl Amount {
    /// Splits the amount into `parts` shares that differ by at most one
    /// minor unit; earlier shares receive the extra units.
    ///
    /// Returns an empty vec when `parts` is zero.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the amount is too large to split.
    pub fn split(&self, parts: usize) -> TraderResult<Vec<Self>> {
        let weights = vec![Decimal::ONE; parts];
        self.allocate(&weights)
    }

    /// Allocates the amount proportionally to `weights`.
    ///
    /// Shares are rounded to the currency's minor units and sum exactly to the
    /// amount rounded the same way. Returns an empty vec for empty weights.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the weights do not sum to a positive value,
    /// or `ArithmeticOverflow` if an intermediate value does not fit.
    pub fn allocate(&self, weights: &[Decimal]) -> TraderResult<Vec<Self>> {
        if weights.is_empty() {
            return Ok(vec![]);
        }

        let overflow = || TraderError::ArithmeticOverflow {
            operation: "allocate",
        };

        let total_weight = weights
            .iter()
            .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(*w))
            .ok_or_else(overflow)?;
        if total_weight <= Decimal::ZERO {
            return Err(TraderError::DivisionByZero);
        }

        let places = self.currency.decimal_places();
        let unit = Decimal::new(1, places);

        // Round total to target precision first
        let total = self.trader.round(self.value, places);

        // Calculate exact shares
        let exact = weights
            .iter()
            .map(|w| {
                let share = total.checked_mul(*w).ok_or_else(overflow)?;
                self.trader.divide(share, total_weight)
            })
            .collect::<TraderResult<Vec<Decimal>>>()?;

        // Round each toward zero
        let mut rounded: Vec<Decimal> = exact
            .iter()
            .map(|a| a.round_dp_with_strategy(places, RoundingStrategy::ToZero))
            .collect();

        // Remainder keeps the sign of the total
        let sum_rounded = rounded
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
            .ok_or_else(overflow)?;
        let remainder = total.checked_sub(sum_rounded).ok_or_else(overflow)?;
        let step = if remainder.is_sign_negative() { -unit } else { unit };

        let units_to_distribute = remainder
            .checked_div(unit)
            .ok_or_else(overflow)?
            .abs()
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_usize()
            .unwrap_or(0);

        if units_to_distribute > 0 {
            // Largest fractional remainder first, earlier index on ties
            let mut remainders: Vec<(usize, Decimal)> = exact
                .iter()
                .zip(rounded.iter())
                .enumerate()
                .map(|(i, (e, r))| (i, (*e - *r).abs()))
                .collect();
            remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

            for (idx, _) in remainders.iter().take(units_to_distribute) {
                rounded[*idx] = rounded[*idx].checked_add(step).ok_or_else(overflow)?;
            }
        }

        Ok(rounded
            .into_iter()
            .map(|value| Self::new(self.trader.clone(), value, Arc::clone(&self.currency)))
            .collect())
    }
}
