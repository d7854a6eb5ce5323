//! Valuation Calculator: blends adjusted EBITDA, the adjusted multiple
//! band, the core score and the BRI score into the headline figures.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MultipleRange, Score};

/// Default readiness-discount coefficient (alpha).
///
/// A BRI of 0.70 with this coefficient yields a 9% readiness discount.
pub const DEFAULT_ALPHA: f64 = 0.30;

/// Upper clamp on the discount fraction, keeping the final multiple
/// strictly positive.
const MAX_DISCOUNT: f64 = 0.99;

/// Inputs for one valuation, all drawn from the same recalculation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationInputs {
    pub adjusted_ebitda: f64,
    pub multiple_range: MultipleRange,
    /// Multiplier from the adjustment engine (`1 + total adjustment`).
    pub adjustment_multiplier: f64,
    pub core_score: Score,
    pub bri_score: Score,
}

/// Every figure the calculator derives, carried whole into the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationOutcome {
    /// Point estimate inside the comp band positioned by the core score,
    /// scaled by the adjustment multiplier.
    pub base_multiple: f64,
    /// Buyer discount for unresolved readiness risk, in [0, 1).
    pub discount_fraction: f64,
    /// `base_multiple × (1 − discount_fraction)`.
    pub final_multiple: f64,
    /// Whole-currency value at the discounted multiple.
    pub current_value: i64,
    /// Whole-currency ceiling with every readiness gap closed.
    pub potential_value: i64,
    /// `potential_value − current_value`, non-negative by construction.
    pub value_gap: i64,
}

/// Computes the valuation bridge.
pub struct ValuationCalculator {
    alpha: f64,
}

impl ValuationCalculator {
    /// Creates a calculator with the given discount coefficient.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Derives current value, potential value and value gap.
    ///
    /// All three money figures come from the same EBITDA and multiple
    /// inputs so the current → gap → potential bridge stays arithmetically
    /// consistent. Values floor at zero: a negative adjusted EBITDA is not
    /// priced by multiple.
    pub fn calculate(&self, inputs: ValuationInputs) -> ValuationOutcome {
        let base_multiple =
            inputs.multiple_range.at(inputs.core_score) * inputs.adjustment_multiplier;

        let discount_fraction =
            (self.alpha * inputs.bri_score.complement()).clamp(0.0, MAX_DISCOUNT);

        let final_multiple = base_multiple * (1.0 - discount_fraction);

        let current_value = round_currency(inputs.adjusted_ebitda * final_multiple);
        let potential_value = round_currency(inputs.adjusted_ebitda * base_multiple);

        ValuationOutcome {
            base_multiple,
            discount_fraction,
            final_multiple,
            current_value,
            potential_value,
            value_gap: potential_value - current_value,
        }
    }
}

impl Default for ValuationCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

/// Rounds to the nearest whole currency unit, flooring at zero.
fn round_currency(value: f64) -> i64 {
    value.max(0.0).round() as i64
}
