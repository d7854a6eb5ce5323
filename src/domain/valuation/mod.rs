//! Valuation Calculator and snapshot records.

mod calculator;
mod snapshot;

pub use calculator::{ValuationCalculator, ValuationInputs, ValuationOutcome, DEFAULT_ALPHA};
pub use snapshot::{build_snapshot, ValuationSnapshot, ValuationTrendPoint};
