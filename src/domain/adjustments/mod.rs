//! Multiple Adjustment Engine: company-specific risk adjustments to the
//! comparable multiple band.

mod engine;

pub use engine::{AdjustmentEngine, AdjustmentLineItem, AdjustmentProfile, AdjustmentResult};
