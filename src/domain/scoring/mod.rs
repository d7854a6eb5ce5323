//! Category Score Aggregator: BRI weighting, category scores and core
//! factors.
//!
//! - [`bri_score`] combines the six weighted category scores into the
//!   composite Buyer Readiness Index.
//! - [`core_score`] maps categorical business attributes to the modifier
//!   that positions a company within the comparable multiple band.

mod aggregator;
mod category;
mod core_factors;
mod weights;

pub use aggregator::bri_score;
pub use category::{Category, CategoryScores};
pub use core_factors::{core_score, CoreFactors, RevenueModel, RevenueSizeBucket};
pub use weights::{BriWeights, WeightPrecedence, WeightSet};
