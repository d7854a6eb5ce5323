//! Category Score Aggregator: weighted composite BRI score.

use crate::domain::foundation::Score;

use super::{BriWeights, CategoryScores};

/// Computes the composite Buyer Readiness Index.
///
/// A convex combination Σ(weightᵢ × scoreᵢ) over the six categories, so
/// the result always lies between the lowest and highest category score.
///
/// Precondition: `weights` already satisfies the sum-to-1.0 invariant —
/// the [`BriWeights`] type enforces it at construction, and this function
/// never renormalizes.
pub fn bri_score(scores: &CategoryScores, weights: &BriWeights) -> Score {
    let weighted_sum: f64 = scores
        .iter()
        .map(|(category, score)| weights.weight(category) * score.value())
        .sum();
    // The clamping constructor absorbs last-bit floating point dust.
    Score::new(weighted_sum)
}
