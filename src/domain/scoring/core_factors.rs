//! Core-factor scoring: categorical business attributes independent of
//! assessment answers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::Score;

/// Revenue size buckets used for core-factor scoring and multiple
/// adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueSizeBucket {
    /// Under $1M annual revenue.
    Micro,
    /// $1M–$5M annual revenue.
    Small,
    /// $5M–$20M annual revenue.
    Medium,
    /// $20M+ annual revenue.
    Large,
}

impl RevenueSizeBucket {
    /// Buckets an annual revenue figure.
    pub fn from_revenue(revenue: f64) -> Self {
        if revenue < 1_000_000.0 {
            RevenueSizeBucket::Micro
        } else if revenue < 5_000_000.0 {
            RevenueSizeBucket::Small
        } else if revenue < 20_000_000.0 {
            RevenueSizeBucket::Medium
        } else {
            RevenueSizeBucket::Large
        }
    }
}

/// How the business earns its revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueModel {
    Recurring,
    Transactional,
}

/// Categorical business attributes feeding the core score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreFactors {
    pub size_bucket: RevenueSizeBucket,
    pub revenue_model: RevenueModel,
}

/// Lookup table from (size bucket, revenue model) to core score.
///
/// Larger businesses and recurring revenue score closer to 1.0; the
/// table caps at 1.0 so core factors can only position a company within
/// the comparable band, never above it.
static CORE_SCORE_TABLE: Lazy<HashMap<(RevenueSizeBucket, RevenueModel), f64>> = Lazy::new(|| {
    use RevenueModel::*;
    use RevenueSizeBucket::*;
    HashMap::from([
        ((Micro, Transactional), 0.85),
        ((Micro, Recurring), 0.90),
        ((Small, Transactional), 0.90),
        ((Small, Recurring), 0.95),
        ((Medium, Transactional), 0.95),
        ((Medium, Recurring), 1.00),
        ((Large, Transactional), 1.00),
        ((Large, Recurring), 1.00),
    ])
});

/// Computes the core score for a company.
///
/// Companies that have not yet supplied operational detail get the
/// neutral 1.0 — no discount contribution before onboarding completes.
pub fn core_score(factors: Option<&CoreFactors>) -> Score {
    match factors {
        Some(f) => {
            let value = CORE_SCORE_TABLE
                .get(&(f.size_bucket, f.revenue_model))
                .copied()
                .unwrap_or(1.0);
            Score::new(value)
        }
        None => Score::ONE,
    }
}
