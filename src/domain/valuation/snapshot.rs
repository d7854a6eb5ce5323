//! Valuation snapshots: the append-only, versioned output of each
//! recalculation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActorId, CompanyId, Score, SnapshotId, Timestamp};
use crate::domain::scoring::CategoryScores;

use super::ValuationOutcome;

/// One immutable recalculation result.
///
/// Carries every intermediate figure needed for audit and later UI
/// display. Snapshots are created once and never updated or deleted; the
/// most recently created snapshot per company is the authoritative
/// "current" valuation, and history is retained for trends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSnapshot {
    pub id: SnapshotId,
    pub company_id: CompanyId,

    // Normalization inputs.
    pub adjusted_ebitda: f64,

    // Multiple derivation.
    pub multiple_low: f64,
    pub multiple_high: f64,
    pub base_multiple: f64,
    pub final_multiple: f64,
    pub discount_fraction: f64,

    // Readiness scoring.
    pub bri_score: Score,
    pub category_scores: CategoryScores,
    pub core_score: Score,

    // Headline figures, whole currency units.
    pub current_value: i64,
    pub potential_value: i64,
    pub value_gap: i64,

    /// Estimator caveats carried through for display.
    pub comparable_warnings: Vec<String>,

    /// Free-text trigger description ("annual reassessment", ...).
    pub reason: String,
    pub recorded_by: ActorId,
    pub created_at: Timestamp,
}

/// Chronological, chart-ready projection of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationTrendPoint {
    pub date: Timestamp,
    pub current_value: i64,
    pub potential_value: i64,
    pub value_gap: i64,
    pub bri_score: Score,
    pub category_scores: CategoryScores,
    pub base_multiple: f64,
    pub final_multiple: f64,
}

impl ValuationTrendPoint {
    /// Projects a snapshot onto the trend chart shape.
    pub fn from_snapshot(snapshot: &ValuationSnapshot) -> Self {
        Self {
            date: snapshot.created_at,
            current_value: snapshot.current_value,
            potential_value: snapshot.potential_value,
            value_gap: snapshot.value_gap,
            bri_score: snapshot.bri_score,
            category_scores: snapshot.category_scores,
            base_multiple: snapshot.base_multiple,
            final_multiple: snapshot.final_multiple,
        }
    }
}

/// Assembles a snapshot from the outputs of one pipeline run.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    company_id: CompanyId,
    adjusted_ebitda: f64,
    multiple_low: f64,
    multiple_high: f64,
    outcome: &ValuationOutcome,
    bri_score: Score,
    category_scores: CategoryScores,
    core_score: Score,
    comparable_warnings: Vec<String>,
    reason: String,
    recorded_by: ActorId,
) -> ValuationSnapshot {
    ValuationSnapshot {
        id: SnapshotId::new(),
        company_id,
        adjusted_ebitda,
        multiple_low,
        multiple_high,
        base_multiple: outcome.base_multiple,
        final_multiple: outcome.final_multiple,
        discount_fraction: outcome.discount_fraction,
        bri_score,
        category_scores,
        core_score,
        current_value: outcome.current_value,
        potential_value: outcome.potential_value,
        value_gap: outcome.value_gap,
        comparable_warnings,
        reason,
        recorded_by,
        created_at: Timestamp::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> ValuationOutcome {
        ValuationOutcome {
            base_multiple: 6.3,
            discount_fraction: 0.09,
            final_multiple: 5.733,
            current_value: 5_733_000,
            potential_value: 6_300_000,
            value_gap: 567_000,
        }
    }

    fn scores() -> CategoryScores {
        CategoryScores {
            financial: Score::new(0.8),
            transferability: Score::new(0.6),
            operational: Score::new(0.7),
            market: Score::new(0.5),
            legal_tax: Score::new(0.9),
            personal: Score::new(0.4),
        }
    }

    #[test]
    fn trend_point_projects_headline_figures() {
        let snapshot = build_snapshot(
            CompanyId::new(),
            1_000_000.0,
            4.0,
            6.0,
            &outcome(),
            Score::new(0.70),
            scores(),
            Score::ONE,
            vec!["thin comp set".into()],
            "answer update".into(),
            ActorId::new(),
        );
        let point = ValuationTrendPoint::from_snapshot(&snapshot);
        assert_eq!(point.current_value, 5_733_000);
        assert_eq!(point.potential_value, 6_300_000);
        assert_eq!(point.value_gap, 567_000);
        assert_eq!(point.date, snapshot.created_at);
    }

    #[test]
    fn each_build_gets_a_distinct_id() {
        let company = CompanyId::new();
        let actor = ActorId::new();
        let a = build_snapshot(
            company, 1.0, 4.0, 6.0, &outcome(), Score::ONE, scores(), Score::ONE,
            Vec::new(), "a".into(), actor,
        );
        let b = build_snapshot(
            company, 1.0, 4.0, 6.0, &outcome(), Score::ONE, scores(), Score::ONE,
            Vec::new(), "b".into(), actor,
        );
        assert_ne!(a.id, b.id);
    }
}
