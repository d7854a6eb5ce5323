//! RecalculationService - Orchestrates the full valuation pipeline.
//!
//! One recalculation runs synchronously within the calling task, in
//! strict dependency order: scores → EBITDA → comparables → adjustments
//! → valuation → snapshot. The snapshot insert is the only write; every
//! failure before it leaves no partial state behind.

use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use crate::config::ValuationConfig;
use crate::domain::adjustments::{AdjustmentEngine, AdjustmentProfile};
use crate::domain::comparables::ComparableEngine;
use crate::domain::financials::{
    adjusted_ebitda, compare_periods, ebitda_margin, PeriodComparison,
};
use crate::domain::financials::LedgerEntry;
use crate::domain::foundation::{ActorId, CompanyId, EngineError, Score, SnapshotId};
use crate::domain::scoring::{bri_score, core_score, BriWeights, RevenueModel, RevenueSizeBucket};
use crate::domain::valuation::{
    build_snapshot, ValuationCalculator, ValuationInputs, ValuationSnapshot, ValuationTrendPoint,
};
use crate::ports::{
    CompanyDataReader, ComparableCache, ComparableEstimator, ReaderError, RecalculationInputs,
    SnapshotStore, SnapshotStoreError,
};

/// The engine's exposed surface: recalculation plus snapshot reads.
pub struct RecalculationService {
    reader: Arc<dyn CompanyDataReader>,
    comparables: ComparableEngine,
    adjustments: AdjustmentEngine,
    calculator: ValuationCalculator,
    store: Arc<dyn SnapshotStore>,
}

impl RecalculationService {
    /// Wires the service from its ports and valuation constants.
    pub fn new(
        reader: Arc<dyn CompanyDataReader>,
        estimator: Arc<dyn ComparableEstimator>,
        cache: Arc<dyn ComparableCache>,
        store: Arc<dyn SnapshotStore>,
        config: &ValuationConfig,
    ) -> Self {
        Self {
            reader,
            comparables: ComparableEngine::new(
                estimator,
                cache,
                Duration::hours(config.comparable_ttl_hours as i64),
            ),
            adjustments: AdjustmentEngine::new(config.adjustment_clamp),
            calculator: ValuationCalculator::new(config.alpha),
            store,
        }
    }

    /// Runs the full pipeline and records a new snapshot.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ValidationFailed`] - weight configuration invalid;
    ///   rejected before any computation or external call.
    /// - [`EngineError::NotComputable`] - core revenue/cost data absent.
    /// - [`EngineError::ServiceUnavailable`] - estimator failed or timed
    ///   out; retryable, and no snapshot is written.
    pub async fn recalculate(
        &self,
        company_id: CompanyId,
        reason: impl Into<String>,
        actor_id: ActorId,
    ) -> Result<SnapshotId, EngineError> {
        self.run_pipeline(company_id, reason.into(), actor_id, false)
            .await
    }

    /// Like [`recalculate`](Self::recalculate), but bypasses the
    /// comparable cache unconditionally and refreshes it.
    pub async fn force_refresh_comparables(
        &self,
        company_id: CompanyId,
        reason: impl Into<String>,
        actor_id: ActorId,
    ) -> Result<SnapshotId, EngineError> {
        self.run_pipeline(company_id, reason.into(), actor_id, true)
            .await
    }

    async fn run_pipeline(
        &self,
        company_id: CompanyId,
        reason: String,
        actor_id: ActorId,
        force_refresh: bool,
    ) -> Result<SnapshotId, EngineError> {
        let inputs = self.load_inputs(&company_id).await?;

        // Configuration validation happens before anything else runs, so
        // a broken weight set is never partially applied.
        let weights = BriWeights::resolve(&inputs.weights)?;
        let bri = bri_score(&inputs.category_scores, &weights);
        let core = core_score(inputs.core_factors.as_ref());

        let ebitda = adjusted_ebitda(&inputs.statement, &inputs.ledger);
        let adjusted = ebitda.adjusted.ok_or_else(|| {
            EngineError::not_computable(
                "adjusted EBITDA unavailable: revenue or cost data is missing",
            )
        })?;

        let comps = self
            .comparables
            .find(company_id, &inputs.profile, force_refresh)
            .await?;

        let adjustment = self.adjustments.compute(&adjustment_profile(&inputs, adjusted));

        let outcome = self.calculator.calculate(ValuationInputs {
            adjusted_ebitda: adjusted,
            multiple_range: comps.multiple_range,
            adjustment_multiplier: adjustment.multiplier,
            core_score: core,
            bri_score: bri,
        });

        let snapshot = build_snapshot(
            company_id,
            adjusted,
            comps.multiple_range.low(),
            comps.multiple_range.high(),
            &outcome,
            bri,
            inputs.category_scores,
            core,
            comps.warnings,
            reason,
            actor_id,
        );

        let snapshot_id = self
            .store
            .insert(&snapshot)
            .await
            .map_err(map_store_error)?;

        debug!(
            company_id = %company_id,
            snapshot_id = %snapshot_id,
            current_value = outcome.current_value,
            value_gap = outcome.value_gap,
            "recorded valuation snapshot"
        );

        Ok(snapshot_id)
    }

    /// The authoritative "current" valuation: the most recent snapshot.
    pub async fn latest_valuation(
        &self,
        company_id: CompanyId,
    ) -> Result<Option<ValuationSnapshot>, EngineError> {
        self.store
            .latest(&company_id)
            .await
            .map_err(map_store_error)
    }

    /// Full snapshot history, oldest first.
    pub async fn valuation_history(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<ValuationSnapshot>, EngineError> {
        self.store
            .history(&company_id)
            .await
            .map_err(map_store_error)
    }

    /// Chronological chart-ready projection of the history.
    pub async fn valuation_trend(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<ValuationTrendPoint>, EngineError> {
        Ok(self
            .valuation_history(company_id)
            .await?
            .iter()
            .map(ValuationTrendPoint::from_snapshot)
            .collect())
    }

    /// Period-over-period adjusted EBITDA, for the financial trend view.
    ///
    /// The prior period runs through the identical formula; it carries no
    /// manual ledger since add-backs are entered per current period.
    pub async fn ebitda_trend(
        &self,
        company_id: CompanyId,
    ) -> Result<PeriodComparison, EngineError> {
        let inputs = self.load_inputs(&company_id).await?;
        let no_ledger: &[LedgerEntry] = &[];
        Ok(compare_periods(
            &inputs.statement,
            &inputs.ledger,
            inputs.prior_statement.as_ref().map(|s| (s, no_ledger)),
        ))
    }

    async fn load_inputs(
        &self,
        company_id: &CompanyId,
    ) -> Result<RecalculationInputs, EngineError> {
        self.reader.load_inputs(company_id).await.map_err(|e| match e {
            ReaderError::CompanyNotFound(id) => EngineError::CompanyNotFound(id),
            ReaderError::Backend(detail) => EngineError::Internal(detail),
        })
    }
}

/// Derives the adjustment engine's view of the company from the loaded
/// inputs and the freshly computed adjusted EBITDA.
fn adjustment_profile(inputs: &RecalculationInputs, adjusted: f64) -> AdjustmentProfile {
    let revenue = inputs.profile.revenue.or(inputs.statement.revenue);
    let transferability: Score = inputs.category_scores.transferability;
    AdjustmentProfile {
        size_bucket: revenue
            .map(RevenueSizeBucket::from_revenue)
            .unwrap_or(RevenueSizeBucket::Micro),
        growth_rate: inputs.profile.growth_rate,
        ebitda_margin: inputs
            .profile
            .ebitda_margin
            .or_else(|| ebitda_margin(adjusted, revenue)),
        top_one_concentration: inputs.profile.top_one_concentration,
        top_three_concentration: inputs.profile.top_three_concentration,
        transferability,
        recurring_revenue: matches!(inputs.profile.revenue_model, RevenueModel::Recurring),
    }
}

fn map_store_error(error: SnapshotStoreError) -> EngineError {
    EngineError::Internal(error.to_string())
}
