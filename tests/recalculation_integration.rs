//! Integration tests for the full recalculation pipeline.
//!
//! Wires the RecalculationService with the mock estimator and in-memory
//! adapters and verifies the end-to-end contracts:
//! 1. A recalculation runs scores → EBITDA → comparables → adjustments →
//!    valuation → snapshot and records every intermediate figure
//! 2. The comparable cache makes repeated recalculations cost one
//!    external call
//! 3. Failures (estimator down, broken weights, missing financials)
//!    never leave a partial snapshot behind

use std::sync::Arc;

use exitpath::adapters::{InMemoryCompanyData, InMemoryComparableCache, InMemorySnapshotStore, MockEstimator};
use exitpath::application::RecalculationService;
use exitpath::config::ValuationConfig;
use exitpath::domain::comparables::{CompanyProfile, ComparableResult};
use exitpath::domain::financials::{IncomeStatement, LedgerEntry};
use exitpath::domain::foundation::{ActorId, CompanyId, EngineError, MultipleRange, Score, Timestamp};
use exitpath::domain::scoring::{CategoryScores, RevenueModel, WeightPrecedence, WeightSet};
use exitpath::ports::{EstimatorError, RecalculationInputs};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Inputs matching the engine's worked example: adjusted EBITDA of
/// exactly 1,000,000, uniform category scores of 0.70, neutral core
/// factors, and a profile whose only adjustment is recurring revenue
/// (+5%).
fn worked_example_inputs() -> RecalculationInputs {
    let score = Score::new(0.70);
    RecalculationInputs {
        profile: CompanyProfile {
            industry_path: vec!["Services".into(), "IT Services".into()],
            revenue: Some(2_500_000.0),
            ebitda_margin: Some(0.15),
            growth_rate: Some(0.05),
            revenue_model: RevenueModel::Recurring,
            top_one_concentration: Some(0.10),
            top_three_concentration: Some(0.25),
        },
        statement: IncomeStatement {
            revenue: Some(2_500_000.0),
            cost_of_goods_sold: Some(800_000.0),
            operating_expenses: Some(800_000.0),
            ..Default::default()
        },
        prior_statement: None,
        ledger: vec![LedgerEntry::add_back("Owner salary above market", 100_000.0)],
        category_scores: CategoryScores {
            financial: score,
            transferability: score,
            operational: score,
            market: score,
            legal_tax: score,
            personal: score,
        },
        weights: WeightPrecedence::default(),
        core_factors: None,
    }
}

fn comparable_band() -> ComparableResult {
    ComparableResult {
        comparables: Vec::new(),
        ebitda_multiple: 5.0,
        revenue_multiple: 1.1,
        multiple_range: MultipleRange::try_new(4.0, 6.0).unwrap(),
        warnings: vec!["broad industry match".into()],
        analyzed_at: Timestamp::now(),
    }
}

struct Harness {
    service: RecalculationService,
    estimator: Arc<MockEstimator>,
    store: Arc<InMemorySnapshotStore>,
    reader: Arc<InMemoryCompanyData>,
    company_id: CompanyId,
}

async fn harness(estimator: MockEstimator, inputs: RecalculationInputs) -> Harness {
    let estimator = Arc::new(estimator);
    let store = Arc::new(InMemorySnapshotStore::new());
    let reader = Arc::new(InMemoryCompanyData::new());
    let company_id = CompanyId::new();
    reader.upsert(company_id, inputs).await;

    let service = RecalculationService::new(
        reader.clone(),
        estimator.clone(),
        Arc::new(InMemoryComparableCache::new()),
        store.clone(),
        &ValuationConfig::default(),
    );

    Harness {
        service,
        estimator,
        store,
        reader,
        company_id,
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[tokio::test]
async fn recalculate_records_the_worked_example() {
    let h = harness(
        MockEstimator::new().with_result(comparable_band()),
        worked_example_inputs(),
    )
    .await;

    let snapshot_id = h
        .service
        .recalculate(h.company_id, "annual reassessment", ActorId::new())
        .await
        .unwrap();

    let snapshot = h.service.latest_valuation(h.company_id).await.unwrap().unwrap();
    assert_eq!(snapshot.id, snapshot_id);
    assert_eq!(snapshot.adjusted_ebitda, 1_000_000.0);
    assert_eq!(snapshot.multiple_low, 4.0);
    assert_eq!(snapshot.multiple_high, 6.0);
    assert!((snapshot.base_multiple - 6.3).abs() < 1e-9);
    assert!((snapshot.discount_fraction - 0.09).abs() < 1e-9);
    assert!((snapshot.final_multiple - 5.733).abs() < 1e-9);
    assert_eq!(snapshot.current_value, 5_733_000);
    assert_eq!(snapshot.potential_value, 6_300_000);
    assert_eq!(snapshot.value_gap, 567_000);
    assert!((snapshot.bri_score.value() - 0.70).abs() < 1e-9);
    assert_eq!(snapshot.core_score, Score::ONE);
    assert_eq!(snapshot.comparable_warnings, vec!["broad industry match"]);
    assert_eq!(snapshot.reason, "annual reassessment");
}

#[tokio::test]
async fn full_readiness_has_no_value_gap() {
    let mut inputs = worked_example_inputs();
    inputs.category_scores = CategoryScores {
        financial: Score::ONE,
        transferability: Score::ONE,
        operational: Score::ONE,
        market: Score::ONE,
        legal_tax: Score::ONE,
        personal: Score::ONE,
    };
    let h = harness(MockEstimator::new().with_result(comparable_band()), inputs).await;

    h.service
        .recalculate(h.company_id, "fully ready", ActorId::new())
        .await
        .unwrap();

    let snapshot = h.service.latest_valuation(h.company_id).await.unwrap().unwrap();
    assert_eq!(snapshot.discount_fraction, 0.0);
    assert_eq!(snapshot.current_value, snapshot.potential_value);
    assert_eq!(snapshot.value_gap, 0);
}

// =============================================================================
// Caching
// =============================================================================

#[tokio::test]
async fn repeated_recalculations_cost_one_external_call() {
    let h = harness(
        MockEstimator::new().with_result(comparable_band()),
        worked_example_inputs(),
    )
    .await;
    let actor = ActorId::new();

    h.service.recalculate(h.company_id, "first", actor).await.unwrap();
    h.service.recalculate(h.company_id, "second", actor).await.unwrap();

    assert_eq!(h.estimator.call_count(), 1);

    let history = h.service.valuation_history(h.company_id).await.unwrap();
    assert_eq!(history.len(), 2);
    // Same cached comparable content feeds both snapshots.
    assert_eq!(history[0].multiple_low, history[1].multiple_low);
    assert_eq!(history[0].multiple_high, history[1].multiple_high);
}

#[tokio::test]
async fn force_refresh_calls_the_estimator_again() {
    let h = harness(
        MockEstimator::new().with_result(comparable_band()),
        worked_example_inputs(),
    )
    .await;
    let actor = ActorId::new();

    h.service.recalculate(h.company_id, "initial", actor).await.unwrap();
    h.service
        .force_refresh_comparables(h.company_id, "manual refresh", actor)
        .await
        .unwrap();

    assert_eq!(h.estimator.call_count(), 2);
}

// =============================================================================
// Failure semantics
// =============================================================================

#[tokio::test]
async fn estimator_failure_creates_no_snapshot() {
    let h = harness(
        MockEstimator::new().with_error(EstimatorError::unavailable("upstream 503")),
        worked_example_inputs(),
    )
    .await;

    let error = h
        .service
        .recalculate(h.company_id, "doomed", ActorId::new())
        .await
        .unwrap_err();

    assert!(matches!(error, EngineError::ServiceUnavailable { .. }));
    assert!(error.is_retryable());
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn broken_weights_are_rejected_before_any_external_call() {
    let mut inputs = worked_example_inputs();
    inputs.weights.company_override = Some(WeightSet {
        financial: 0.50,
        transferability: 0.20,
        operational: 0.15,
        market: 0.15,
        legal_tax: 0.10,
        personal: 0.15,
    });
    let h = harness(MockEstimator::new().with_result(comparable_band()), inputs).await;

    let error = h
        .service
        .recalculate(h.company_id, "bad config", ActorId::new())
        .await
        .unwrap_err();

    assert!(matches!(error, EngineError::ValidationFailed(_)));
    assert_eq!(h.estimator.call_count(), 0);
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn missing_financials_are_not_computable() {
    let mut inputs = worked_example_inputs();
    inputs.statement = IncomeStatement::default();
    let h = harness(MockEstimator::new().with_result(comparable_band()), inputs).await;

    let error = h
        .service
        .recalculate(h.company_id, "no data", ActorId::new())
        .await
        .unwrap_err();

    assert!(matches!(error, EngineError::NotComputable { .. }));
    assert_eq!(h.estimator.call_count(), 0);
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn unknown_company_is_reported_as_such() {
    let h = harness(
        MockEstimator::new().with_result(comparable_band()),
        worked_example_inputs(),
    )
    .await;

    let error = h
        .service
        .recalculate(CompanyId::new(), "wrong id", ActorId::new())
        .await
        .unwrap_err();

    assert!(matches!(error, EngineError::CompanyNotFound(_)));
}

// =============================================================================
// History and projections
// =============================================================================

#[tokio::test]
async fn history_is_append_only_and_trend_projects_it() {
    let h = harness(
        MockEstimator::new().with_result(comparable_band()),
        worked_example_inputs(),
    )
    .await;
    let actor = ActorId::new();

    let first_id = h.service.recalculate(h.company_id, "first", actor).await.unwrap();
    let first = h.service.latest_valuation(h.company_id).await.unwrap().unwrap();

    // A changed assessment triggers a second recalculation.
    let mut updated = worked_example_inputs();
    updated.category_scores.financial = Score::new(0.9);
    h.reader.upsert(h.company_id, updated).await;
    let second_id = h.service.recalculate(h.company_id, "answer update", actor).await.unwrap();

    assert_ne!(first_id, second_id);

    // The first snapshot is bit-for-bit untouched by the second run.
    let history = h.service.valuation_history(h.company_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], first);
    assert_eq!(history[1].id, second_id);
    assert!(history[1].current_value > history[0].current_value);

    let trend = h.service.valuation_trend(h.company_id).await.unwrap();
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].current_value, history[0].current_value);
    assert_eq!(trend[1].date, history[1].created_at);
}

#[tokio::test]
async fn ebitda_trend_compares_periods_with_one_formula() {
    let mut inputs = worked_example_inputs();
    inputs.prior_statement = Some(IncomeStatement {
        revenue: Some(2_000_000.0),
        cost_of_goods_sold: Some(700_000.0),
        operating_expenses: Some(700_000.0),
        ..Default::default()
    });
    let h = harness(MockEstimator::new().with_result(comparable_band()), inputs).await;

    let trend = h.service.ebitda_trend(h.company_id).await.unwrap();
    assert_eq!(trend.current.adjusted, Some(1_000_000.0));
    assert_eq!(trend.prior.unwrap().adjusted, Some(600_000.0));
    assert_eq!(trend.delta, Some(400_000.0));
}
