//! Domain layer: the valuation and readiness-scoring pipeline.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, scores, timestamps, errors)
//! - `scoring` - Category Score Aggregator (BRI weighting, core factors)
//! - `financials` - EBITDA Normalizer (statements + add-back ledger)
//! - `comparables` - Comparable Company Engine (cached external lookup)
//! - `adjustments` - Multiple Adjustment Engine (risk bridge)
//! - `valuation` - Valuation Calculator and snapshot records

pub mod adjustments;
pub mod comparables;
pub mod financials;
pub mod foundation;
pub mod scoring;
pub mod valuation;
