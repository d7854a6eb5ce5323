//! Comparable-company estimation results and their freshness lifecycle.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MultipleRange, Timestamp};

/// One peer business returned by the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableCompany {
    pub name: String,
    /// EV/EBITDA multiple observed or inferred for this peer.
    pub ebitda_multiple: f64,
    /// EV/Revenue multiple observed or inferred for this peer.
    pub revenue_multiple: f64,
    /// Relevance weight assigned by the estimator (higher = closer peer).
    pub weight: f64,
}

/// Cached, time-boxed output of one comparable estimation.
///
/// Created by the external estimation call, cached keyed by company
/// identity, and considered stale once `analyzed_at` falls outside the
/// configured TTL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableResult {
    pub comparables: Vec<ComparableCompany>,
    /// Weighted EV/EBITDA multiple across the comp set.
    pub ebitda_multiple: f64,
    /// Weighted EV/Revenue multiple across the comp set.
    pub revenue_multiple: f64,
    /// The low/high EBITDA multiple band applied by the calculator.
    pub multiple_range: MultipleRange,
    /// Estimator caveats (thin comp set, broad industry match, ...)
    /// surfaced through to the UI.
    pub warnings: Vec<String>,
    /// When the estimation was performed.
    pub analyzed_at: Timestamp,
}

impl ComparableResult {
    /// Whether this result is still inside its TTL window at `now`.
    pub fn is_fresh(&self, ttl: Duration, now: Timestamp) -> bool {
        now.duration_since(&self.analyzed_at) < ttl
    }
}
