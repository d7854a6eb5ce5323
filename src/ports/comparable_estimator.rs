//! Comparable Estimator Port - Interface to the external estimation
//! service.
//!
//! The estimator is latency- and cost-heavy; the engine never calls it
//! directly but through [`crate::domain::comparables::ComparableEngine`],
//! which adds the TTL cache.

use async_trait::async_trait;

use crate::domain::comparables::{CompanyProfile, ComparableResult};

/// Failure modes of the external estimation call.
///
/// Every variant maps to the engine's retryable "service unavailable"
/// condition: the distinction here is diagnostic, not behavioral.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimatorError {
    #[error("Estimation service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Estimation call timed out after {elapsed_secs}s")]
    Timeout { elapsed_secs: u64 },

    #[error("Estimation response was malformed: {detail}")]
    MalformedResponse { detail: String },
}

impl EstimatorError {
    /// Creates an unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        EstimatorError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a malformed-response error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        EstimatorError::MalformedResponse {
            detail: detail.into(),
        }
    }
}

/// Port for estimating comparable companies and multiple ranges.
///
/// Implementations connect to the external estimation service; tests use
/// the scripted mock adapter.
#[async_trait]
pub trait ComparableEstimator: Send + Sync {
    /// Estimates comparables for the given profile.
    ///
    /// No latency contract beyond "slow enough to require caching".
    async fn estimate(&self, profile: &CompanyProfile) -> Result<ComparableResult, EstimatorError>;
}
