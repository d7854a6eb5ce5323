//! Error types for the valuation engine.
//!
//! The engine distinguishes failure classes with explicit variants rather
//! than string matching so callers can decide between "retry" (external
//! service), "fix your input" (validation) and "supply more data"
//! (not computable).

use thiserror::Error;

use super::CompanyId;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Multiple range is invalid: low={low}, high={high}")]
    InvalidRange { low: f64, high: f64 },

    #[error("BRI weights must sum to 100%, got {sum_percent}%")]
    WeightSumMismatch { sum_percent: i64 },

    #[error("BRI weight '{field}' must be between 0.0 and 1.0, got {actual}")]
    WeightOutOfRange { field: &'static str, actual: f64 },
}

impl ValidationError {
    /// Creates an out-of-range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite-number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
        }
    }

    /// Creates an invalid multiple range error.
    pub fn invalid_range(low: f64, high: f64) -> Self {
        ValidationError::InvalidRange { low, high }
    }
}

/// Engine-level error taxonomy surfaced by `recalculate` and its variants.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input configuration was rejected before any computation ran.
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// The external comparable estimation service failed or timed out.
    ///
    /// Retryable: the caller may retry or proceed degraded.
    #[error("Comparable estimation service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// Core financial data is absent, so a figure would be misleading
    /// rather than merely imprecise. No snapshot is written.
    #[error("Not computable: {reason}")]
    NotComputable { reason: String },

    /// The company has no record in the input reader.
    #[error("Company not found: {0}")]
    CompanyNotFound(CompanyId),

    /// A backing store failed in a way the engine cannot work around.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Creates a service-unavailable error.
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        EngineError::ServiceUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates a not-computable error.
    pub fn not_computable(reason: impl Into<String>) -> Self {
        EngineError::NotComputable {
            reason: reason.into(),
        }
    }

    /// Whether the caller should offer a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::ServiceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_service_unavailable_is_retryable() {
        assert!(EngineError::service_unavailable("down").is_retryable());
        assert!(!EngineError::not_computable("no revenue").is_retryable());
        assert!(!EngineError::Internal("boom".into()).is_retryable());
    }
}
