//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Discount coefficient (alpha) must be between 0 and 1 exclusive")]
    InvalidAlpha,

    #[error("Adjustment clamp band must be between 0 and 1")]
    InvalidAdjustmentClamp,

    #[error("Comparable cache TTL must be at least 1 hour")]
    InvalidTtl,

    #[error("Invalid estimator URL format")]
    InvalidEstimatorUrl,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,
}
