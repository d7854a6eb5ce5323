//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `EXITPATH` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use exitpath::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod cache;
mod error;
mod estimator;
mod valuation;

pub use cache::CacheConfig;
pub use error::{ConfigError, ValidationError};
pub use estimator::EstimatorConfig;
pub use valuation::ValuationConfig;

use serde::Deserialize;

/// Root engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Valuation constants (ALPHA, clamp band, cache TTL)
    #[serde(default)]
    pub valuation: ValuationConfig,

    /// External estimation service
    pub estimator: EstimatorConfig,

    /// Comparable cache (redis)
    pub cache: CacheConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the `EXITPATH`
    /// prefix, e.g. `EXITPATH__ESTIMATOR__BASE_URL` or
    /// `EXITPATH__VALUATION__ALPHA`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EXITPATH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.valuation.validate()?;
        self.estimator.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
