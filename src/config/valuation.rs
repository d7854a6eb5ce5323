//! Valuation constants configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tunable constants of the valuation pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationConfig {
    /// Readiness-discount coefficient (alpha)
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Absolute bound on the total multiple adjustment
    #[serde(default = "default_adjustment_clamp")]
    pub adjustment_clamp: f64,

    /// Comparable cache time-to-live in hours
    #[serde(default = "default_ttl_hours")]
    pub comparable_ttl_hours: u64,
}

impl ValuationConfig {
    /// Validate valuation constants
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(ValidationError::InvalidAlpha);
        }
        if !self.adjustment_clamp.is_finite()
            || self.adjustment_clamp <= 0.0
            || self.adjustment_clamp > 1.0
        {
            return Err(ValidationError::InvalidAdjustmentClamp);
        }
        if self.comparable_ttl_hours == 0 {
            return Err(ValidationError::InvalidTtl);
        }
        Ok(())
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            adjustment_clamp: default_adjustment_clamp(),
            comparable_ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_alpha() -> f64 {
    0.30
}

fn default_adjustment_clamp() -> f64 {
    0.30
}

fn default_ttl_hours() -> u64 {
    24
}
