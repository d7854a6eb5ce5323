//! Comparable estimation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// External estimation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorConfig {
    /// Base URL of the estimation service
    pub base_url: String,

    /// API key, if the service requires one
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EstimatorConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate estimator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("ESTIMATOR_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidEstimatorUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(EstimatorConfig::default().validate().is_err());
    }

    #[test]
    fn non_http_url_is_rejected() {
        let config = EstimatorConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidEstimatorUrl));
    }

    #[test]
    fn https_url_validates() {
        let config = EstimatorConfig {
            base_url: "https://estimator.example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
