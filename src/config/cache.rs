//! Comparable cache configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Key prefix for comparable entries
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl CacheConfig {
    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("CACHE_URL"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidRedisUrl);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_key_prefix() -> String {
    "exitpath:comparables".to_string()
}
