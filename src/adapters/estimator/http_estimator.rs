//! HTTP Estimator - Implementation of ComparableEstimator against the
//! hosted estimation service.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EstimatorConfig;
use crate::domain::comparables::{CompanyProfile, ComparableCompany, ComparableResult};
use crate::domain::foundation::{MultipleRange, Timestamp};
use crate::ports::{ComparableEstimator, EstimatorError};

/// Configuration for the HTTP estimator.
#[derive(Debug, Clone)]
pub struct HttpEstimatorConfig {
    /// API key for authentication, if the service requires one.
    api_key: Option<Secret<String>>,
    /// Base URL of the estimation service.
    pub base_url: String,
    /// Request timeout; expiry surfaces as the retryable timeout error.
    pub timeout: Duration,
}

impl HttpEstimatorConfig {
    /// Creates a configuration for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_key: None,
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the adapter configuration from the estimator section of the
    /// engine configuration.
    pub fn from_config(config: &EstimatorConfig) -> Self {
        let mut built = Self::new(config.base_url.clone()).with_timeout(config.timeout());
        if let Some(key) = &config.api_key {
            built = built.with_api_key(key.clone());
        }
        built
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// HTTP implementation of the estimator port.
pub struct HttpEstimator {
    config: HttpEstimatorConfig,
    client: Client,
}

impl HttpEstimator {
    /// Creates an estimator with the given configuration.
    pub fn new(config: HttpEstimatorConfig) -> Result<Self, EstimatorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EstimatorError::unavailable(format!("client build failed: {e}")))?;
        Ok(Self { config, client })
    }

    /// Creates an estimator from the estimator section of the engine
    /// configuration.
    pub fn from_config(config: &EstimatorConfig) -> Result<Self, EstimatorError> {
        Self::new(HttpEstimatorConfig::from_config(config))
    }

    fn estimates_url(&self) -> String {
        format!("{}/v1/comparable-estimates", self.config.base_url)
    }
}

#[async_trait]
impl ComparableEstimator for HttpEstimator {
    async fn estimate(&self, profile: &CompanyProfile) -> Result<ComparableResult, EstimatorError> {
        let mut request = self
            .client
            .post(self.estimates_url())
            .json(&EstimateRequest { profile });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                EstimatorError::Timeout {
                    elapsed_secs: self.config.timeout.as_secs(),
                }
            } else {
                EstimatorError::unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EstimatorError::unavailable(format!(
                "estimation service returned {status}"
            )));
        }

        let body: EstimateResponse = response
            .json()
            .await
            .map_err(|e| EstimatorError::malformed(e.to_string()))?;

        body.into_result()
    }
}

#[derive(Serialize)]
struct EstimateRequest<'a> {
    profile: &'a CompanyProfile,
}

/// Wire shape of the estimation service response.
#[derive(Deserialize)]
struct EstimateResponse {
    #[serde(default)]
    comparables: Vec<ComparableDto>,
    ebitda_multiple: f64,
    revenue_multiple: f64,
    multiple_low: f64,
    multiple_high: f64,
    #[serde(default)]
    warnings: Vec<String>,
}

#[derive(Deserialize)]
struct ComparableDto {
    name: String,
    ebitda_multiple: f64,
    revenue_multiple: f64,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl EstimateResponse {
    /// Validates the wire payload into the domain result. An inverted or
    /// non-positive multiple band counts as a malformed response, not a
    /// usable estimate.
    fn into_result(self) -> Result<ComparableResult, EstimatorError> {
        let multiple_range = MultipleRange::try_new(self.multiple_low, self.multiple_high)
            .map_err(|e| EstimatorError::malformed(e.to_string()))?;

        Ok(ComparableResult {
            comparables: self
                .comparables
                .into_iter()
                .map(|c| ComparableCompany {
                    name: c.name,
                    ebitda_multiple: c.ebitda_multiple,
                    revenue_multiple: c.revenue_multiple,
                    weight: c.weight,
                })
                .collect(),
            ebitda_multiple: self.ebitda_multiple,
            revenue_multiple: self.revenue_multiple,
            multiple_range,
            warnings: self.warnings,
            analyzed_at: Timestamp::now(),
        })
    }
}
