//! Comparable Company Engine: the one I/O-bound step of the pipeline,
//! wrapping the external estimator in a TTL cache.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, warn};

use crate::domain::foundation::{CompanyId, EngineError, Timestamp};
use crate::ports::{ComparableCache, ComparableEstimator, EstimatorError};

use super::{CompanyProfile, ComparableResult};

/// Obtains comparable companies and a weighted multiple band for a
/// company, caching results keyed by company identity.
///
/// Cache failures are never fatal: a read error counts as a miss and a
/// write error is logged and swallowed, so at worst an extra external
/// call happens on the next access.
pub struct ComparableEngine {
    estimator: Arc<dyn ComparableEstimator>,
    cache: Arc<dyn ComparableCache>,
    ttl: Duration,
}

impl ComparableEngine {
    /// Creates an engine with the given TTL for cached results.
    pub fn new(
        estimator: Arc<dyn ComparableEstimator>,
        cache: Arc<dyn ComparableCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            estimator,
            cache,
            ttl,
        }
    }

    /// Finds comparables for a company.
    ///
    /// Returns the cached result when one exists inside the TTL window,
    /// otherwise calls the external estimator and refreshes the cache.
    /// `force_refresh` bypasses the freshness check unconditionally.
    ///
    /// # Errors
    ///
    /// [`EngineError::ServiceUnavailable`] when the estimator fails or
    /// times out; the caller decides between retry and degraded display.
    pub async fn find(
        &self,
        company_id: CompanyId,
        profile: &CompanyProfile,
        force_refresh: bool,
    ) -> Result<ComparableResult, EngineError> {
        if !force_refresh {
            if let Some(cached) = self.read_cache(company_id).await {
                if cached.is_fresh(self.ttl, Timestamp::now()) {
                    debug!(company_id = %company_id, "comparable cache hit");
                    return Ok(cached);
                }
                debug!(company_id = %company_id, analyzed_at = %cached.analyzed_at, "comparable cache entry stale");
            }
        }

        debug!(
            company_id = %company_id,
            industry = ?profile.industry_leaf(),
            force_refresh,
            "requesting comparable estimation"
        );
        let fresh = self
            .estimator
            .estimate(profile)
            .await
            .map_err(map_estimator_error)?;

        if let Err(error) = self.cache.put(&company_id, &fresh).await {
            // A lost write only costs an extra external call later.
            warn!(company_id = %company_id, %error, "comparable cache write failed; continuing");
        }

        Ok(fresh)
    }

    /// Cache read with error-as-miss semantics: a stale or corrupt entry
    /// must never mask a legitimate refresh.
    async fn read_cache(&self, company_id: CompanyId) -> Option<ComparableResult> {
        match self.cache.get(&company_id).await {
            Ok(entry) => entry,
            Err(error) => {
                warn!(company_id = %company_id, %error, "comparable cache read failed; treating as miss");
                None
            }
        }
    }
}

fn map_estimator_error(error: EstimatorError) -> EngineError {
    match error {
        EstimatorError::Unavailable { reason } => EngineError::ServiceUnavailable { reason },
        EstimatorError::Timeout { elapsed_secs } => EngineError::ServiceUnavailable {
            reason: format!("estimation timed out after {elapsed_secs}s"),
        },
        EstimatorError::MalformedResponse { detail } => EngineError::ServiceUnavailable {
            reason: format!("malformed estimator response: {detail}"),
        },
    }
}
