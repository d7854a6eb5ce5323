//! Comparable Cache Port - Key-value persistence for estimation results.
//!
//! An explicit, injectable capability rather than module-level state: the
//! TTL check happens in the caller, so implementations only store and
//! fetch. Cache errors are never fatal to a recalculation.

use async_trait::async_trait;

use crate::domain::comparables::ComparableResult;
use crate::domain::foundation::CompanyId;

/// Errors from the cache backend.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Corrupt cache entry: {0}")]
    Corrupt(String),
}

/// Port for the comparable-result cache, keyed by company identity.
#[async_trait]
pub trait ComparableCache: Send + Sync {
    /// Fetches the cached result for a company, if any.
    ///
    /// A `Corrupt` error means the stored payload no longer deserializes;
    /// callers treat any error as a miss.
    async fn get(&self, key: &CompanyId) -> Result<Option<ComparableResult>, CacheError>;

    /// Stores a result, replacing any previous entry for the company.
    async fn put(&self, key: &CompanyId, result: &ComparableResult) -> Result<(), CacheError>;
}
