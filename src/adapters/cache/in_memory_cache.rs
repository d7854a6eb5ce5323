//! In-memory comparable cache for tests and single-process wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::comparables::ComparableResult;
use crate::domain::foundation::CompanyId;
use crate::ports::{CacheError, ComparableCache};

/// Map-backed cache with injectable read/write failures, so tests can
/// verify that cache trouble never fails a recalculation.
#[derive(Default)]
pub struct InMemoryComparableCache {
    entries: RwLock<HashMap<CompanyId, ComparableResult>>,
    read_failure: AtomicBool,
    write_failure: AtomicBool,
}

impl InMemoryComparableCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.read_failure.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent writes fail.
    pub fn fail_writes(&self, fail: bool) {
        self.write_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of cached entries. Useful in tests.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ComparableCache for InMemoryComparableCache {
    async fn get(&self, key: &CompanyId) -> Result<Option<ComparableResult>, CacheError> {
        if self.read_failure.load(Ordering::SeqCst) {
            return Err(CacheError::Backend("injected read failure".into()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &CompanyId, result: &ComparableResult) -> Result<(), CacheError> {
        if self.write_failure.load(Ordering::SeqCst) {
            return Err(CacheError::Backend("injected write failure".into()));
        }
        self.entries.write().await.insert(*key, result.clone());
        Ok(())
    }
}
