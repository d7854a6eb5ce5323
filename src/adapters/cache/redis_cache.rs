//! Redis implementation of the comparable cache.
//!
//! Stores each result as a JSON payload under `{prefix}:{company_id}`.
//! Entries are also written with a redis-side expiry as backstop hygiene;
//! the caller-side `analyzed_at` TTL check remains authoritative.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};

use crate::config::CacheConfig;
use crate::domain::comparables::ComparableResult;
use crate::domain::foundation::CompanyId;
use crate::ports::{CacheError, ComparableCache};

/// Redis-backed comparable cache.
pub struct RedisComparableCache {
    connection: MultiplexedConnection,
    key_prefix: String,
    /// Redis-side expiry, seconds. Set a little above the engine TTL so
    /// the freshness decision stays with the engine.
    expiry_secs: u64,
}

impl RedisComparableCache {
    /// Connects to redis at the given URL.
    pub async fn connect(
        url: &str,
        key_prefix: impl Into<String>,
        expiry_secs: u64,
    ) -> Result<Self, CacheError> {
        let client = Client::open(url).map_err(backend)?;
        let connection = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(backend)?;
        Ok(Self {
            connection,
            key_prefix: key_prefix.into(),
            expiry_secs,
        })
    }

    /// Connects using the cache section of the engine configuration.
    pub async fn from_config(config: &CacheConfig, expiry_secs: u64) -> Result<Self, CacheError> {
        Self::connect(&config.url, config.key_prefix.clone(), expiry_secs).await
    }

    fn key(&self, company_id: &CompanyId) -> String {
        format!("{}:{}", self.key_prefix, company_id)
    }
}

#[async_trait]
impl ComparableCache for RedisComparableCache {
    async fn get(&self, key: &CompanyId) -> Result<Option<ComparableResult>, CacheError> {
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection.get(self.key(key)).await.map_err(backend)?;
        raw.map(|payload| serde_json::from_str(&payload))
            .transpose()
            .map_err(|e| CacheError::Corrupt(e.to_string()))
    }

    async fn put(&self, key: &CompanyId, result: &ComparableResult) -> Result<(), CacheError> {
        let payload =
            serde_json::to_string(result).map_err(|e| CacheError::Backend(e.to_string()))?;
        let mut connection = self.connection.clone();
        connection
            .set_ex(self.key(key), payload, self.expiry_secs)
            .await
            .map_err(backend)
    }
}

fn backend(error: redis::RedisError) -> CacheError {
    CacheError::Backend(error.to_string())
}
