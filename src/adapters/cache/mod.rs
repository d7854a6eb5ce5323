//! Comparable cache adapters: redis-backed and in-memory.

mod in_memory_cache;
mod redis_cache;

pub use in_memory_cache::InMemoryComparableCache;
pub use redis_cache::RedisComparableCache;
