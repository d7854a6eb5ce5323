//! Adapters - Implementations of the ports.
//!
//! Grouped by concern: `estimator` (external estimation service),
//! `cache` (comparable-result cache), `persistence` (snapshot store and
//! input reader fakes).

pub mod cache;
pub mod estimator;
pub mod persistence;

pub use cache::{InMemoryComparableCache, RedisComparableCache};
pub use estimator::{HttpEstimator, HttpEstimatorConfig, MockEstimator};
pub use persistence::{InMemoryCompanyData, InMemorySnapshotStore};
