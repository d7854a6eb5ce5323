//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `ComparableEstimator` - External comparable-company estimation
//! - `ComparableCache` - Key-value cache for estimation results
//! - `SnapshotStore` - Append-only valuation history
//! - `CompanyDataReader` - Read-only engine inputs

mod company_data_reader;
mod comparable_cache;
mod comparable_estimator;
mod snapshot_store;

pub use company_data_reader::{CompanyDataReader, ReaderError, RecalculationInputs};
pub use comparable_cache::{CacheError, ComparableCache};
pub use comparable_estimator::{ComparableEstimator, EstimatorError};
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};
