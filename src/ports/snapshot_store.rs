//! Snapshot Store Port - Append-only persistence for valuation snapshots.
//!
//! The trait deliberately exposes no update or delete operation: rapid
//! successive recalculations each append their own row instead of racing
//! over one mutable record, so no locking discipline is needed.

use async_trait::async_trait;

use crate::domain::foundation::{CompanyId, SnapshotId};
use crate::domain::valuation::ValuationSnapshot;

/// Errors from the snapshot store backend.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("Snapshot store backend error: {0}")]
    Backend(String),
}

/// Port for recording and reading valuation history.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Appends a new snapshot. Always inserts; never overwrites.
    async fn insert(&self, snapshot: &ValuationSnapshot) -> Result<SnapshotId, SnapshotStoreError>;

    /// The most recently created snapshot for a company, if any.
    async fn latest(&self, company_id: &CompanyId)
        -> Result<Option<ValuationSnapshot>, SnapshotStoreError>;

    /// Full snapshot history for a company, oldest first.
    async fn history(&self, company_id: &CompanyId)
        -> Result<Vec<ValuationSnapshot>, SnapshotStoreError>;
}
