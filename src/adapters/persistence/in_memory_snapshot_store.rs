//! In-memory snapshot store.
//!
//! Append-only like the port demands: the backing `Vec` only ever grows,
//! and reads hand out clones, so recorded snapshots cannot be mutated
//! through this adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{CompanyId, SnapshotId};
use crate::domain::valuation::ValuationSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// Vec-backed snapshot store for tests and single-server deployments.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshots: RwLock<Vec<ValuationSnapshot>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of snapshots across all companies.
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Whether the store holds no snapshots.
    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn insert(&self, snapshot: &ValuationSnapshot) -> Result<SnapshotId, SnapshotStoreError> {
        self.snapshots.write().await.push(snapshot.clone());
        Ok(snapshot.id)
    }

    async fn latest(
        &self,
        company_id: &CompanyId,
    ) -> Result<Option<ValuationSnapshot>, SnapshotStoreError> {
        Ok(self
            .snapshots
            .read()
            .await
            .iter()
            .rev()
            .find(|s| s.company_id == *company_id)
            .cloned())
    }

    async fn history(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<ValuationSnapshot>, SnapshotStoreError> {
        Ok(self
            .snapshots
            .read()
            .await
            .iter()
            .filter(|s| s.company_id == *company_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ActorId, Score, Timestamp};
    use crate::domain::scoring::CategoryScores;

    fn snapshot(company_id: CompanyId, current_value: i64) -> ValuationSnapshot {
        let score = Score::new(0.7);
        ValuationSnapshot {
            id: SnapshotId::new(),
            company_id,
            adjusted_ebitda: 1_000_000.0,
            multiple_low: 4.0,
            multiple_high: 6.0,
            base_multiple: 6.3,
            final_multiple: 5.733,
            discount_fraction: 0.09,
            bri_score: score,
            category_scores: CategoryScores {
                financial: score,
                transferability: score,
                operational: score,
                market: score,
                legal_tax: score,
                personal: score,
            },
            core_score: Score::ONE,
            current_value,
            potential_value: current_value + 100,
            value_gap: 100,
            comparable_warnings: Vec::new(),
            reason: "test".into(),
            recorded_by: ActorId::new(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn latest_returns_most_recently_inserted() {
        let store = InMemorySnapshotStore::new();
        let company = CompanyId::new();
        store.insert(&snapshot(company, 100)).await.unwrap();
        store.insert(&snapshot(company, 200)).await.unwrap();

        let latest = store.latest(&company).await.unwrap().unwrap();
        assert_eq!(latest.current_value, 200);
    }

    #[tokio::test]
    async fn history_is_per_company_and_in_insertion_order() {
        let store = InMemorySnapshotStore::new();
        let a = CompanyId::new();
        let b = CompanyId::new();
        store.insert(&snapshot(a, 1)).await.unwrap();
        store.insert(&snapshot(b, 2)).await.unwrap();
        store.insert(&snapshot(a, 3)).await.unwrap();

        let history = store.history(&a).await.unwrap();
        let values: Vec<i64> = history.iter().map(|s| s.current_value).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[tokio::test]
    async fn insert_never_overwrites() {
        let store = InMemorySnapshotStore::new();
        let company = CompanyId::new();
        let first = snapshot(company, 100);
        store.insert(&first).await.unwrap();
        store.insert(&snapshot(company, 200)).await.unwrap();

        let history = store.history(&company).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], first);
    }
}
