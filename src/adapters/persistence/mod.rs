//! In-memory persistence adapters for the snapshot store and input
//! reader ports.

mod in_memory_company_data;
mod in_memory_snapshot_store;

pub use in_memory_company_data::InMemoryCompanyData;
pub use in_memory_snapshot_store::InMemorySnapshotStore;
