//! In-memory company data reader for tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::CompanyId;
use crate::ports::{CompanyDataReader, ReaderError, RecalculationInputs};

/// Map-backed input reader; production deployments implement the port
/// over their own persistence.
#[derive(Default)]
pub struct InMemoryCompanyData {
    companies: RwLock<HashMap<CompanyId, RecalculationInputs>>,
}

impl InMemoryCompanyData {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces a company's inputs.
    pub async fn upsert(&self, company_id: CompanyId, inputs: RecalculationInputs) {
        self.companies.write().await.insert(company_id, inputs);
    }
}

#[async_trait]
impl CompanyDataReader for InMemoryCompanyData {
    async fn load_inputs(
        &self,
        company_id: &CompanyId,
    ) -> Result<RecalculationInputs, ReaderError> {
        self.companies
            .read()
            .await
            .get(company_id)
            .cloned()
            .ok_or(ReaderError::CompanyNotFound(*company_id))
    }
}
