//! Company Data Reader Port - Read-only access to engine inputs.
//!
//! Financial statements, assessment scores and weight configuration are
//! owned by other subsystems; the engine only ever reads them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::comparables::CompanyProfile;
use crate::domain::financials::{IncomeStatement, LedgerEntry};
use crate::domain::foundation::CompanyId;
use crate::domain::scoring::{CategoryScores, CoreFactors, WeightPrecedence};

/// Errors from the input reader backend.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("Company not found: {0}")]
    CompanyNotFound(CompanyId),

    #[error("Reader backend error: {0}")]
    Backend(String),
}

/// Everything one recalculation needs, loaded up front so the pure
/// pipeline steps run over already-fetched data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculationInputs {
    pub profile: CompanyProfile,
    pub statement: IncomeStatement,
    /// Prior fiscal period, when one exists, for trend comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_statement: Option<IncomeStatement>,
    pub ledger: Vec<LedgerEntry>,
    pub category_scores: CategoryScores,
    pub weights: WeightPrecedence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_factors: Option<CoreFactors>,
}

/// Port for loading the read-only inputs of a recalculation.
#[async_trait]
pub trait CompanyDataReader: Send + Sync {
    /// Loads all inputs for a company.
    ///
    /// # Errors
    /// Returns [`ReaderError::CompanyNotFound`] when the company has no
    /// record.
    async fn load_inputs(&self, company_id: &CompanyId)
        -> Result<RecalculationInputs, ReaderError>;
}
