//! Income statement and normalization ledger input types.

use serde::{Deserialize, Serialize};

/// One fiscal period's income statement, as entered by the owner.
///
/// Every field is optional: early-stage or partially onboarded companies
/// routinely have gaps, and the normalizer decides which gaps are safe to
/// zero-fill and which make the figure unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_of_goods_sold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_expenses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depreciation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortization: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_expense: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_expense: Option<f64>,
}

impl IncomeStatement {
    /// True when the statement carries no revenue figure, or carries
    /// neither cost figure. Normalizing such a statement would fabricate
    /// a zero-value business, so the result is marked unavailable instead.
    pub fn lacks_core_data(&self) -> bool {
        self.revenue.is_none()
            || (self.cost_of_goods_sold.is_none() && self.operating_expenses.is_none())
    }
}

/// Direction of a manually entered normalization ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerDirection {
    /// Non-recurring or personal expense added back to EBITDA.
    AddBack,
    /// One-time gain removed from EBITDA.
    Deduction,
}

/// A manually entered add-back or deduction with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub description: String,
    pub amount: f64,
    pub direction: LedgerDirection,
}

impl LedgerEntry {
    /// Creates an add-back entry.
    pub fn add_back(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
            direction: LedgerDirection::AddBack,
        }
    }

    /// Creates a deduction entry.
    pub fn deduction(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
            direction: LedgerDirection::Deduction,
        }
    }
}
