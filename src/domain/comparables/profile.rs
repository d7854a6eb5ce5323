//! Company profile: the read-only classification and financial shape
//! sent to the external comparable estimator.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::RevenueModel;

/// The subject company's profile, as maintained by the financial-data
/// subsystem. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Industry classification path, broadest segment first
    /// (e.g. `["Services", "IT Services", "Managed Services"]`).
    pub industry_path: Vec<String>,
    /// Trailing-twelve-month revenue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    /// EBITDA margin as a fraction, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_margin: Option<f64>,
    /// Year-over-year revenue growth as a fraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    /// How the business earns its revenue.
    pub revenue_model: RevenueModel,
    /// Revenue share of the single largest customer, as a fraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_one_concentration: Option<f64>,
    /// Combined revenue share of the three largest customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_three_concentration: Option<f64>,
}

impl CompanyProfile {
    /// The leaf industry segment, used in estimator diagnostics.
    pub fn industry_leaf(&self) -> Option<&str> {
        self.industry_path.last().map(String::as_str)
    }
}
