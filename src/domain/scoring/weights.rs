//! BRI weight configuration with sum-to-one validation and precedence.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::Category;

/// An unvalidated set of six category weights, as stored in configuration.
///
/// This is the deserialization shape for company- or organization-level
/// weight overrides; it becomes usable only via [`BriWeights::try_from_set`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub financial: f64,
    pub transferability: f64,
    pub operational: f64,
    pub market: f64,
    pub legal_tax: f64,
    pub personal: f64,
}

/// Weight configuration as resolved for one company, highest precedence first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeightPrecedence {
    /// Company-specific override, if the company has one.
    pub company_override: Option<WeightSet>,
    /// Organization-wide default, if the organization set one.
    pub organization_default: Option<WeightSet>,
}

/// Validated BRI category weights.
///
/// Invariant: every weight lies in [0, 1] and the six weights sum to
/// exactly 1.0 at percentage-point granularity. A set summing to 0.99 or
/// 1.01 is a configuration error, rejected before any computation runs —
/// weights are never silently renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BriWeights {
    financial: f64,
    transferability: f64,
    operational: f64,
    market: f64,
    legal_tax: f64,
    personal: f64,
}

impl BriWeights {
    /// Validates and constructs a weight set.
    pub fn try_new(
        financial: f64,
        transferability: f64,
        operational: f64,
        market: f64,
        legal_tax: f64,
        personal: f64,
    ) -> Result<Self, ValidationError> {
        let fields = [
            ("financial", financial),
            ("transferability", transferability),
            ("operational", operational),
            ("market", market),
            ("legal_tax", legal_tax),
            ("personal", personal),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::WeightOutOfRange {
                    field: name,
                    actual: value,
                });
            }
        }

        // Validate the sum in percentage points to avoid floating-point
        // drift (0.25 + 0.20 + ... may not hit 1.0 bit-exactly).
        let sum: f64 = fields.iter().map(|(_, v)| v).sum();
        let sum_percent = (sum * 100.0).round() as i64;
        if sum_percent != 100 {
            return Err(ValidationError::WeightSumMismatch { sum_percent });
        }

        Ok(Self {
            financial,
            transferability,
            operational,
            market,
            legal_tax,
            personal,
        })
    }

    /// Validates a raw [`WeightSet`] from configuration.
    pub fn try_from_set(set: WeightSet) -> Result<Self, ValidationError> {
        Self::try_new(
            set.financial,
            set.transferability,
            set.operational,
            set.market,
            set.legal_tax,
            set.personal,
        )
    }

    /// The system-wide default weighting used when neither the company
    /// nor its organization configured one.
    pub fn system_default() -> Self {
        Self {
            financial: 0.25,
            transferability: 0.20,
            operational: 0.15,
            market: 0.15,
            legal_tax: 0.10,
            personal: 0.15,
        }
    }

    /// Resolves the effective weights for a company.
    ///
    /// Precedence: company override > organization default > system default.
    /// An invalid override at any level is rejected, never skipped — a
    /// company with a broken override must not silently fall back.
    pub fn resolve(precedence: &WeightPrecedence) -> Result<Self, ValidationError> {
        if let Some(set) = precedence.company_override {
            return Self::try_from_set(set);
        }
        if let Some(set) = precedence.organization_default {
            return Self::try_from_set(set);
        }
        Ok(Self::system_default())
    }

    /// Returns the weight for a category.
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Financial => self.financial,
            Category::Transferability => self.transferability,
            Category::Operational => self.operational,
            Category::Market => self.market,
            Category::LegalTax => self.legal_tax,
            Category::Personal => self.personal,
        }
    }
}
