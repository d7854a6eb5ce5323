//! Risk-based adjustment of the comparable multiple range.
//!
//! Adjustments are additive in percentage-point space, not
//! multiplicative-chained, so the total reads as an auditable bridge:
//! each line item is one bounded delta with a rationale, and the sum is
//! clamped to a sane band before becoming a multiplier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;
use crate::domain::scoring::RevenueSizeBucket;

// Concentration thresholds: fraction of revenue from top customers.
const SEVERE_TOP_ONE_CONCENTRATION: f64 = 0.30;
const ELEVATED_TOP_ONE_CONCENTRATION: f64 = 0.15;
const ELEVATED_TOP_THREE_CONCENTRATION: f64 = 0.50;

// Growth thresholds as year-over-year fractions.
const STRONG_GROWTH: f64 = 0.20;
const HEALTHY_GROWTH: f64 = 0.10;

// Margin thresholds as EBITDA/revenue fractions.
const STRONG_MARGIN: f64 = 0.25;
const WEAK_MARGIN: f64 = 0.10;

/// Transferability benchmark below which buyers discount.
const TRANSFERABILITY_BENCHMARK: f64 = 0.60;

/// Company attributes the adjustment engine evaluates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentProfile {
    pub size_bucket: RevenueSizeBucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_one_concentration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_three_concentration: Option<f64>,
    pub transferability: Score,
    pub recurring_revenue: bool,
}

/// One named adjustment with its percentage-point delta and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentLineItem {
    pub name: String,
    /// Signed delta as a fraction of the base multiple (e.g. -0.10).
    pub delta: f64,
    pub rationale: String,
}

impl AdjustmentLineItem {
    fn new(name: &str, delta: f64, rationale: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            delta,
            rationale: rationale.into(),
        }
    }
}

/// The full adjustment bridge: ordered line items, clamped total, and the
/// multiplier applied to the comparable multiple range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    pub line_items: Vec<AdjustmentLineItem>,
    /// Sum of deltas after clamping.
    pub total_adjustment: f64,
    /// `1 + total_adjustment`.
    pub multiplier: f64,
}

/// Computes risk-based multiple adjustments.
pub struct AdjustmentEngine {
    /// Absolute bound on the total adjustment, preventing runaway
    /// compounding of individually reasonable deltas.
    clamp_band: f64,
}

impl AdjustmentEngine {
    /// Creates an engine with the given clamp band (e.g. 0.30 for ±30%).
    pub fn new(clamp_band: f64) -> Self {
        Self { clamp_band }
    }

    /// Evaluates every adjustment rule in a fixed order and returns the
    /// bridge. Metrics that are not computable (missing concentration
    /// data, unknown margin) simply contribute no line item.
    pub fn compute(&self, profile: &AdjustmentProfile) -> AdjustmentResult {
        let mut items = Vec::new();

        match profile.growth_rate {
            Some(g) if g >= STRONG_GROWTH => items.push(AdjustmentLineItem::new(
                "Revenue growth",
                0.10,
                format!("Growth of {:.0}% is well above market", g * 100.0),
            )),
            Some(g) if g >= HEALTHY_GROWTH => items.push(AdjustmentLineItem::new(
                "Revenue growth",
                0.05,
                format!("Growth of {:.0}% is above market", g * 100.0),
            )),
            Some(g) if g < 0.0 => items.push(AdjustmentLineItem::new(
                "Revenue growth",
                -0.10,
                format!("Revenue declining at {:.0}%", g.abs() * 100.0),
            )),
            _ => {}
        }

        match profile.ebitda_margin {
            Some(m) if m >= STRONG_MARGIN => items.push(AdjustmentLineItem::new(
                "EBITDA margin",
                0.05,
                format!("Margin of {:.0}% exceeds peer benchmark", m * 100.0),
            )),
            Some(m) if m < WEAK_MARGIN => items.push(AdjustmentLineItem::new(
                "EBITDA margin",
                -0.05,
                format!("Margin of {:.0}% is below peer benchmark", m * 100.0),
            )),
            _ => {}
        }

        match profile.top_one_concentration {
            Some(c) if c > SEVERE_TOP_ONE_CONCENTRATION => items.push(AdjustmentLineItem::new(
                "Customer concentration",
                -0.10,
                format!("Largest customer is {:.0}% of revenue", c * 100.0),
            )),
            Some(c) if c > ELEVATED_TOP_ONE_CONCENTRATION => items.push(AdjustmentLineItem::new(
                "Customer concentration",
                -0.05,
                format!("Largest customer is {:.0}% of revenue", c * 100.0),
            )),
            _ => {}
        }

        if let Some(c) = profile.top_three_concentration {
            if c > ELEVATED_TOP_THREE_CONCENTRATION {
                items.push(AdjustmentLineItem::new(
                    "Top-3 customer concentration",
                    -0.05,
                    format!("Top three customers are {:.0}% of revenue", c * 100.0),
                ));
            }
        }

        if profile.recurring_revenue {
            items.push(AdjustmentLineItem::new(
                "Recurring revenue",
                0.05,
                "Contracted recurring revenue de-risks the forecast",
            ));
        }

        if profile.transferability.value() < TRANSFERABILITY_BENCHMARK {
            items.push(AdjustmentLineItem::new(
                "Transferability",
                -0.05,
                format!(
                    "Transferability score {:.2} is below the {:.2} benchmark",
                    profile.transferability.value(),
                    TRANSFERABILITY_BENCHMARK
                ),
            ));
        }

        let raw_total: f64 = items.iter().map(|i| i.delta).sum();
        let total_adjustment = raw_total.clamp(-self.clamp_band, self.clamp_band);

        AdjustmentResult {
            line_items: items,
            total_adjustment,
            multiplier: 1.0 + total_adjustment,
        }
    }
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new(0.30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_profile() -> AdjustmentProfile {
        AdjustmentProfile {
            size_bucket: RevenueSizeBucket::Small,
            growth_rate: Some(0.05),
            ebitda_margin: Some(0.15),
            top_one_concentration: Some(0.10),
            top_three_concentration: Some(0.25),
            transferability: Score::new(0.8),
            recurring_revenue: false,
        }
    }

    #[test]
    fn neutral_profile_has_no_adjustments() {
        let result = AdjustmentEngine::default().compute(&neutral_profile());
        assert!(result.line_items.is_empty());
        assert_eq!(result.total_adjustment, 0.0);
        assert_eq!(result.multiplier, 1.0);
    }

    #[test]
    fn recurring_revenue_adds_five_points() {
        let profile = AdjustmentProfile {
            recurring_revenue: true,
            ..neutral_profile()
        };
        let result = AdjustmentEngine::default().compute(&profile);
        assert_eq!(result.line_items.len(), 1);
        assert_eq!(result.total_adjustment, 0.05);
        assert_eq!(result.multiplier, 1.05);
    }

    #[test]
    fn severe_concentration_is_a_ten_point_penalty() {
        let profile = AdjustmentProfile {
            top_one_concentration: Some(0.45),
            ..neutral_profile()
        };
        let result = AdjustmentEngine::default().compute(&profile);
        assert_eq!(result.total_adjustment, -0.10);
    }

    #[test]
    fn deltas_are_additive_not_chained() {
        let profile = AdjustmentProfile {
            growth_rate: Some(0.25),
            ebitda_margin: Some(0.30),
            recurring_revenue: true,
            ..neutral_profile()
        };
        let result = AdjustmentEngine::default().compute(&profile);
        // 0.10 + 0.05 + 0.05, summed in percentage-point space.
        assert!((result.total_adjustment - 0.20).abs() < 1e-12);
        assert!((result.multiplier - 1.20).abs() < 1e-12);
    }

    #[test]
    fn total_is_clamped_to_the_band() {
        let profile = AdjustmentProfile {
            growth_rate: Some(-0.20),
            ebitda_margin: Some(0.05),
            top_one_concentration: Some(0.60),
            top_three_concentration: Some(0.80),
            transferability: Score::new(0.3),
            recurring_revenue: false,
            size_bucket: RevenueSizeBucket::Micro,
        };
        let result = AdjustmentEngine::new(0.30).compute(&profile);
        // Raw sum is -0.35; the band caps it.
        assert_eq!(result.total_adjustment, -0.30);
        assert!((result.multiplier - 0.70).abs() < 1e-12);
    }

    #[test]
    fn missing_metrics_contribute_no_line_items() {
        let profile = AdjustmentProfile {
            growth_rate: None,
            ebitda_margin: None,
            top_one_concentration: None,
            top_three_concentration: None,
            ..neutral_profile()
        };
        let result = AdjustmentEngine::default().compute(&profile);
        assert!(result.line_items.is_empty());
    }

    #[test]
    fn line_items_keep_rule_evaluation_order() {
        let profile = AdjustmentProfile {
            growth_rate: Some(0.25),
            top_one_concentration: Some(0.45),
            recurring_revenue: true,
            ..neutral_profile()
        };
        let result = AdjustmentEngine::default().compute(&profile);
        let names: Vec<&str> = result.line_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Revenue growth", "Customer concentration", "Recurring revenue"]
        );
    }
}
