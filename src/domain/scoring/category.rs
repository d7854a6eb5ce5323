//! The six buyer-readiness assessment categories and their scores.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// The six readiness categories, fixed by the assessment framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    Transferability,
    Operational,
    Market,
    LegalTax,
    Personal,
}

impl Category {
    /// All categories in canonical display order.
    pub const ALL: [Category; 6] = [
        Category::Financial,
        Category::Transferability,
        Category::Operational,
        Category::Market,
        Category::LegalTax,
        Category::Personal,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::Transferability => "Transferability",
            Category::Operational => "Operational",
            Category::Market => "Market",
            Category::LegalTax => "Legal & Tax",
            Category::Personal => "Personal",
        }
    }
}

/// Per-category readiness scores on the normalized 0–1 scale.
///
/// Fixed-arity by design: exhaustiveness over the six categories is
/// enforced at construction time, not by runtime map validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub financial: Score,
    pub transferability: Score,
    pub operational: Score,
    pub market: Score,
    pub legal_tax: Score,
    pub personal: Score,
}

impl CategoryScores {
    /// Returns the score for a category.
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Financial => self.financial,
            Category::Transferability => self.transferability,
            Category::Operational => self.operational,
            Category::Market => self.market,
            Category::LegalTax => self.legal_tax,
            Category::Personal => self.personal,
        }
    }

    /// Iterates (category, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// The lowest score across all categories.
    pub fn min(&self) -> Score {
        self.iter()
            .map(|(_, s)| s)
            .fold(Score::ONE, |acc, s| if s < acc { s } else { acc })
    }

    /// The highest score across all categories.
    pub fn max(&self) -> Score {
        self.iter()
            .map(|(_, s)| s)
            .fold(Score::ZERO, |acc, s| if s > acc { s } else { acc })
    }
}
