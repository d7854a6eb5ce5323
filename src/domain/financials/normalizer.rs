//! EBITDA Normalizer: adjusted EBITDA from statement figures plus the
//! add-back ledger.

use serde::{Deserialize, Serialize};

use super::{IncomeStatement, LedgerDirection, LedgerEntry};

/// Result of normalizing one fiscal period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbitdaComputation {
    /// Adjusted EBITDA, or `None` when core revenue/cost data is absent.
    ///
    /// `None` is deliberate: a missing statement must read as "unavailable",
    /// never as a zero-value business.
    pub adjusted: Option<f64>,
    /// Sum of ledger add-backs applied.
    pub add_back_total: f64,
    /// Sum of ledger deductions applied.
    pub deduction_total: f64,
}

impl EbitdaComputation {
    /// Whether an adjusted figure could be produced.
    pub fn is_available(&self) -> bool {
        self.adjusted.is_some()
    }
}

/// Period-over-period comparison of adjusted EBITDA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub current: EbitdaComputation,
    pub prior: Option<EbitdaComputation>,
    /// current − prior, present only when both periods are available.
    pub delta: Option<f64>,
}

/// Derives adjusted EBITDA for one fiscal period:
///
/// `(revenue − cogs − opex) + depreciation + amortization + interest + tax
///  + Σ(add-backs) − Σ(deductions)`
///
/// Missing statement fields zero-fill so partial data still yields a
/// best-effort figure; the result is unavailable only when revenue or all
/// cost data is absent (see [`IncomeStatement::lacks_core_data`]).
pub fn adjusted_ebitda(statement: &IncomeStatement, ledger: &[LedgerEntry]) -> EbitdaComputation {
    let add_back_total: f64 = ledger
        .iter()
        .filter(|e| e.direction == LedgerDirection::AddBack)
        .map(|e| e.amount)
        .sum();
    let deduction_total: f64 = ledger
        .iter()
        .filter(|e| e.direction == LedgerDirection::Deduction)
        .map(|e| e.amount)
        .sum();

    if statement.lacks_core_data() {
        return EbitdaComputation {
            adjusted: None,
            add_back_total,
            deduction_total,
        };
    }

    let revenue = statement.revenue.unwrap_or(0.0);
    let cogs = statement.cost_of_goods_sold.unwrap_or(0.0);
    let opex = statement.operating_expenses.unwrap_or(0.0);
    let operating_income = revenue - cogs - opex;

    let ebitda = operating_income
        + statement.depreciation.unwrap_or(0.0)
        + statement.amortization.unwrap_or(0.0)
        + statement.interest_expense.unwrap_or(0.0)
        + statement.tax_expense.unwrap_or(0.0);

    EbitdaComputation {
        adjusted: Some(ebitda + add_back_total - deduction_total),
        add_back_total,
        deduction_total,
    }
}

/// Computes the current period and, when a prior period exists, the prior
/// figure for trend comparison.
///
/// The prior period goes through the exact same formula, keeping
/// period-over-period deltas meaningful.
pub fn compare_periods(
    current_statement: &IncomeStatement,
    current_ledger: &[LedgerEntry],
    prior: Option<(&IncomeStatement, &[LedgerEntry])>,
) -> PeriodComparison {
    let current = adjusted_ebitda(current_statement, current_ledger);
    let prior = prior.map(|(statement, ledger)| adjusted_ebitda(statement, ledger));

    let delta = match (&current.adjusted, prior.as_ref().and_then(|p| p.adjusted)) {
        (Some(now), Some(before)) => Some(now - before),
        _ => None,
    };

    PeriodComparison {
        current,
        prior,
        delta,
    }
}

/// EBITDA margin guarded against zero or missing revenue.
///
/// Zero revenue is expected for early-stage records; the margin is simply
/// not computable rather than an error.
pub fn ebitda_margin(ebitda: f64, revenue: Option<f64>) -> Option<f64> {
    match revenue {
        Some(r) if r > 0.0 => Some(ebitda / r),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_statement() -> IncomeStatement {
        IncomeStatement {
            revenue: Some(2_000_000.0),
            cost_of_goods_sold: Some(600_000.0),
            operating_expenses: Some(700_000.0),
            depreciation: Some(50_000.0),
            amortization: Some(20_000.0),
            interest_expense: Some(30_000.0),
            tax_expense: Some(100_000.0),
        }
    }

    #[test]
    fn applies_the_full_formula() {
        let ledger = vec![
            LedgerEntry::add_back("Owner salary above market", 150_000.0),
            LedgerEntry::deduction("One-time asset sale gain", 40_000.0),
        ];
        let result = adjusted_ebitda(&full_statement(), &ledger);
        // (2,000,000 − 600,000 − 700,000) + 50,000 + 20,000 + 30,000
        // + 100,000 + 150,000 − 40,000
        assert_eq!(result.adjusted, Some(1_010_000.0));
        assert_eq!(result.add_back_total, 150_000.0);
        assert_eq!(result.deduction_total, 40_000.0);
    }

    #[test]
    fn missing_addback_fields_zero_fill() {
        let statement = IncomeStatement {
            revenue: Some(1_000_000.0),
            cost_of_goods_sold: Some(400_000.0),
            operating_expenses: Some(300_000.0),
            ..Default::default()
        };
        let result = adjusted_ebitda(&statement, &[]);
        assert_eq!(result.adjusted, Some(300_000.0));
    }

    #[test]
    fn absent_revenue_is_unavailable_not_zero() {
        let statement = IncomeStatement {
            operating_expenses: Some(300_000.0),
            ..Default::default()
        };
        let result = adjusted_ebitda(&statement, &[]);
        assert_eq!(result.adjusted, None);
        assert!(!result.is_available());
    }

    #[test]
    fn ledger_totals_survive_even_when_unavailable() {
        let result = adjusted_ebitda(
            &IncomeStatement::default(),
            &[LedgerEntry::add_back("Legal settlement", 10_000.0)],
        );
        assert_eq!(result.adjusted, None);
        assert_eq!(result.add_back_total, 10_000.0);
    }

    #[test]
    fn prior_period_uses_the_same_formula() {
        let prior_statement = IncomeStatement {
            revenue: Some(1_800_000.0),
            cost_of_goods_sold: Some(600_000.0),
            operating_expenses: Some(700_000.0),
            depreciation: Some(50_000.0),
            amortization: Some(20_000.0),
            interest_expense: Some(30_000.0),
            tax_expense: Some(100_000.0),
        };
        let comparison = compare_periods(&full_statement(), &[], Some((&prior_statement, &[])));
        assert_eq!(comparison.current.adjusted, Some(900_000.0));
        assert_eq!(comparison.prior.as_ref().unwrap().adjusted, Some(700_000.0));
        assert_eq!(comparison.delta, Some(200_000.0));
    }

    #[test]
    fn delta_is_absent_when_prior_is_unavailable() {
        let comparison = compare_periods(
            &full_statement(),
            &[],
            Some((&IncomeStatement::default(), &[])),
        );
        assert!(comparison.current.is_available());
        assert_eq!(comparison.delta, None);
    }

    #[test]
    fn margin_guards_division_by_zero() {
        assert_eq!(ebitda_margin(100.0, Some(0.0)), None);
        assert_eq!(ebitda_margin(100.0, None), None);
        assert_eq!(ebitda_margin(250.0, Some(1_000.0)), Some(0.25));
    }
}
