//! EBITDA Normalizer: income statements, the add-back ledger and the
//! adjusted-EBITDA derivation.

mod normalizer;
mod statement;

pub use normalizer::{
    adjusted_ebitda, compare_periods, ebitda_margin, EbitdaComputation, PeriodComparison,
};
pub use statement::{IncomeStatement, LedgerDirection, LedgerEntry};
