//! Running totals
//!
//! Pure functions over the current entry collections. Totals are recomputed
//! on demand rather than kept incrementally, so they are always a function
//! of exactly what is in the logs.

use serde::{Deserialize, Serialize};

use crate::models::amount::{parse_or_zero, HasAmount};
use crate::models::{ExpenseEntry, IncomeEntry};

/// Aggregate totals over both collections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: f64,
    /// Sum of all expense amounts
    pub expense: f64,
    /// `income - expense`
    pub net: f64,
}

/// Sum the parsed amounts of a sequence of entries.
///
/// Each entry contributes its amount parsed as a finite number, or zero
/// if it does not parse (see [`parse_or_zero`]). Never fails.
pub fn total_amount<T: HasAmount>(entries: &[T]) -> f64 {
    entries.iter().map(|e| parse_or_zero(e.raw_amount())).sum()
}

/// Compute income, expense, and net totals
pub fn compute_totals(income: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Totals {
    let income_total = total_amount(income);
    let expense_total = total_amount(expenses);
    Totals {
        income: income_total,
        expense: expense_total,
        net: income_total - expense_total,
    }
}
