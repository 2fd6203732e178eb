//! Record store
//!
//! A [`Session`] owns the two append-only logs for the lifetime of the
//! in-memory state. Adding an entry checks required fields only; what
//! happens on a failed check is governed by the session's
//! [`ValidationPolicy`]. By default the add is silently skipped and the
//! caller is told via the returned [`AddOutcome`], never via an error.

pub mod log;

pub use log::EntryLog;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{EntryValidationError, ExpenseEntry, IncomeEntry};
use crate::reports::{compute_totals, Totals};

/// What a session does when an entry fails the required-field check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Skip the append and report [`AddOutcome::Rejected`] (default)
    #[default]
    Silent,
    /// Return a [`BudgetError::Validation`] instead
    Strict,
}

/// Result of an add operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The entry was appended to its log
    Added,
    /// Required fields were missing; the log is unchanged
    Rejected(EntryValidationError),
}

impl AddOutcome {
    /// Whether the entry made it into the log
    pub fn was_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// In-memory session state: the two entry logs plus the validation policy
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Session {
    income: EntryLog<IncomeEntry>,
    expenses: EntryLog<ExpenseEntry>,
    #[serde(default)]
    policy: ValidationPolicy,
}

impl Session {
    /// Create a session with the default (silent) validation policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with an explicit validation policy
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The session's validation policy
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Income entries logged so far, in insertion order
    pub fn income(&self) -> &EntryLog<IncomeEntry> {
        &self.income
    }

    /// Expense entries logged so far, in insertion order
    pub fn expenses(&self) -> &EntryLog<ExpenseEntry> {
        &self.expenses
    }

    /// Append an income entry if its required fields are present.
    ///
    /// The entry is stored verbatim; no trimming or coercion. Under the
    /// silent policy this never returns an error.
    pub fn add_income(&mut self, entry: IncomeEntry) -> BudgetResult<AddOutcome> {
        match entry.validate() {
            Ok(()) => {
                self.income.push(entry);
                debug!("income entry appended ({} total)", self.income.len());
                Ok(AddOutcome::Added)
            }
            Err(reason) => self.reject("income", reason),
        }
    }

    /// Append an expense entry if its required fields are present.
    ///
    /// Category and payment-method labels are not checked against the
    /// known vocabularies; callers offering choices are expected to offer
    /// valid ones.
    pub fn add_expense(&mut self, entry: ExpenseEntry) -> BudgetResult<AddOutcome> {
        match entry.validate() {
            Ok(()) => {
                self.expenses.push(entry);
                debug!("expense entry appended ({} total)", self.expenses.len());
                Ok(AddOutcome::Added)
            }
            Err(reason) => self.reject("expense", reason),
        }
    }

    /// Current totals over both logs
    pub fn totals(&self) -> Totals {
        compute_totals(self.income.as_slice(), self.expenses.as_slice())
    }

    fn reject(&self, kind: &str, reason: EntryValidationError) -> BudgetResult<AddOutcome> {
        match self.policy {
            ValidationPolicy::Silent => {
                debug!("{} entry rejected: {}", kind, reason);
                Ok(AddOutcome::Rejected(reason))
            }
            ValidationPolicy::Strict => Err(BudgetError::Validation(reason.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_income_appends_valid_entry() {
        let mut session = Session::new();
        let outcome = session
            .add_income(IncomeEntry::new("2024-01-01", "1000"))
            .unwrap();

        assert!(outcome.was_added());
        assert_eq!(session.income().len(), 1);
        assert_eq!(session.income().last().unwrap().amount, "1000");
    }

    #[test]
    fn test_add_income_rejects_missing_amount() {
        let mut session = Session::new();
        let outcome = session.add_income(IncomeEntry::new("2024-01-01", "")).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Rejected(EntryValidationError::MissingAmount)
        );
        assert_eq!(session.income().len(), 0);
    }

    #[test]
    fn test_add_expense_rejects_missing_date() {
        let mut session = Session::new();
        let outcome = session.add_expense(ExpenseEntry::new("", "400")).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Rejected(EntryValidationError::MissingDate)
        );
        assert!(session.expenses().is_empty());
    }

    #[test]
    fn test_strict_policy_surfaces_validation_error() {
        let mut session = Session::with_policy(ValidationPolicy::Strict);
        let err = session
            .add_income(IncomeEntry::new("", "1000"))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(session.income().len(), 0);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut session = Session::new();
        session.add_income(IncomeEntry::new("2024-01-01", "1")).unwrap();
        session.add_income(IncomeEntry::new("2024-01-03", "3")).unwrap();
        session.add_income(IncomeEntry::new("2024-01-02", "2")).unwrap();

        let dates: Vec<_> = session.income().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-03", "2024-01-02"]);
    }

    #[test]
    fn test_entry_stored_verbatim() {
        let mut session = Session::new();
        let mut entry = IncomeEntry::new(" 2024-01-01 ", " 1000 ");
        entry.source = "  Acme  ".to_string();
        session.add_income(entry.clone()).unwrap();

        assert_eq!(session.income().last(), Some(&entry));
    }

    #[test]
    fn test_totals_reflect_latest_append() {
        let mut session = Session::new();
        session.add_income(IncomeEntry::new("2024-01-01", "1000")).unwrap();
        assert_eq!(session.totals().net, 1000.0);

        session.add_expense(ExpenseEntry::new("2024-01-02", "400")).unwrap();
        let totals = session.totals();
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expense, 400.0);
        assert_eq!(totals.net, 600.0);
    }

    #[test]
    fn test_non_numeric_amount_is_accepted_but_counts_zero() {
        let mut session = Session::new();
        let outcome = session
            .add_income(IncomeEntry::new("2024-01-01", "abc"))
            .unwrap();

        assert!(outcome.was_added());
        assert_eq!(session.totals().income, 0.0);
    }
}
