//! chicbudget - in-memory budget logging core
//!
//! This library is the core of a personal budget tracker: it holds the
//! logged income and expense entries, computes running totals, and produces
//! the spreadsheet-compatible CSV exports. It deliberately stops there;
//! forms, rendering, and file delivery are the embedding application's job.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Entry models, category/payment vocabularies, amount parsing
//! - `store`: The append-only entry logs and the owning session
//! - `reports`: Totals computed over the current logs
//! - `export`: Schema-driven CSV serialization
//!
//! # Example
//!
//! ```rust
//! use chicbudget::{expense_export, ExpenseEntry, IncomeEntry, Session};
//!
//! let mut session = Session::new();
//! session.add_income(IncomeEntry::new("2024-01-01", "1000"))?;
//! session.add_expense(ExpenseEntry::new("2024-01-02", "400"))?;
//!
//! assert_eq!(session.totals().net, 600.0);
//! let file = expense_export(&session);
//! assert_eq!(file.filename, "Expense_Log.csv");
//! # Ok::<(), chicbudget::BudgetError>(())
//! ```

pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{BudgetError, BudgetResult};
pub use export::{
    expense_export, income_export, to_delimited_text, ExportFile, TabularRecord, CSV_MIME,
};
pub use models::{
    parse_or_zero, EntryValidationError, ExpenseCategory, ExpenseEntry, HasAmount, IncomeEntry,
    PaymentMethod,
};
pub use reports::{compute_totals, total_amount, Totals};
pub use store::{AddOutcome, EntryLog, Session, ValidationPolicy};
