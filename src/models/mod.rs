//! Core data models for chicbudget
//!
//! This module contains the data structures of the budgeting domain:
//! income and expense entries, the fixed category and payment-method
//! vocabularies, and the amount-parsing semantics shared by both.

pub mod amount;
pub mod category;
pub mod entry;
pub mod expense;
pub mod income;
pub mod payment;

pub use amount::{parse_or_zero, HasAmount};
pub use category::ExpenseCategory;
pub use entry::EntryValidationError;
pub use expense::ExpenseEntry;
pub use income::IncomeEntry;
pub use payment::PaymentMethod;
