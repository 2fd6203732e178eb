//! Custom error types for chicbudget
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The core is deliberately hard to fail:
//! serialization is total and aggregation never errors, so the only fallible
//! paths are strict-mode validation and enum label parsing.

use thiserror::Error;

/// The main error type for chicbudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Validation errors for entries (only surfaced under the strict policy)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Label is not one of the known expense categories
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// Label is not one of the known payment methods
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for chicbudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
