//! Shared entry validation
//!
//! Both entry kinds have the same minimal contract: `date` and `amount`
//! must be non-empty. Nothing else is checked; dates and amounts are kept
//! verbatim as entered.

use std::fmt;

/// Validation errors for income and expense entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingDate,
    MissingAmount,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "date is required"),
            Self::MissingAmount => write!(f, "amount is required"),
        }
    }
}

impl std::error::Error for EntryValidationError {}
