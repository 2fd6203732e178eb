//! Expense entry model
//!
//! Mirrors the income entry contract: raw strings, `date` and `amount`
//! required, everything else optional. Category and payment method default
//! to the first choice in their respective vocabularies, but the entry
//! itself stores free strings; enum membership is enforced (if at all) by
//! the collaborator collecting the input.

use serde::{Deserialize, Serialize};

use super::amount::HasAmount;
use super::category::ExpenseCategory;
use super::entry::EntryValidationError;
use super::payment::PaymentMethod;
use crate::export::TabularRecord;

fn default_category() -> String {
    ExpenseCategory::default().as_str().to_string()
}

fn default_payment_method() -> String {
    PaymentMethod::default().as_str().to_string()
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Date of the expense (required, otherwise unchecked)
    pub date: String,

    /// What the money was spent on
    #[serde(default)]
    pub description: String,

    /// Category label, normally one of [`ExpenseCategory`]
    #[serde(default = "default_category")]
    pub category: String,

    /// Payment method label, normally one of [`PaymentMethod`];
    /// `paymentMethod` on the wire
    #[serde(default = "default_payment_method", rename = "paymentMethod")]
    pub payment_method: String,

    /// Raw amount as entered; parsed only at aggregation time
    pub amount: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Default for ExpenseEntry {
    fn default() -> Self {
        Self {
            date: String::new(),
            description: String::new(),
            category: default_category(),
            payment_method: default_payment_method(),
            amount: String::new(),
            notes: String::new(),
        }
    }
}

impl ExpenseEntry {
    /// Create an entry with the two required fields; the rest default
    pub fn new(date: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// Validate the entry (required fields only)
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.date.is_empty() {
            return Err(EntryValidationError::MissingDate);
        }
        if self.amount.is_empty() {
            return Err(EntryValidationError::MissingAmount);
        }
        Ok(())
    }
}

impl HasAmount for ExpenseEntry {
    fn raw_amount(&self) -> &str {
        &self.amount
    }
}

impl TabularRecord for ExpenseEntry {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "date" => Some(&self.date),
            "description" => Some(&self.description),
            "category" => Some(&self.category),
            "paymentMethod" => Some(&self.payment_method),
            "amount" => Some(&self.amount),
            "notes" => Some(&self.notes),
            _ => None,
        }
    }
}
