//! Income entry model
//!
//! A single logged income record. Every field is kept as the raw string the
//! user entered; nothing is trimmed or coerced. Only `date` and `amount`
//! are required, and `amount` is not parsed until aggregation or export.

use serde::{Deserialize, Serialize};

use super::amount::HasAmount;
use super::entry::EntryValidationError;
use crate::export::TabularRecord;

fn default_kind() -> String {
    "Paycheck".to_string()
}

/// A single income record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Date received, expected as YYYY-MM-DD (not validated beyond non-empty)
    pub date: String,

    /// Where the money came from (e.g., "NBC")
    #[serde(default)]
    pub source: String,

    /// Kind of income (e.g., "Paycheck", "Bonus"); `type` on the wire
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,

    /// Raw amount as entered; parsed only at aggregation time
    pub amount: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Default for IncomeEntry {
    fn default() -> Self {
        Self {
            date: String::new(),
            source: String::new(),
            kind: default_kind(),
            amount: String::new(),
            notes: String::new(),
        }
    }
}

impl IncomeEntry {
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

impl HasAmount for IncomeEntry {
    fn raw_amount(&self) -> &str {
        &self.amount
    }
}

impl TabularRecord for IncomeEntry {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "date" => Some(&self.date),
            "source" => Some(&self.source),
            "type" => Some(&self.kind),
            "amount" => Some(&self.amount),
            "notes" => Some(&self.notes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_kind_to_paycheck() {
        let entry = IncomeEntry::new("2024-01-01", "1000");
        assert_eq!(entry.kind, "Paycheck");
        assert!(entry.source.is_empty());
        assert!(entry.notes.is_empty());
    }

    #[test]
    fn test_validate_requires_date_and_amount() {
        assert!(IncomeEntry::new("2024-01-01", "1000").validate().is_ok());

        let no_date = IncomeEntry::new("", "1000");
        assert_eq!(no_date.validate(), Err(EntryValidationError::MissingDate));

        let no_amount = IncomeEntry::new("2024-01-01", "");
        assert_eq!(
            no_amount.validate(),
            Err(EntryValidationError::MissingAmount)
        );
    }

    #[test]
    fn test_non_numeric_amount_passes_validation() {
        // Numeric-ness is an aggregation concern, not an add-time one
        assert!(IncomeEntry::new("2024-01-01", "abc").validate().is_ok());
    }

    #[test]
    fn test_wire_name_for_kind_is_type() {
        let entry = IncomeEntry::new("2024-01-01", "1000");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"Paycheck\""));

        let parsed: IncomeEntry =
            serde_json::from_str(r#"{"date":"2024-01-01","amount":"5"}"#).unwrap();
        assert_eq!(parsed.kind, "Paycheck");
    }

    #[test]
    fn test_field_lookup() {
        let mut entry = IncomeEntry::new("2024-01-01", "1000");
        entry.source = "Acme".to_string();
        assert_eq!(entry.field("date"), Some("2024-01-01"));
        assert_eq!(entry.field("source"), Some("Acme"));
        assert_eq!(entry.field("type"), Some("Paycheck"));
        assert_eq!(entry.field("paymentMethod"), None);
    }
}
