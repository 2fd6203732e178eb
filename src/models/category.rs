//! Expense category model
//!
//! The fixed category vocabulary offered to users when logging an expense.
//! The store itself accepts any string (entries keep whatever the caller
//! supplied), so this enum is the edge vocabulary for form collaborators
//! that want to offer and validate only known choices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Category of an expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    /// Rent or mortgage (the default choice)
    #[default]
    #[serde(rename = "Housing (Rent/Mortgage)")]
    Housing,
    Groceries,
    #[serde(rename = "Dining & Coffee")]
    DiningAndCoffee,
    Transportation,
    #[serde(rename = "Phone/Internet")]
    PhoneInternet,
    Subscriptions,
    Shopping,
    #[serde(rename = "Health & Beauty")]
    HealthAndBeauty,
    Utilities,
    Entertainment,
    #[serde(rename = "Gifts/Donations")]
    GiftsDonations,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories, in the order they are offered to users
    pub const ALL: [Self; 13] = [
        Self::Housing,
        Self::Groceries,
        Self::DiningAndCoffee,
        Self::Transportation,
        Self::PhoneInternet,
        Self::Subscriptions,
        Self::Shopping,
        Self::HealthAndBeauty,
        Self::Utilities,
        Self::Entertainment,
        Self::GiftsDonations,
        Self::Travel,
        Self::Other,
    ];

    /// The user-facing label for this category
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Housing => "Housing (Rent/Mortgage)",
            Self::Groceries => "Groceries",
            Self::DiningAndCoffee => "Dining & Coffee",
            Self::Transportation => "Transportation",
            Self::PhoneInternet => "Phone/Internet",
            Self::Subscriptions => "Subscriptions",
            Self::Shopping => "Shopping",
            Self::HealthAndBeauty => "Health & Beauty",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::GiftsDonations => "Gifts/Donations",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = BudgetError;

    /// Parse an exact category label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BudgetError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_category() {
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::ALL[0]);
        assert_eq!(
            ExpenseCategory::default().as_str(),
            "Housing (Rent/Mortgage)"
        );
    }

    #[test]
    fn test_all_has_thirteen_distinct_labels() {
        assert_eq!(ExpenseCategory::ALL.len(), 13);
        let labels: std::collections::HashSet<_> =
            ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels.len(), 13);
        assert_eq!(ExpenseCategory::ALL[12].as_str(), "Other");
    }

    #[test]
    fn test_label_round_trip() {
        for category in ExpenseCategory::ALL {
            let parsed: ExpenseCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Pets".parse::<ExpenseCategory>().unwrap_err();
        assert!(matches!(err, BudgetError::UnknownCategory(_)));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&ExpenseCategory::DiningAndCoffee).unwrap();
        assert_eq!(json, "\"Dining & Coffee\"");
    }
}
