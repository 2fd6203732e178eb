//! Payment method model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Credit card (the default choice)
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    Debit,
    Cash,
    Transfer,
}

impl PaymentMethod {
    /// All payment methods, in the order they are offered to users
    pub const ALL: [Self; 4] = [Self::CreditCard, Self::Debit, Self::Cash, Self::Transfer];

    /// The user-facing label for this method
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Debit => "Debit",
            Self::Cash => "Cash",
            Self::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = BudgetError;

    /// Parse an exact method label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| BudgetError::UnknownPaymentMethod(s.to_string()))
    }
}
