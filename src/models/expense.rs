//! Expense category model
//!
//! A named expense bucket with a monetary amount and an optional display color.

use serde::{Deserialize, Serialize};

use super::Money;

/// A named expense bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Category label shown in legends and tooltips
    pub category: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Explicit hex color; palette fallback when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ExpenseCategory {
    /// Create a category without an explicit color
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
            color: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount {
                category: self.category.clone(),
                amount: self.amount,
            });
        }
        Ok(())
    }
}

/// Validation errors for expense categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount { category: String, amount: Money },
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount { category, amount } => {
                write!(f, "category '{}' has a negative amount ({})", category, amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let cat = ExpenseCategory::new("Moradia", Money::from_reais(2500)).with_color("#FFCE56");
        assert_eq!(cat.category, "Moradia");
        assert_eq!(cat.color.as_deref(), Some("#FFCE56"));
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let cat = ExpenseCategory::new("Outros", Money::from_reais(-1));
        let err = cat.validate().unwrap_err();
        assert!(err.to_string().contains("Outros"));
    }

    #[test]
    fn test_color_is_optional_in_json() {
        let cat: ExpenseCategory =
            serde_json::from_str(r#"{"category": "Saúde", "amount": 600}"#).unwrap();
        assert_eq!(cat.amount, Money::from_reais(600));
        assert!(cat.color.is_none());
        assert!(!serde_json::to_string(&cat).unwrap().contains("color"));
    }
}
