//! Monthly budget model

use serde::{Deserialize, Serialize};

use super::Money;

/// Actual spending against the planned budget for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Month label, e.g. "Janeiro"
    pub month: String,

    /// What was actually spent
    pub actual: Money,

    /// What was planned
    pub budget: Money,
}

impl MonthlyBudget {
    pub fn new(month: impl Into<String>, actual: Money, budget: Money) -> Self {
        Self {
            month: month.into(),
            actual,
            budget,
        }
    }

    /// Budget minus actual; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budget - self.actual
    }

    pub fn is_over_budget(&self) -> bool {
        self.actual > self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let under = MonthlyBudget::new("Janeiro", Money::from_reais(5900), Money::from_reais(6000));
        assert_eq!(under.remaining(), Money::from_reais(100));
        assert!(!under.is_over_budget());

        let over = MonthlyBudget::new("Abril", Money::from_reais(6400), Money::from_reais(6000));
        assert_eq!(over.remaining(), Money::from_reais(-400));
        assert!(over.is_over_budget());
    }
}
