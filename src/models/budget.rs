//! Monthly budget model
//!
//! The configured income/expense figures and the three-tier status derived
//! from comparing actual expenses to the expense ceiling.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Monthly budget figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Expected monthly income; informational only
    pub monthly_income: Money,

    /// Expense ceiling used for status evaluation
    pub monthly_expense: Money,
}

impl BudgetConfig {
    pub fn new(monthly_income: Money, monthly_expense: Money) -> Self {
        Self {
            monthly_income,
            monthly_expense,
        }
    }

    /// Both figures must be non-negative and at most [`Money::MAX_AMOUNT`]
    pub fn validate(&self) -> Result<(), String> {
        if self.monthly_income.is_negative() || self.monthly_expense.is_negative() {
            return Err("Monthly Income and Expense must not be negative".into());
        }
        if self.monthly_income > Money::MAX_AMOUNT || self.monthly_expense > Money::MAX_AMOUNT {
            return Err(format!(
                "Monthly Income and Expense must not exceed {}",
                Money::MAX_AMOUNT
            ));
        }
        Ok(())
    }

    /// Status of `total_expenses` against this budget's ceiling
    pub fn status_for(&self, total_expenses: Money) -> BudgetStatus {
        BudgetStatus::evaluate(total_expenses, self.monthly_expense)
    }
}

/// Budget status tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    WithinBudget,
    ApproachingLimit,
    Overspent,
}

impl BudgetStatus {
    /// Classify `total_expenses` against `limit`
    ///
    /// Overspent above the limit, ApproachingLimit above 80% of it (up to and
    /// including the limit), WithinBudget otherwise. Compared in hundredths as
    /// `expenses * 10 > limit * 8` so the 80% line is exact.
    pub fn evaluate(total_expenses: Money, limit: Money) -> Self {
        let expenses = i128::from(total_expenses.cents());
        let limit = i128::from(limit.cents());

        if expenses > limit {
            Self::Overspent
        } else if expenses * 10 > limit * 8 {
            Self::ApproachingLimit
        } else {
            Self::WithinBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WithinBudget => "Within Budget",
            Self::ApproachingLimit => "Approaching Limit",
            Self::Overspent => "Overspent",
        }
    }

    /// Display color name
    pub fn color_name(&self) -> &'static str {
        match self {
            Self::WithinBudget => "green",
            Self::ApproachingLimit => "orange",
            Self::Overspent => "red",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
