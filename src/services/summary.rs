//! Ledger aggregation
//!
//! One pass over the ledger producing income/expense totals, savings and
//! per-label sums for the category chart.

use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Sum for one chart label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// "Income" for income, the category for expenses
    pub label: String,
    pub total: Money,
    /// Number of transactions under this label
    pub transaction_count: usize,
}

/// Aggregated view of a ledger
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// `total_income - total_expenses`; negative when spending exceeds income
    pub savings: Money,
    /// Label sums in first-occurrence order
    pub categories: Vec<CategoryTotal>,
}

impl Summary {
    /// Aggregate `transactions`
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for txn in transactions {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expenses += txn.amount;
            }

            let label = txn.chart_label();
            let slot = *index.entry(label).or_insert_with(|| {
                categories.push(CategoryTotal {
                    label: label.to_string(),
                    total: Money::zero(),
                    transaction_count: 0,
                });
                categories.len() - 1
            });
            categories[slot].total += txn.amount;
            categories[slot].transaction_count += 1;
        }

        Self {
            total_income,
            total_expenses,
            savings: total_income - total_expenses,
            categories,
        }
    }

    /// Total for `label`, if any transaction carries it
    pub fn category_total(&self, label: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.total)
    }

    /// Sum over every label (income and expenses together)
    pub fn grand_total(&self) -> Money {
        self.categories.iter().map(|c| c.total).sum()
    }

    /// Share of the grand total held by `category`, in percent
    pub fn percentage(&self, category: &CategoryTotal) -> f64 {
        let grand = self.grand_total();
        if grand.is_zero() {
            0.0
        } else {
            category.total.cents() as f64 / grand.cents() as f64 * 100.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
