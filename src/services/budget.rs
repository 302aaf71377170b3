//! Budget service
//!
//! Stores the monthly budget and evaluates the ledger against it.

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetConfig, BudgetStatus, Money, Transaction};
use crate::storage::BudgetRepository;

use super::summary::Summary;

/// Everything the overview screen shows, computed from one ledger read
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub budget: BudgetConfig,
    pub status: BudgetStatus,
}

/// Service for the monthly budget
pub struct BudgetService<'a> {
    repo: &'a BudgetRepository,
}

impl<'a> BudgetService<'a> {
    pub fn new(repo: &'a BudgetRepository) -> Self {
        Self { repo }
    }

    /// Replace the monthly budget; negative figures are rejected
    pub fn set_budget(&self, monthly_income: Money, monthly_expense: Money) -> BudgetResult<BudgetConfig> {
        let budget = BudgetConfig::new(monthly_income, monthly_expense);
        budget.validate().map_err(BudgetError::Validation)?;

        self.repo.save_budget(&budget)?;
        debug!(income = %monthly_income, expense = %monthly_expense, "budget set");
        Ok(budget)
    }

    /// Drop the monthly budget; both figures read as zero afterwards
    pub fn clear_budget(&self) -> BudgetResult<()> {
        self.repo.clear_budget()
    }

    pub fn get_budget(&self) -> BudgetResult<BudgetConfig> {
        self.repo.load_budget()
    }

    /// Current status of total expenses against the expense ceiling
    pub fn status(&self) -> BudgetResult<BudgetStatus> {
        Ok(self.overview()?.status)
    }

    /// Reload the ledger and budget, aggregate, and evaluate
    pub fn overview(&self) -> BudgetResult<BudgetOverview> {
        let transactions = self.repo.load_transactions()?;
        let budget = self.repo.load_budget()?;
        let summary = Summary::compute(&transactions);
        let status = budget.status_for(summary.total_expenses);

        Ok(BudgetOverview {
            transactions,
            summary,
            budget,
            status,
        })
    }
}
