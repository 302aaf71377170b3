//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each handler runs
//! one user intent to completion and prints the refreshed state.

pub mod budget;
pub mod report;
pub mod transaction;

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str, what: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|_| {
        BudgetError::Validation(format!(
            "Invalid {}: '{}'. Use a number like '200' or '19.99'",
            what, input
        ))
    })
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a date, defaulting to today
pub(crate) fn parse_date_or_today(input: Option<&str>) -> BudgetResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
