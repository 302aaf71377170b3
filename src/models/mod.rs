//! Core data models
//!
//! Transactions, money amounts, ids and the monthly budget.

pub mod budget;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{BudgetConfig, BudgetStatus};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError, INCOME_LABEL};
