//! Service layer
//!
//! Business logic on top of the repository: validated ledger mutations,
//! aggregation, and budget evaluation.

pub mod budget;
pub mod ledger;
pub mod summary;

pub use budget::{BudgetOverview, BudgetService};
pub use ledger::{CreateTransactionInput, LedgerService, UpdateTransactionInput};
pub use summary::{CategoryTotal, Summary};
