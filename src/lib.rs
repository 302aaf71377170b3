//! Budget Tracker - personal income/expense tracking with a monthly budget
//!
//! Record income and expense transactions, set a monthly expense limit, and
//! see totals, a three-tier budget status and a per-category chart. All
//! state lives in a small string-keyed store on local disk.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, money, ids, the monthly budget
//! - `storage`: Key-value store and the repository that owns its encoding
//! - `services`: Ledger mutations, aggregation, budget evaluation
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```
//! use budget_tracker::models::{Money, Transaction};
//! use budget_tracker::services::{BudgetService, LedgerService};
//! use budget_tracker::storage::BudgetRepository;
//! use chrono::NaiveDate;
//!
//! let repo = BudgetRepository::in_memory();
//! let ledger = LedgerService::new(&repo);
//! let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! ledger.append(Transaction::income(Money::from_units(1000), day)).unwrap();
//! ledger.append(Transaction::expense(Money::from_units(200), day, "Food")).unwrap();
//!
//! let budget = BudgetService::new(&repo);
//! budget.set_budget(Money::zero(), Money::from_units(500)).unwrap();
//! let overview = budget.overview().unwrap();
//! assert_eq!(overview.summary.savings, Money::from_units(800));
//! assert_eq!(overview.status.label(), "Within Budget");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{BudgetError, BudgetResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// Honors `RUST_LOG`; defaults to warnings from this crate only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budget_tracker=warn"));

        // A subscriber installed by an embedding application wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
