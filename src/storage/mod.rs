//! Storage layer for the budget tracker
//!
//! A string-keyed store (JSON file with atomic writes, or in memory) and the
//! repository that owns the encoding of everything kept in it.

pub mod file_io;
pub mod kv;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{
    BudgetRepository, MONTHLY_EXPENSE_KEY, MONTHLY_INCOME_KEY, TRANSACTIONS_KEY,
};
