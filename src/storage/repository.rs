//! Budget repository
//!
//! The only code that knows the store keys and how values are encoded.
//!
//! | key               | value                                     |
//! |-------------------|-------------------------------------------|
//! | `transactions`    | JSON array of `{id, type, amount, date, category}` |
//! | `monthly-income`  | decimal number as a string, e.g. `"500"`  |
//! | `monthly-expense` | decimal number as a string                |
//!
//! Missing or undecodable data never fails a load: the ledger falls back to
//! empty and budget figures fall back to zero. Undecodable data is logged at
//! `warn` so the fallback is visible.

use tracing::{debug, warn};

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetConfig, Money, Transaction};

use super::kv::{FileStore, KeyValueStore, MemoryStore};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const MONTHLY_INCOME_KEY: &str = "monthly-income";
pub const MONTHLY_EXPENSE_KEY: &str = "monthly-expense";

/// Typed access to everything the tracker persists
pub struct BudgetRepository {
    store: Box<dyn KeyValueStore>,
}

impl BudgetRepository {
    /// Wrap an existing store
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Open the file-backed store under `paths`
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        let store = FileStore::open(paths.store_file())?;
        Ok(Self::new(Box::new(store)))
    }

    /// A repository that keeps nothing on disk
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Decode the stored ledger, reporting corrupt data as an error
    pub fn try_load_transactions(&self) -> BudgetResult<Vec<Transaction>> {
        let Some(raw) = self.store.get(TRANSACTIONS_KEY)? else {
            return Ok(Vec::new());
        };

        let parse_error = |e: serde_json::Error| BudgetError::StorageParse {
            key: TRANSACTIONS_KEY.to_string(),
            reason: e.to_string(),
        };

        // A stored `null` is an empty ledger, not corruption
        let entries: Option<Vec<serde_json::Value>> =
            serde_json::from_str(&raw).map_err(parse_error)?;
        let entries = entries.unwrap_or_default();
        let missing_ids = entries.iter().any(|entry| entry.get("id").is_none());

        let transactions = entries
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Transaction>, _>>()
            .map_err(parse_error)?;

        // Ids handed out to older records must survive the next load
        if missing_ids {
            self.save_transactions(&transactions)?;
            debug!(count = transactions.len(), "assigned ids to stored transactions");
        }

        Ok(transactions)
    }

    /// Load the ledger, treating corrupt data as empty
    pub fn load_transactions(&self) -> BudgetResult<Vec<Transaction>> {
        match self.try_load_transactions() {
            Ok(transactions) => Ok(transactions),
            Err(BudgetError::StorageParse { key, reason }) => {
                warn!(%key, %reason, "stored ledger is unreadable, treating it as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Persist the full ledger, replacing what was stored
    pub fn save_transactions(&self, transactions: &[Transaction]) -> BudgetResult<()> {
        let raw = serde_json::to_string(transactions)?;
        self.store.set(TRANSACTIONS_KEY, &raw)?;
        debug!(count = transactions.len(), "saved ledger");
        Ok(())
    }

    /// Load the monthly budget; missing or unreadable figures are zero
    pub fn load_budget(&self) -> BudgetResult<BudgetConfig> {
        Ok(BudgetConfig {
            monthly_income: self.load_amount(MONTHLY_INCOME_KEY)?,
            monthly_expense: self.load_amount(MONTHLY_EXPENSE_KEY)?,
        })
    }

    /// Persist both budget figures
    pub fn save_budget(&self, budget: &BudgetConfig) -> BudgetResult<()> {
        self.store
            .set(MONTHLY_INCOME_KEY, &format_amount(budget.monthly_income))?;
        self.store
            .set(MONTHLY_EXPENSE_KEY, &format_amount(budget.monthly_expense))?;
        debug!(
            income = %budget.monthly_income,
            expense = %budget.monthly_expense,
            "saved budget"
        );
        Ok(())
    }

    /// Forget both budget figures, so they load as zero
    pub fn clear_budget(&self) -> BudgetResult<()> {
        self.store.remove(MONTHLY_INCOME_KEY)?;
        self.store.remove(MONTHLY_EXPENSE_KEY)?;
        debug!("cleared budget");
        Ok(())
    }

    fn load_amount(&self, key: &str) -> BudgetResult<Money> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Money::zero());
        };

        match parse_amount(&raw) {
            Some(amount) => Ok(amount),
            None => {
                warn!(%key, value = %raw, "stored amount is unreadable, using zero");
                Ok(Money::zero())
            }
        }
    }
}

fn parse_amount(raw: &str) -> Option<Money> {
    let value: f64 = raw.trim().parse().ok()?;
    Money::from_decimal(value).ok()
}

/// Shortest decimal form: `500`, `220.5`, `0.05`
fn format_amount(amount: Money) -> String {
    amount.to_decimal().to_string()
}
