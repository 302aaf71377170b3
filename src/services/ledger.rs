//! Ledger service
//!
//! Validated mutations of the transaction list. Every mutation reads the
//! stored ledger, changes it and writes the whole list back.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::BudgetRepository;

/// Service for ledger management
pub struct LedgerService<'a> {
    repo: &'a BudgetRepository,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: Option<String>,
}

/// Partial update for an existing transaction; `None` keeps the old value
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.amount.is_none() && self.date.is_none() && self.category.is_none()
    }
}

impl<'a> LedgerService<'a> {
    pub fn new(repo: &'a BudgetRepository) -> Self {
        Self { repo }
    }

    /// Record a new transaction at the end of the ledger
    pub fn create(&self, input: CreateTransactionInput) -> BudgetResult<Transaction> {
        let txn = Transaction::new(
            input.kind,
            input.amount,
            input.date,
            input.category.unwrap_or_default(),
        );
        self.append(txn)
    }

    /// Append a transaction, rejecting non-positive amounts
    ///
    /// On a validation failure nothing is written.
    pub fn append(&self, txn: Transaction) -> BudgetResult<Transaction> {
        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let mut ledger = self.repo.load_transactions()?;
        ledger.push(txn.clone());
        self.repo.save_transactions(&ledger)?;

        debug!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "appended transaction");
        Ok(txn)
    }

    /// Remove the transaction at `index`
    pub fn remove_at(&self, index: usize) -> BudgetResult<Transaction> {
        let mut ledger = self.repo.load_transactions()?;
        if index >= ledger.len() {
            return Err(BudgetError::IndexOutOfRange {
                index,
                len: ledger.len(),
            });
        }

        let removed = ledger.remove(index);
        self.repo.save_transactions(&ledger)?;

        debug!(id = %removed.id, index, "removed transaction");
        Ok(removed)
    }

    /// Remove the transaction with `id`
    pub fn remove(&self, id: TransactionId) -> BudgetResult<Transaction> {
        let index = self
            .position(id)?
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;
        self.remove_at(index)
    }

    /// The whole ledger in insertion order
    pub fn all(&self) -> BudgetResult<Vec<Transaction>> {
        self.repo.load_transactions()
    }

    pub fn get(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        Ok(self.all()?.into_iter().find(|t| t.id == id))
    }

    /// Find a transaction by full id or by the short `txn-xxxxxxxx` form
    ///
    /// A fragment that matches more than one transaction is rejected.
    pub fn find(&self, identifier: &str) -> BudgetResult<Option<Transaction>> {
        let mut matches = self
            .all()?
            .into_iter()
            .filter(|t| t.id.matches(identifier));

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(BudgetError::Validation(format!(
                "'{}' matches more than one transaction; use more of the id",
                identifier
            )));
        }
        Ok(first)
    }

    /// Apply `changes` to the transaction with `id`, keeping its position
    ///
    /// The updated record is validated before anything is written, so a
    /// rejected edit leaves the original untouched.
    pub fn edit(
        &self,
        id: TransactionId,
        changes: UpdateTransactionInput,
    ) -> BudgetResult<Transaction> {
        let mut ledger = self.repo.load_transactions()?;
        let index = ledger
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        let mut updated = ledger[index].clone();
        if let Some(kind) = changes.kind {
            updated.kind = kind;
        }
        if let Some(amount) = changes.amount {
            updated.amount = amount;
        }
        if let Some(date) = changes.date {
            updated.date = date;
        }
        if let Some(category) = changes.category {
            updated.category = category.trim().to_string();
        }

        updated
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        ledger[index] = updated.clone();
        self.repo.save_transactions(&ledger)?;

        debug!(id = %updated.id, index, "edited transaction");
        Ok(updated)
    }

    /// Delete every transaction, returning how many were removed
    pub fn clear(&self) -> BudgetResult<usize> {
        let count = self.repo.load_transactions()?.len();
        self.repo.save_transactions(&[])?;
        debug!(count, "cleared ledger");
        Ok(count)
    }

    pub fn count(&self) -> BudgetResult<usize> {
        Ok(self.all()?.len())
    }

    fn position(&self, id: TransactionId) -> BudgetResult<Option<usize>> {
        Ok(self.all()?.iter().position(|t| t.id == id))
    }
}
