//! Transaction model
//!
//! A single income or expense record. The serialized shape is
//! `{id, type, amount, date, category}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Label every income transaction is grouped under
pub const INCOME_LABEL: &str = "Income";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "unknown transaction type '{}', expected 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable identifier; records written before ids existed get one on load
    #[serde(default)]
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Always positive for a stored transaction
    pub amount: Money,

    pub date: NaiveDate,

    /// Free-text label, only meaningful for expenses
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            date,
            category: category.into().trim().to_string(),
        }
    }

    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, date, "")
    }

    pub fn expense(amount: Money, date: NaiveDate, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, amount, date, category)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The label this transaction is aggregated under
    ///
    /// Income always lands in [`INCOME_LABEL`]; expenses use their category.
    pub fn chart_label(&self) -> &str {
        match self.kind {
            TransactionKind::Income => INCOME_LABEL,
            TransactionKind::Expense => &self.category,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.chart_label(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount must not exceed {} (got {})",
                Money::MAX_AMOUNT,
                amount
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
