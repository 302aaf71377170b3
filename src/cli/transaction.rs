//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register, Painter};
use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionKind;
use crate::services::{CreateTransactionInput, LedgerService, UpdateTransactionInput};
use crate::storage::BudgetRepository;

use super::{parse_amount, parse_date, parse_date_or_today};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// "income" or "expense"
        kind: TransactionKind,
        /// Amount, must be positive (e.g. "200" or "19.99")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category label (used for expenses)
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all transactions in the order they were recorded
    #[command(alias = "ls")]
    List,
    /// Show transaction details
    Show {
        /// Transaction ID (full or short form)
        id: String,
    },
    /// Change fields of a transaction in place
    Edit {
        /// Transaction ID (full or short form)
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionKind>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (full or short form)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    repo: &BudgetRepository,
    settings: &Settings,
    painter: &Painter,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let service = LedgerService::new(repo);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount, "amount")?;
            let date = parse_date_or_today(date.as_deref())?;

            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                date,
                category,
            })?;

            println!("Transaction added successfully.");
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::List => {
            let transactions = service.all()?;
            print!(
                "{}",
                format_transaction_register(&transactions, settings, painter)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| BudgetError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
        } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| BudgetError::transaction_not_found(&id))?;

            let changes = UpdateTransactionInput {
                kind,
                amount: amount.map(|a| parse_amount(&a, "amount")).transpose()?,
                date: date.map(|d| parse_date(&d)).transpose()?,
                category,
            };

            if changes.is_empty() {
                println!("No changes specified. Use --type, --amount, --category, or --date.");
                return Ok(());
            }

            let updated = service.edit(txn.id, changes)?;
            println!("Transaction updated successfully.");
            print!("{}", format_transaction_details(&updated, settings));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| BudgetError::transaction_not_found(&id))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            service.remove(txn.id)?;
            println!("Transaction deleted successfully.");
        }
    }

    Ok(())
}
