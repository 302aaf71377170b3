//! Transaction display formatting

use crate::config::Settings;
use crate::models::Transaction;

use super::{fit, Painter};

fn category_cell(txn: &Transaction) -> &str {
    if txn.category.is_empty() {
        "-"
    } else {
        &txn.category
    }
}

/// Format one register row
pub fn format_transaction_row(
    position: usize,
    txn: &Transaction,
    settings: &Settings,
    painter: &Painter,
) -> String {
    format!(
        "{:>3}  {}  {}  {}  {:>14}  {}",
        position,
        painter.muted(&txn.id.short()),
        fit(&settings.format_date(txn.date), 10),
        fit(category_cell(txn), 18),
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.kind
    )
}

/// Format the ledger as a register, numbered from 1
pub fn format_transaction_register(
    transactions: &[Transaction],
    settings: &Settings,
    painter: &Painter,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&painter.heading(&format!(
        "{:>3}  {:12}  {:10}  {:18}  {:>14}  {}",
        "#", "ID", "Date", "Category", "Amount", "Type"
    )));
    output.push('\n');
    output.push_str(&painter.muted(&"-".repeat(72)));
    output.push('\n');

    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, settings, painter));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Date:        {}\n", settings.format_date(txn.date)));
    output.push_str(&format!("Category:    {}\n", category_cell(txn)));

    output
}
