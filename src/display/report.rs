//! Totals and budget status formatting

use crossterm::style::Color;

use crate::config::Settings;
use crate::models::{BudgetConfig, BudgetStatus};
use crate::services::{BudgetOverview, Summary};

use super::Painter;

/// Terminal color for a status tier
pub fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::WithinBudget => Color::Green,
        BudgetStatus::ApproachingLimit => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        BudgetStatus::Overspent => Color::Red,
    }
}

/// The three totals, one per line
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    format!(
        "Total Income:   {}\nTotal Expenses: {}\nSavings:        {}\n",
        summary.total_income.format_with_symbol(symbol),
        summary.total_expenses.format_with_symbol(symbol),
        summary.savings.format_with_symbol(symbol)
    )
}

/// `Budget Status: <tier>` in the tier's color
pub fn format_budget_status(status: BudgetStatus, painter: &Painter) -> String {
    format!(
        "Budget Status: {}\n",
        painter.paint(status.label(), status_color(status))
    )
}

/// The configured monthly figures
pub fn format_budget_config(budget: &BudgetConfig, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    format!(
        "Monthly Income:  {}\nMonthly Expense: {}\n",
        budget.monthly_income.format_with_symbol(symbol),
        budget.monthly_expense.format_with_symbol(symbol)
    )
}

/// Totals, budget and status together
pub fn format_overview(overview: &BudgetOverview, settings: &Settings, painter: &Painter) -> String {
    let mut output = String::new();

    output.push_str(&painter.heading("Summary"));
    output.push('\n');
    output.push_str(&format_summary(&overview.summary, settings));
    output.push('\n');
    output.push_str(&painter.heading("Budget"));
    output.push('\n');
    output.push_str(&format_budget_config(&overview.budget, settings));
    output.push_str(&format_budget_status(overview.status, painter));

    output
}
