//! Report CLI commands
//!
//! Read-only views: totals, the category chart, and the full dashboard.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_category_chart, format_overview, format_summary, format_transaction_register, Painter,
};
use crate::error::BudgetResult;
use crate::services::BudgetService;
use crate::storage::BudgetRepository;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show total income, total expenses and savings
    Summary,
    /// Show income and expenses by category as a bar chart
    Chart,
    /// Show transactions, totals, budget status and chart together
    Dashboard,
}

/// Handle a report command
pub fn handle_report_command(
    repo: &BudgetRepository,
    settings: &Settings,
    painter: &Painter,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let overview = BudgetService::new(repo).overview()?;

    match cmd {
        ReportCommands::Summary => {
            print!("{}", format_summary(&overview.summary, settings));
        }

        ReportCommands::Chart => {
            print!(
                "{}",
                format_category_chart(&overview.summary, settings, painter)
            );
        }

        ReportCommands::Dashboard => {
            print!(
                "{}",
                format_transaction_register(&overview.transactions, settings, painter)
            );
            println!();
            print!("{}", format_overview(&overview, settings, painter));
            println!();
            print!(
                "{}",
                format_category_chart(&overview.summary, settings, painter)
            );
        }
    }

    Ok(())
}
