//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_config, format_budget_status, Painter};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::BudgetRepository;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly income and expense limit
    #[command(name = "set-budget")]
    SetBudget {
        /// Expected monthly income (informational)
        #[arg(short, long, default_value = "0")]
        income: String,
        /// Monthly expense limit
        #[arg(short, long)]
        expense: String,
    },
    /// Show the monthly budget and current status
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    repo: &BudgetRepository,
    settings: &Settings,
    painter: &Painter,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let service = BudgetService::new(repo);

    match cmd {
        BudgetCommands::SetBudget { income, expense } => {
            let income: Money = parse_amount(&income, "monthly income")?;
            let expense: Money = parse_amount(&expense, "monthly expense")?;

            service.set_budget(income, expense)?;
            println!("Budget set successfully.");

            let overview = service.overview()?;
            print!("{}", format_budget_config(&overview.budget, settings));
            print!("{}", format_budget_status(overview.status, painter));
        }

        BudgetCommands::Status => {
            let overview = service.overview()?;
            print!("{}", format_budget_config(&overview.budget, settings));
            println!(
                "Spent so far:    {}",
                overview
                    .summary
                    .total_expenses
                    .format_with_symbol(&settings.currency_symbol)
            );
            print!("{}", format_budget_status(overview.status, painter));
        }
    }

    Ok(())
}
