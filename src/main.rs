use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::display::Painter;
use budget_tracker::services::{BudgetService, LedgerService};
use budget_tracker::storage::BudgetRepository;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income and expenses against a monthly budget",
    long_about = "Record income and expense transactions, set a monthly expense \
                  limit, and see your totals, budget status and spending by \
                  category from the command line."
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Budget(BudgetCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Toggle between light and dark display mode
    Theme,

    /// Delete all transactions and the monthly budget
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    budget_tracker::init_tracing();
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let repo = BudgetRepository::open(&paths)?;

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let painter = Painter::new(color, settings.theme);

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&repo, &settings, &painter, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&repo, &settings, &painter, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&repo, &settings, &painter, cmd)?;
        }
        Some(Commands::Theme) => {
            let theme = settings.toggle_theme();
            settings.save(&paths)?;
            println!("Display mode: {}", theme);
        }
        Some(Commands::Reset { force }) => {
            let ledger = LedgerService::new(&repo);
            if !force {
                println!(
                    "This will delete {} transaction(s) and the monthly budget.",
                    ledger.count()?
                );
                println!("Use --force to confirm reset");
                return Ok(());
            }
            let removed = ledger.clear()?;
            BudgetService::new(&repo).clear_budget()?;
            println!("Deleted {} transaction(s) and cleared the budget.", removed);
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Store file:       {}", paths.store_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Display mode:    {}", settings.theme);
        }
        None => {
            handle_report_command(&repo, &settings, &painter, ReportCommands::Dashboard)?;
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
