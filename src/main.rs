use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use fintrack::cli::{
    handle_account_command, handle_bill_command, handle_budget_command, handle_category_command,
    handle_goal_command, handle_report_command, handle_transaction_command,
};
use fintrack::config::{init_tracing, FintrackPaths, Settings};
use fintrack::services::CategoryService;
use fintrack::storage::LocalRecordStore;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance tracking from the command line",
    long_about = "fintrack keeps accounts, budgets, bills, transactions and savings \
                  goals in a record store and summarizes where your money stands."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(fintrack::cli::AccountCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Bill tracking commands
    #[command(subcommand)]
    Bill(fintrack::cli::BillCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(fintrack::cli::GoalCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),

    /// Summaries and reports
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Create the settings file and default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let store = LocalRecordStore::open(settings.store_path(&paths))?;

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&store, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&store, &settings, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill_command(&store, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&store, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&store, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&store, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, cmd)?,
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
                println!("Created settings: {}", paths.settings_file().display());
            }

            let created = CategoryService::new(&store).seed_defaults()?;
            info!(created = created.len(), "initialized");
            if created.is_empty() {
                println!("Default categories already present.");
            } else {
                println!("Created {} default categories:", created.len());
                for category in &created {
                    println!("  {}", category.name);
                }
            }
            println!("Record store: {}", settings.store_path(&paths).display());
        }
        Some(Commands::Config) => {
            println!("Configuration");
            println!("=============");
            println!();
            println!("Paths:");
            println!("  Base:     {}", paths.base_dir().display());
            println!("  Settings: {}", paths.settings_file().display());
            println!("  Store:    {}", settings.store_path(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency:    {}", settings.currency_symbol);
            println!("  Date format: {}", settings.date_format);
            println!("  Log filter:  {}", settings.log_filter);
            println!(
                "  Initialized: {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
        }
        None => {
            println!("fintrack - personal finance tracking");
            println!();
            println!("Run 'fintrack init' to get started, or 'fintrack --help' for usage.");
        }
    }

    Ok(())
}
