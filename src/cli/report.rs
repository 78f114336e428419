//! CLI commands for reports
//!
//! Each report fetches what it needs through the services and hands the
//! snapshot to the aggregation layer for totals.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FintrackResult;
use crate::services::{
    AccountService, BillService, BudgetService, SavingsGoalService, TransactionService,
};
use crate::storage::RecordClient;

use super::parse_month_or_current;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Balances held and debt owed across all accounts
    Accounts,

    /// Budgeted vs spent for one month
    Budget {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Bills by status with outstanding totals
    Bills,

    /// Savings progress across all goals
    Goals,

    /// Income, expense and net per month
    #[command(alias = "trend")]
    CashFlow {
        /// Number of months ending with --month
        #[arg(short = 'n', long, default_value = "6")]
        months: usize,
        /// Last month of the range (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Expenses per category for one month
    #[command(alias = "categories")]
    Spending {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Every summary at once
    Overview,
}

/// Handle report commands
pub fn handle_report_command(
    client: &dyn RecordClient,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Accounts => {
            let summary = AccountService::new(client).summary()?;
            print!("{}", summary.format_terminal(symbol));
        }

        ReportCommands::Budget { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let (summary, budgets) = BudgetService::new(client).summary(month)?;
            print!("{}", summary.format_terminal(&budgets, symbol));
        }

        ReportCommands::Bills => {
            let counts = BillService::new(client).status_counts(Local::now().date_naive())?;
            print!("{}", counts.format_terminal(symbol));
        }

        ReportCommands::Goals => {
            let summary = SavingsGoalService::new(client).summary()?;
            print!("{}", summary.format_terminal(symbol));
        }

        ReportCommands::CashFlow { months, month } => {
            let last = parse_month_or_current(month.as_deref())?;
            let range = last.trailing(months.max(1));
            let trend = TransactionService::new(client).income_expense_trend(&range)?;
            print!("{}", trend.format_terminal(symbol));
        }

        ReportCommands::Spending { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let breakdown = TransactionService::new(client).category_breakdown(month)?;
            println!("Spending - {}", month);
            print!("{}", breakdown.format_terminal(symbol));
        }

        ReportCommands::Overview => {
            let month = parse_month_or_current(None)?;
            let today = Local::now().date_naive();

            print!("{}", AccountService::new(client).summary()?.format_terminal(symbol));
            println!();
            let (budget_summary, budgets) = BudgetService::new(client).summary(month)?;
            print!("{}", budget_summary.format_terminal(&budgets, symbol));
            println!();
            print!(
                "{}",
                BillService::new(client).status_counts(today)?.format_terminal(symbol)
            );
            println!();
            print!(
                "{}",
                SavingsGoalService::new(client).summary()?.format_terminal(symbol)
            );
        }
    }

    Ok(())
}
