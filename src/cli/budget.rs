//! Budget CLI commands
//!
//! Budgets are addressed by category name; the category must already exist.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::{format_budget_details, format_budget_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetId, BudgetStatus, NewBudget};
use crate::services::BudgetService;
use crate::storage::RecordClient;

use super::{parse_amount, parse_id, parse_month_or_current};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly limit for a category
    Create {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "400" or "400.00")
        limit: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Display name (defaults to "<category> Budget")
        #[arg(short, long)]
        name: Option<String>,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List budgets
    List {
        /// Only budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show a budget
    Show {
        /// Budget ID
        id: String,
    },
    /// Edit a budget
    Edit {
        /// Budget ID
        id: String,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New monthly limit
        #[arg(short, long)]
        limit: Option<String>,
        /// New month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// New status (planned, pending, completed, overdue)
        #[arg(short, long)]
        status: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Record how much has been spent against a category this month
    Spent {
        /// Category name
        category: String,
        /// Amount spent so far
        amount: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    client: &dyn RecordClient,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let service = BudgetService::new(client);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Create {
            category,
            limit,
            month,
            name,
            description,
        } => {
            let month = parse_month_or_current(month.as_deref())?;
            let mut budget = NewBudget::new(category, month, parse_amount(&limit, "limit")?);
            budget.name = name;
            budget.description = description.unwrap_or_default();

            let created = service.create(&budget)?;
            println!(
                "Created budget: {} ({} for {})",
                created.name,
                created.monthly_limit.format_with_symbol(symbol),
                created.month
            );
            println!("  ID: {}", created.id);
        }

        BudgetCommands::List { month } => {
            let budgets = match month {
                Some(raw) => service.list_for_month(parse_month_or_current(Some(&raw))?)?,
                None => service.list()?,
            };
            print!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Show { id } => {
            let budget = service.get(parse_id::<BudgetId>(&id, "budget")?)?;
            print!("{}", format_budget_details(&budget, symbol));
        }

        BudgetCommands::Edit {
            id,
            category,
            limit,
            month,
            status,
            description,
        } => {
            let existing = service.get(parse_id::<BudgetId>(&id, "budget")?)?;

            let mut changes = NewBudget::from(&existing);

            if let Some(category) = category {
                changes.category = category;
            }
            if let Some(limit) = limit {
                changes.monthly_limit = parse_amount(&limit, "limit")?;
            }
            if let Some(month) = month {
                changes.month = parse_month_or_current(Some(&month))?;
            }
            if let Some(status) = status {
                changes.status = BudgetStatus::parse(&status).ok_or_else(|| {
                    FintrackError::Validation(format!(
                        "Invalid budget status: '{}'. Valid statuses: planned, pending, completed, overdue",
                        status
                    ))
                })?;
            }
            if let Some(description) = description {
                changes.description = description;
            }

            let updated = service.update(existing.id, &changes)?;
            println!("Updated budget: {}", updated.name);
        }

        BudgetCommands::Spent {
            category,
            amount,
            month,
        } => {
            let month = parse_month_or_current(month.as_deref())?;
            let budget = service.update_spent(&category, month, parse_amount(&amount, "amount")?)?;
            print!("{}", format_budget_details(&budget, symbol));
        }

        BudgetCommands::Delete { id } => {
            let deleted = service.delete(parse_id::<BudgetId>(&id, "budget")?)?;
            println!("Deleted budget: {}", deleted.name);
        }
    }

    Ok(())
}
