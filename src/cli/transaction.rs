//! Transaction CLI commands
//!
//! Implements CLI commands for recording income and expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{NewTransaction, TransactionId, TransactionKind};
use crate::services::TransactionService;
use crate::storage::RecordClient;

use super::{parse_amount, parse_date, parse_date_or_today, parse_id, parse_month_or_current};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Amount (always positive; use --kind to set direction)
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show a transaction
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New kind (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

fn parse_kind(raw: &str) -> FintrackResult<TransactionKind> {
    TransactionKind::parse(raw).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid transaction type: '{}'. Use income or expense",
            raw
        ))
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(
    client: &dyn RecordClient,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(client);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            date,
            description,
            notes,
        } => {
            let mut txn = NewTransaction::new(
                parse_kind(&kind)?,
                parse_amount(&amount, "amount")?,
                parse_date_or_today(date.as_deref())?,
                category,
            );
            if let Some(description) = description {
                txn = txn.with_description(description);
            }
            txn.notes = notes.unwrap_or_default();

            let created = service.create(&txn)?;
            println!(
                "Recorded {}: {} in {} on {}",
                created.kind.as_wire(),
                created.amount.format_with_symbol(symbol),
                created.category,
                created.date.format("%Y-%m-%d")
            );
            println!("  ID: {}", created.id);
        }

        TransactionCommands::List {
            month,
            category,
            limit,
        } => {
            let mut transactions = match (month, category) {
                (Some(month), category) => {
                    let month = parse_month_or_current(Some(&month))?;
                    let mut in_month = service.list_for_month(month)?;
                    if let Some(category) = category {
                        in_month.retain(|t| t.category == category.trim());
                    }
                    in_month
                }
                (None, Some(category)) => service.list_for_category(&category)?,
                (None, None) => service.list()?,
            };
            transactions.truncate(limit);
            print!("{}", format_transaction_register(&transactions, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(parse_id::<TransactionId>(&id, "transaction")?)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
            description,
            notes,
        } => {
            let existing = service.get(parse_id::<TransactionId>(&id, "transaction")?)?;
            let mut changes = NewTransaction::from(&existing);
            if let Some(amount) = amount {
                changes.amount = parse_amount(&amount, "amount")?;
            }
            if let Some(category) = category {
                changes.category = category;
            }
            if let Some(kind) = kind {
                changes.kind = parse_kind(&kind)?;
            }
            if let Some(date) = date {
                changes.date = parse_date(&date)?;
            }
            if let Some(description) = description {
                changes.description = description;
            }
            if let Some(notes) = notes {
                changes.notes = notes;
            }

            let updated = service.update(existing.id, &changes)?;
            println!("Updated transaction: {}", updated.id);
        }

        TransactionCommands::Delete { id } => {
            let deleted = service.delete(parse_id::<TransactionId>(&id, "transaction")?)?;
            println!(
                "Deleted transaction: {} ({})",
                deleted.name,
                deleted.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
