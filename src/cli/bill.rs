//! Bill CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::bill::{format_bill_details, format_bill_list};
use crate::error::FintrackResult;
use crate::models::{BillId, NewBill};
use crate::reports::resolve;
use crate::services::BillService;
use crate::storage::RecordClient;

use super::{parse_amount, parse_date, parse_id, tags_arg};

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a bill
    Add {
        /// Bill name
        name: String,
        /// Amount due
        amount: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// List bills with their current status
    List {
        /// Only bills with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show a bill
    Show {
        /// Bill ID
        id: String,
    },
    /// Edit a bill
    Edit {
        /// Bill ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// Replace tags (comma-separated)
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// Mark a bill as paid
    Pay {
        /// Bill ID
        id: String,
    },
    /// Delete a bill
    Delete {
        /// Bill ID
        id: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(
    client: &dyn RecordClient,
    settings: &Settings,
    cmd: BillCommands,
) -> FintrackResult<()> {
    let service = BillService::new(client);
    let symbol = settings.currency_symbol.as_str();
    let today = Local::now().date_naive();

    match cmd {
        BillCommands::Add {
            name,
            amount,
            due,
            tags,
        } => {
            let bill = NewBill::new(name, parse_date(&due)?, parse_amount(&amount, "amount")?)
                .with_tags(tags_arg(tags.as_deref()));
            let created = service.create(&bill)?;
            println!(
                "Added bill: {} ({} due {})",
                created.name,
                created.amount.format_with_symbol(symbol),
                created.due_date.format("%Y-%m-%d")
            );
            println!("  ID: {}", created.id);
        }

        BillCommands::List { tag } => {
            let bills: Vec<_> = service
                .with_status(today)?
                .into_iter()
                .filter(|(bill, _)| tag.as_deref().map_or(true, |t| bill.has_tag(t.trim())))
                .collect();
            print!("{}", format_bill_list(&bills, symbol));
        }

        BillCommands::Show { id } => {
            let bill = service.get(parse_id::<BillId>(&id, "bill")?)?;
            let status = resolve(&bill, today);
            print!("{}", format_bill_details(&bill, status, symbol));
        }

        BillCommands::Edit {
            id,
            name,
            amount,
            due,
            tags,
        } => {
            let existing = service.get(parse_id::<BillId>(&id, "bill")?)?;
            let mut changes = NewBill::from(&existing);
            if let Some(name) = name {
                changes.name = name;
            }
            if let Some(amount) = amount {
                changes.amount = parse_amount(&amount, "amount")?;
            }
            if let Some(due) = due {
                changes.due_date = parse_date(&due)?;
            }
            if tags.is_some() {
                changes.tags = tags_arg(tags.as_deref());
            }

            let updated = service.update(existing.id, &changes)?;
            println!("Updated bill: {}", updated.name);
        }

        BillCommands::Pay { id } => {
            let paid = service.mark_paid(parse_id::<BillId>(&id, "bill")?)?;
            println!("Marked paid: {}", paid.name);
        }

        BillCommands::Delete { id } => {
            let deleted = service.delete(parse_id::<BillId>(&id, "bill")?)?;
            println!("Deleted bill: {}", deleted.name);
        }
    }

    Ok(())
}
