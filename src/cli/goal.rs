//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{GoalPriority, NewSavingsGoal, SavingsGoalId};
use crate::services::SavingsGoalService;
use crate::storage::RecordClient;

use super::{parse_amount, parse_date, parse_id, tags_arg};

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Create {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: String,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List goals by priority
    List,
    /// Show a goal
    Show {
        /// Goal ID
        id: String,
    },
    /// Put money toward a goal
    Contribute {
        /// Goal ID
        id: String,
        /// Amount to add
        amount: String,
    },
    /// Edit a goal
    Edit {
        /// Goal ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// New deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// Remove the deadline
        #[arg(long, conflicts_with = "deadline")]
        no_deadline: bool,
        /// New priority
        #[arg(short, long)]
        priority: Option<String>,
        /// Replace tags (comma-separated)
        #[arg(short, long)]
        tags: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

fn parse_priority(raw: &str) -> FintrackResult<GoalPriority> {
    GoalPriority::parse(raw).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid priority: '{}'. Use high, medium or low",
            raw
        ))
    })
}

/// Handle a savings goal command
pub fn handle_goal_command(
    client: &dyn RecordClient,
    settings: &Settings,
    cmd: GoalCommands,
) -> FintrackResult<()> {
    let service = SavingsGoalService::new(client);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Create {
            name,
            target,
            deadline,
            priority,
            tags,
            note,
        } => {
            let mut goal = NewSavingsGoal::new(name, parse_amount(&target, "target")?);
            goal.deadline = deadline.as_deref().map(parse_date).transpose()?;
            goal.priority = parse_priority(&priority)?;
            goal.tags = tags_arg(tags.as_deref());
            goal.note = note.unwrap_or_default();

            let created = service.create(&goal)?;
            println!(
                "Created goal: {} (target {})",
                created.name,
                created.target_amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", created.id);
        }

        GoalCommands::List => {
            let goals = service.list()?;
            print!("{}", format_goal_list(&goals, symbol));
        }

        GoalCommands::Show { id } => {
            let goal = service.get(parse_id::<SavingsGoalId>(&id, "goal")?)?;
            print!("{}", format_goal_details(&goal, symbol));
        }

        GoalCommands::Contribute { id, amount } => {
            let amount = parse_amount(&amount, "amount")?;
            let goal = service.add_contribution(parse_id::<SavingsGoalId>(&id, "goal")?, amount)?;
            println!(
                "Added {} to {}: {} of {} ({:.1}%)",
                amount.format_with_symbol(symbol),
                goal.name,
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                goal.progress()
            );
            if goal.is_completed() {
                println!("Goal reached!");
            }
        }

        GoalCommands::Edit {
            id,
            name,
            target,
            deadline,
            no_deadline,
            priority,
            tags,
            note,
        } => {
            let existing = service.get(parse_id::<SavingsGoalId>(&id, "goal")?)?;
            let mut changes = NewSavingsGoal::from(&existing);
            if let Some(name) = name {
                changes.name = name;
            }
            if let Some(target) = target {
                changes.target_amount = parse_amount(&target, "target")?;
            }
            if no_deadline {
                changes.deadline = None;
            } else if let Some(deadline) = deadline {
                changes.deadline = Some(parse_date(&deadline)?);
            }
            if let Some(priority) = priority {
                changes.priority = parse_priority(&priority)?;
            }
            if tags.is_some() {
                changes.tags = tags_arg(tags.as_deref());
            }
            if let Some(note) = note {
                changes.note = note;
            }

            let updated = service.update(existing.id, &changes)?;
            println!("Updated goal: {}", updated.name);
        }

        GoalCommands::Delete { id } => {
            let deleted = service.delete(parse_id::<SavingsGoalId>(&id, "goal")?)?;
            println!("Deleted goal: {}", deleted.name);
        }
    }

    Ok(())
}
