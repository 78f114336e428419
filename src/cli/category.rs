//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::FintrackResult;
use crate::models::NewCategory;
use crate::services::CategoryService;
use crate::storage::RecordClient;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,
    /// Create a custom category
    Create {
        /// Category name
        name: String,
        /// Color (e.g. "#4ECDC4")
        #[arg(long)]
        color: Option<String>,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
    },
    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color
        #[arg(long)]
        color: Option<String>,
        /// New icon
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(client: &dyn RecordClient, cmd: CategoryCommands) -> FintrackResult<()> {
    let service = CategoryService::new(client);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Create { name, color, icon } => {
            let mut category = NewCategory::custom(name);
            if let Some(color) = color {
                category.color = color;
            }
            if let Some(icon) = icon {
                category.icon = icon;
            }
            let created = service.create(&category)?;
            println!("Created category: {}", created.name);
            println!("  ID: {}", created.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
            icon,
        } => {
            let found = service.find(&category)?;
            if name.is_none() && color.is_none() && icon.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let changes = NewCategory {
                name: name.unwrap_or_else(|| found.name.clone()),
                color: color.unwrap_or_else(|| found.color.clone()),
                icon: icon.unwrap_or_else(|| found.icon.clone()),
                is_custom: found.is_custom,
            };
            let updated = service.update(found.id, &changes)?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let found = service.find(&category)?;
            let deleted = service.delete(found.id)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
