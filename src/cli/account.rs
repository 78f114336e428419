//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{AccountType, NewAccount};
use crate::services::AccountService;
use crate::storage::RecordClient;

use super::parse_amount;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (checking, savings, investment, credit)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Current balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
        /// Bank or card issuer
        #[arg(short, long)]
        institution: Option<String>,
        /// Interest rate in percent
        #[arg(long, default_value_t = 0.0)]
        interest_rate: f64,
        /// Minimum balance to keep in the account
        #[arg(long, default_value = "0")]
        minimum_balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Edit an account
    Edit {
        /// Account name or ID
        account: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New balance
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<String>,
        /// New institution
        #[arg(short, long)]
        institution: Option<String>,
        /// New interest rate in percent
        #[arg(long)]
        interest_rate: Option<f64>,
        /// Mark the account inactive
        #[arg(long, conflicts_with = "activate")]
        deactivate: bool,
        /// Mark the account active
        #[arg(long)]
        activate: bool,
    },
    /// Delete an account
    Delete {
        /// Account name or ID
        account: String,
    },
}

fn parse_account_type(raw: &str) -> FintrackResult<AccountType> {
    AccountType::parse(raw).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid account type: '{}'. Valid types: checking, savings, investment, credit",
            raw
        ))
    })
}

/// Handle an account command
pub fn handle_account_command(
    client: &dyn RecordClient,
    settings: &Settings,
    cmd: AccountCommands,
) -> FintrackResult<()> {
    let service = AccountService::new(client);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create {
            name,
            account_type,
            balance,
            institution,
            interest_rate,
            minimum_balance,
        } => {
            let account_type = parse_account_type(&account_type)?;
            let mut balance = parse_amount(&balance, "balance")?;

            // Debt on a credit account is stored as a negative balance; users
            // naturally type it as a positive number.
            if account_type.is_liability() && balance.is_positive() {
                balance = -balance;
            }

            let mut new_account = NewAccount::new(name, account_type).with_balance(balance);
            new_account.institution = institution.unwrap_or_default();
            new_account.interest_rate = interest_rate;
            new_account.minimum_balance = parse_amount(&minimum_balance, "minimum balance")?;

            let account = service.create(&new_account)?;
            println!("Created account: {}", account.name);
            println!("  Type: {}", account.account_type);
            println!("  Balance: {}", account.balance.format_with_symbol(symbol));
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            print!("{}", format_account_list(&accounts, symbol));
        }

        AccountCommands::Show { account } => {
            let found = service.find(&account)?;
            print!("{}", format_account_details(&found, symbol));
        }

        AccountCommands::Edit {
            account,
            name,
            balance,
            institution,
            interest_rate,
            deactivate,
            activate,
        } => {
            let found = service.find(&account)?;

            if name.is_none()
                && balance.is_none()
                && institution.is_none()
                && interest_rate.is_none()
                && !deactivate
                && !activate
            {
                println!("No changes specified.");
                return Ok(());
            }

            let mut changes = NewAccount::from(&found);
            if let Some(name) = name {
                changes.name = name;
            }
            if let Some(balance) = balance {
                changes.balance = parse_amount(&balance, "balance")?;
            }
            if let Some(institution) = institution {
                changes.institution = institution;
            }
            if let Some(rate) = interest_rate {
                changes.interest_rate = rate;
            }
            if deactivate {
                changes.is_active = false;
            } else if activate {
                changes.is_active = true;
            }

            let updated = service.update(found.id, &changes)?;
            println!("Updated account: {}", updated.name);
        }

        AccountCommands::Delete { account } => {
            let found = service.find(&account)?;
            let deleted = service.delete(found.id)?;
            println!("Deleted account: {}", deleted.name);
        }
    }

    Ok(())
}
