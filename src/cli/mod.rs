//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod bill;
pub mod budget;
pub mod category;
pub mod goal;
pub mod report;
pub mod transaction;

use chrono::{Local, NaiveDate};
use std::str::FromStr;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{parse_tags, BudgetMonth, Money};

pub use account::{handle_account_command, AccountCommands};
pub use bill::{handle_bill_command, BillCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

/// Parse a user-entered amount ("12", "12.50", "$12.50")
pub(crate) fn parse_amount(raw: &str, field: &str) -> FintrackResult<Money> {
    Money::parse(raw).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid {} '{}'. Use a format like '100' or '100.00' ({})",
            field, raw, e
        ))
    })
}

/// Parse a `YYYY-MM-DD` date, defaulting to today when absent
pub(crate) fn parse_date_or_today(raw: Option<&str>) -> FintrackResult<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

pub(crate) fn parse_date(raw: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        FintrackError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
    })
}

/// Parse a `YYYY-MM` month, defaulting to the current month when absent
pub(crate) fn parse_month_or_current(raw: Option<&str>) -> FintrackResult<BudgetMonth> {
    match raw {
        Some(raw) => BudgetMonth::parse(raw).map_err(|e| FintrackError::Validation(e.to_string())),
        None => Ok(BudgetMonth::current()),
    }
}

/// Parse a record id, accepting the prefixed display form
pub(crate) fn parse_id<T: FromStr>(raw: &str, entity: &str) -> FintrackResult<T> {
    raw.parse::<T>()
        .map_err(|_| FintrackError::Validation(format!("Invalid {} ID: '{}'", entity, raw)))
}

/// Comma-separated tags from an optional argument
pub(crate) fn tags_arg(raw: Option<&str>) -> Vec<String> {
    raw.map(parse_tags).unwrap_or_default()
}
