//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for each entity. Amounts are always
//! rendered with the configured currency symbol.

pub mod account;
pub mod bill;
pub mod budget;
pub mod category;
pub mod goal;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use bill::{format_bill_details, format_bill_list};
pub use budget::{format_budget_details, format_budget_list};
pub use category::format_category_list;
pub use goal::{format_goal_details, format_goal_list};
pub use transaction::{format_transaction_details, format_transaction_register};

/// Shorten `s` to at most `max` characters, marking the cut with "..."
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Width of the widest value, but never narrower than `min`
pub(crate) fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(min).max(min)
}
