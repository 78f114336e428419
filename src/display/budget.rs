//! Budget display formatting

use crate::models::Budget;
use crate::reports::band_budget;

use super::truncate;

/// Format budgets as a table with their progress tier
pub fn format_budget_list(budgets: &[Budget], currency_symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:7}  {:<20} {:>12} {:>12} {:>7}  {}\n",
        "ID", "Month", "Category", "Limit", "Spent", "Used", "Progress"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for budget in budgets {
        let progress = band_budget(budget);
        output.push_str(&format!(
            "{:>5}  {:7}  {:<20} {:>12} {:>12} {:>6.1}%  {}\n",
            budget.id.get(),
            budget.month.to_string(),
            truncate(&budget.category, 20),
            budget.monthly_limit.format_with_symbol(currency_symbol),
            budget.spent.format_with_symbol(currency_symbol),
            progress.percentage(),
            progress.tier,
        ));
    }

    output
}

/// Format a single budget with its remaining or overspent amount
pub fn format_budget_details(budget: &Budget, currency_symbol: &str) -> String {
    let progress = band_budget(budget);
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.name));
    output.push_str(&format!("  ID:       {}\n", budget.id));
    output.push_str(&format!("  Category: {}\n", budget.category));
    output.push_str(&format!("  Month:    {}\n", budget.month));
    output.push_str(&format!("  Status:   {}\n", budget.status));
    output.push_str(&format!(
        "  Limit:    {}\n",
        budget.monthly_limit.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Spent:    {} ({:.1}%)\n",
        budget.spent.format_with_symbol(currency_symbol),
        progress.percentage()
    ));
    if !budget.rollover.is_zero() {
        output.push_str(&format!(
            "  Rollover: {}\n",
            budget.rollover.format_with_symbol(currency_symbol)
        ));
    }
    output.push_str(&format!("  {}\n", progress.label(currency_symbol)));
    output.push_str(&format!("  Progress: {}\n", progress.tier));

    if !budget.description.is_empty() {
        output.push_str(&format!("\n  {}\n", budget.description));
    }

    output
}
