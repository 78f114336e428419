//! Bill display formatting
//!
//! Bills are always shown with their effective status, never the stored one.

use crate::models::Bill;
use crate::reports::EffectiveBillStatus;

use super::{column_width, truncate};

/// Format bills paired with their effective status as a table
pub fn format_bill_list(bills: &[(Bill, EffectiveBillStatus)], currency_symbol: &str) -> String {
    if bills.is_empty() {
        return "No bills found.\n".to_string();
    }

    let name_width = column_width(bills.iter().map(|(b, _)| b.name.as_str()), 4).min(30);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<name_width$}  {:10}  {:>12}  {:8}  {}\n",
        "ID",
        "Name",
        "Due",
        "Amount",
        "Status",
        "Tags",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->5}  {:-<name_width$}  {:-<10}  {:->12}  {:-<8}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (bill, status) in bills {
        let marker = match status {
            EffectiveBillStatus::Overdue => "!",
            _ => "",
        };
        output.push_str(&format!(
            "{:>5}  {:<name_width$}  {:10}  {:>12}  {:8}  {}\n",
            bill.id.get(),
            truncate(&bill.name, name_width),
            bill.due_date.format("%Y-%m-%d").to_string(),
            bill.amount.format_with_symbol(currency_symbol),
            format!("{}{}", status, marker),
            bill.tags.join(", "),
            name_width = name_width,
        ));
    }

    output
}

pub fn format_bill_details(bill: &Bill, status: EffectiveBillStatus, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Bill: {}\n", bill.name));
    output.push_str(&format!("  ID:     {}\n", bill.id));
    output.push_str(&format!("  Due:    {}\n", bill.due_date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "  Amount: {}\n",
        bill.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Status: {}\n", status));
    if !bill.tags.is_empty() {
        output.push_str(&format!("  Tags:   {}\n", bill.tags.join(", ")));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillId, BillStatus, Money};
    use chrono::NaiveDate;

    fn bill(name: &str) -> Bill {
        Bill {
            id: BillId::new(1),
            name: name.into(),
            tags: vec!["home".into(), "monthly".into()],
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            amount: Money::from_units(1200),
            status: BillStatus::Unpaid,
        }
    }

    #[test]
    fn test_list_shows_effective_status() {
        let output = format_bill_list(&[(bill("Rent"), EffectiveBillStatus::Overdue)], "$");
        assert!(output.contains("Rent"));
        assert!(output.contains("Overdue!"));
        assert!(output.contains("$1200.00"));
        assert!(output.contains("home, monthly"));
    }

    #[test]
    fn test_details() {
        let output = format_bill_details(&bill("Rent"), EffectiveBillStatus::Paid, "$");
        assert!(output.contains("Status: Paid"));
        assert!(output.contains("2025-06-01"));
    }
}
