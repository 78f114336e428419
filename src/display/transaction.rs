//! Transaction display formatting
//!
//! Register view and detail view. Expenses are shown as outflows (negative).

use crate::models::{Money, Transaction};

use super::truncate;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    format!(
        "{:>5}  {}  {:<24} {:<16} {:>12}",
        txn.id.get(),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.name, 24),
        truncate(&txn.category, 16),
        txn.signed_amount().format_with_symbol(currency_symbol),
    )
}

/// Format a list of transactions as a register with a net total
pub fn format_transaction_register(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:10}  {:<24} {:<16} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(75));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
    }

    let net: Money = transactions.iter().map(|t| t.signed_amount()).sum();
    output.push_str(&"-".repeat(75));
    output.push('\n');
    output.push_str(&format!(
        "{:>5}  {:10}  {:<24} {:<16} {:>12}\n",
        "",
        "",
        format!("{} transactions", transactions.len()),
        "Net",
        net.format_with_symbol(currency_symbol)
    ));

    output
}

pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    if !txn.notes.is_empty() {
        output.push_str(&format!("Notes:       {}\n", txn.notes));
    }

    output
}
