//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

use super::column_width;

/// Format a list of accounts as a table with a totals row
pub fn format_account_list(accounts: &[Account], currency_symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = column_width(accounts.iter().map(|a| a.name.as_str()), 4);
    let type_width = 10;

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<name_width$}  {:<type_width$}  {:>14}  {}\n",
        "ID",
        "Name",
        "Type",
        "Balance",
        "Status",
        name_width = name_width,
        type_width = type_width,
    ));
    output.push_str(&format!(
        "{:->5}  {:-<name_width$}  {:-<type_width$}  {:->14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    for account in accounts {
        let status = if !account.is_active {
            "Inactive"
        } else if account.owes() {
            "Owed"
        } else {
            ""
        };

        output.push_str(&format!(
            "{:>5}  {:<name_width$}  {:<type_width$}  {:>14}  {}\n",
            account.id.get(),
            account.name,
            account.account_type,
            account.balance.format_with_symbol(currency_symbol),
            status,
            name_width = name_width,
            type_width = type_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:>5}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "",
        "TOTAL",
        "",
        total.format_with_symbol(currency_symbol),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:              {}\n", account.id));
    output.push_str(&format!("  Type:            {}\n", account.account_type));
    output.push_str(&format!(
        "  Balance:         {}\n",
        account.balance.format_with_symbol(currency_symbol)
    ));
    if account.account_type.is_liability() && account.owes() {
        output.push_str(&format!(
            "  Owed:            {}\n",
            account.balance.abs().format_with_symbol(currency_symbol)
        ));
    }
    if !account.institution.is_empty() {
        output.push_str(&format!("  Institution:     {}\n", account.institution));
    }
    output.push_str(&format!("  Interest Rate:   {:.2}%\n", account.interest_rate));
    output.push_str(&format!(
        "  Minimum Balance: {}\n",
        account.minimum_balance.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Active:          {}\n",
        if account.is_active { "Yes" } else { "No" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, AccountType, NewAccount};

    fn account(id: i64, name: &str, account_type: AccountType, cents: i64) -> Account {
        NewAccount::new(name, account_type)
            .with_balance(Money::from_cents(cents))
            .into_account(AccountId::new(id))
    }

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            account(1, "Checking", AccountType::Checking, 100_000),
            account(2, "Visa", AccountType::Credit, -25_000),
        ];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains("Checking"));
        assert!(output.contains("Visa"));
        assert!(output.contains("-$250.00"));
        assert!(output.contains("Owed"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$750.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_account_list(&[], "$").contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details() {
        let output = format_account_details(&account(3, "Visa", AccountType::Credit, -5_000), "€");
        assert!(output.contains("Account: Visa"));
        assert!(output.contains("-€50.00"));
        assert!(output.lines().any(|l| l.trim_start().starts_with("Owed:") && l.ends_with(" €50.00")));
    }
}
