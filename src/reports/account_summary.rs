//! Account totals
//!
//! Held funds and debt are summed separately and never netted against each
//! other; `net_worth` exists for display only.

use crate::models::{Account, Money};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSummary {
    /// Sum of balances >= 0
    pub total_balance: Money,
    /// Absolute sum of balances < 0
    pub total_debt: Money,
    pub total_accounts: usize,
    pub active_accounts: usize,
}

impl AccountSummary {
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let mut summary = Self::default();
        for account in accounts {
            if account.balance.is_negative() {
                summary.total_debt += account.balance.abs();
            } else {
                summary.total_balance += account.balance;
            }
            summary.total_accounts += 1;
            if account.is_active {
                summary.active_accounts += 1;
            }
        }
        summary
    }

    pub fn net_worth(&self) -> Money {
        self.total_balance - self.total_debt
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Accounts\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Balance: {:>15}\n",
            self.total_balance.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Total Debt:    {:>15}\n",
            self.total_debt.format_with_symbol(currency_symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Net Worth:     {:>15}\n",
            self.net_worth().format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Accounts:      {:>15}\n",
            format!("{} ({} active)", self.total_accounts, self.active_accounts)
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, AccountType, NewAccount};

    fn account(id: i64, balance: i64, active: bool) -> Account {
        let mut new = NewAccount::new(format!("Account {}", id), AccountType::Checking)
            .with_balance(Money::from_units(balance));
        new.is_active = active;
        new.into_account(AccountId::new(id))
    }

    #[test]
    fn test_balance_and_debt_are_not_netted() {
        let accounts = vec![
            account(1, 500, true),
            account(2, -200, true),
            account(3, -50, false),
            account(4, 1000, true),
        ];
        let summary = AccountSummary::from_accounts(&accounts);

        assert_eq!(summary.total_balance, Money::from_units(1500));
        assert_eq!(summary.total_debt, Money::from_units(250));
        assert_eq!(summary.net_worth(), Money::from_units(1250));
        assert_eq!(summary.total_accounts, 4);
        assert_eq!(summary.active_accounts, 3);
    }

    #[test]
    fn test_empty() {
        let summary = AccountSummary::from_accounts(&[]);
        assert_eq!(summary, AccountSummary::default());
        assert!(summary.format_terminal("$").contains("$0.00"));
    }
}
