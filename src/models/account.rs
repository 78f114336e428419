//! Account model
//!
//! Represents financial accounts (checking, savings, investment, credit).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::validation::{check_name, check_non_negative, ValidationError};

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Investment,
    /// Credit card; a negative balance is money owed
    Credit,
}

impl AccountType {
    /// Returns true if a negative balance on this type is normal (debt owed)
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "investment" => Some(Self::Investment),
            "credit" | "credit_card" | "creditcard" | "card" => Some(Self::Credit),
            _ => None,
        }
    }

    /// The value stored in the record service
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::Credit => "credit",
        }
    }

    pub fn all() -> &'static [AccountType] {
        &[Self::Checking, Self::Savings, Self::Investment, Self::Credit]
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Investment => "Investment",
            Self::Credit => "Credit",
        };
        f.pad(label)
    }
}

/// A financial account as stored in the record service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub account_type: AccountType,
    /// Signed balance; negative means money owed
    pub balance: Money,
    pub institution: String,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    pub minimum_balance: Money,
    pub is_active: bool,
}

impl Account {
    /// True when the balance represents debt rather than held funds
    pub fn owes(&self) -> bool {
        self.balance.is_negative()
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), ValidationError> {
        NewAccount::from(self).validate()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Fields for an account that has not been created yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub account_type: AccountType,
    pub balance: Money,
    pub institution: String,
    pub interest_rate: f64,
    pub minimum_balance: Money,
    pub is_active: bool,
}

impl NewAccount {
    /// An active account with zero balance and no institution
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            name: name.into(),
            account_type,
            balance: Money::zero(),
            institution: String::new(),
            interest_rate: 0.0,
            minimum_balance: Money::zero(),
            is_active: true,
        }
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Account", &self.name)?;
        check_non_negative("Minimum balance", self.minimum_balance)?;
        if self.interest_rate < 0.0 || !self.interest_rate.is_finite() {
            return Err(ValidationError::Negative("Interest rate"));
        }
        Ok(())
    }

    /// Attach the id assigned by the record service
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            account_type: self.account_type,
            balance: self.balance,
            institution: self.institution,
            interest_rate: self.interest_rate,
            minimum_balance: self.minimum_balance,
            is_active: self.is_active,
        }
    }
}

impl From<&Account> for NewAccount {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            account_type: account.account_type,
            balance: account.balance,
            institution: account.institution.clone(),
            interest_rate: account.interest_rate,
            minimum_balance: account.minimum_balance,
            is_active: account.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let account = NewAccount::new("Checking", AccountType::Checking);
        assert!(account.is_active);
        assert_eq!(account.balance, Money::zero());
        assert!(account.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut account = NewAccount::new("", AccountType::Savings);
        assert_eq!(account.validate(), Err(ValidationError::EmptyName("Account")));

        account.name = "Rainy Day".into();
        account.interest_rate = -1.0;
        assert_eq!(
            account.validate(),
            Err(ValidationError::Negative("Interest rate"))
        );

        account.interest_rate = 4.5;
        account.minimum_balance = Money::from_cents(-1);
        assert_eq!(
            account.validate(),
            Err(ValidationError::Negative("Minimum balance"))
        );
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
        assert_eq!(AccountType::parse("SAVINGS"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse("credit_card"), Some(AccountType::Credit));
        assert_eq!(AccountType::parse("cash"), None);
    }

    #[test]
    fn test_owes_follows_balance_sign() {
        let card = NewAccount::new("Visa", AccountType::Credit)
            .with_balance(Money::from_units(-200))
            .into_account(AccountId::new(1));
        assert!(card.owes());
        assert!(card.account_type.is_liability());
        assert_eq!(card.to_string(), "Visa (Credit)");
    }
}
