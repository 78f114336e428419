//! Transaction model
//!
//! Amounts are stored unsigned; `kind` says which way the money moved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::validation::{check_name, check_non_negative, ValidationError};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        })
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub name: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub notes: String,
    pub kind: TransactionKind,
    /// Category name; resolved to a category id only when writing
    pub category: String,
}

impl Transaction {
    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Transaction", &self.name)?;
        check_non_negative("Amount", self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.signed_amount(), self.name)
    }
}

/// Fields for a transaction that has not been created yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub notes: String,
    pub kind: TransactionKind,
    pub category: String,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            description: String::new(),
            notes: String::new(),
            kind,
            category: category.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Record name: the description, or "Transaction" when there is none
    pub fn display_name(&self) -> String {
        let description = self.description.trim();
        if description.is_empty() {
            "Transaction".to_string()
        } else {
            description.to_string()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Category", &self.category)?;
        check_non_negative("Amount", self.amount)
    }
}

impl From<&Transaction> for NewTransaction {
    fn from(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount,
            date: txn.date,
            description: txn.description.clone(),
            notes: txn.notes.clone(),
            kind: txn.kind,
            category: txn.category.clone(),
        }
    }
}
