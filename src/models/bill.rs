//! Bill model
//!
//! The stored `status` is a write-time snapshot. What a bill currently is
//! (paid, unpaid or overdue) is derived at read time by
//! [`crate::reports::bill_status`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BillId;
use super::money::Money;
use super::validation::{check_name, check_non_negative, ValidationError};

/// Status value persisted with a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Unpaid,
    Paid,
    Overdue,
}

impl BillStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "unpaid" => Some(Self::Unpaid),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        })
    }
}

/// A recurring or one-off bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub name: String,
    pub tags: Vec<String>,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub status: BillStatus,
}

impl Bill {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Bill", &self.name)?;
        check_non_negative("Amount", self.amount)
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} due {} ({})", self.name, self.due_date, self.amount)
    }
}

/// Fields for a bill that has not been created yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewBill {
    pub name: String,
    pub tags: Vec<String>,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub status: BillStatus,
}

impl NewBill {
    pub fn new(name: impl Into<String>, due_date: NaiveDate, amount: Money) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            due_date,
            amount,
            status: BillStatus::Unpaid,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Bill", &self.name)?;
        check_non_negative("Amount", self.amount)
    }
}

impl From<&Bill> for NewBill {
    fn from(bill: &Bill) -> Self {
        Self {
            name: bill.name.clone(),
            tags: bill.tags.clone(),
            due_date: bill.due_date,
            amount: bill.amount,
            status: bill.status,
        }
    }
}
