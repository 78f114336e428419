//! Savings goal model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsGoalId;
use super::money::Money;
use super::validation::{check_name, check_non_negative, ValidationError};

/// How urgent a goal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl GoalPriority {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A savings target with progress toward it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: SavingsGoalId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: Option<NaiveDate>,
    pub priority: GoalPriority,
    pub tags: Vec<String>,
    pub note: String,
    /// Set by the record service
    pub created_at: Option<DateTime<Utc>>,
}

impl SavingsGoal {
    /// Reached or passed the target. The boundary counts as completed.
    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn is_active(&self) -> bool {
        !self.is_completed()
    }

    /// Progress in percent; may exceed 100 after overshooting contributions
    pub fn progress(&self) -> f64 {
        self.current_amount.ratio_of(self.target_amount) * 100.0
    }

    /// Amount still needed, never below zero
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Add a contribution. Overshooting the target is allowed.
    pub fn add_contribution(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Savings goal", &self.name)?;
        check_non_negative("Target amount", self.target_amount)?;
        check_non_negative("Current amount", self.current_amount)
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Fields for a goal that has not been created yet. New goals start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Money,
    pub deadline: Option<NaiveDate>,
    pub priority: GoalPriority,
    pub tags: Vec<String>,
    pub note: String,
}

impl NewSavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            name: name.into(),
            target_amount,
            deadline: None,
            priority: GoalPriority::Medium,
            tags: Vec::new(),
            note: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Savings goal", &self.name)?;
        check_non_negative("Target amount", self.target_amount)
    }
}

impl From<&SavingsGoal> for NewSavingsGoal {
    fn from(goal: &SavingsGoal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            deadline: goal.deadline,
            priority: goal.priority,
            tags: goal.tags.clone(),
            note: goal.note.clone(),
        }
    }
}
