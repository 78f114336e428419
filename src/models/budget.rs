//! Budget model
//!
//! A monthly spending limit for one category. `spent` is a stored snapshot:
//! nothing recomputes it from transactions, it is pushed explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::BudgetMonth;
use super::validation::{check_name, check_non_negative, ValidationError};

/// Workflow status of a budget. Free-form: any update may set any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetStatus {
    #[default]
    Planned,
    Pending,
    Completed,
    Overdue,
}

impl BudgetStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Some(Self::Planned),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_wire())
    }
}

/// A budget for a category in a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub name: String,
    /// Category name; resolved to a category id only when writing
    pub category: String,
    pub month: BudgetMonth,
    pub monthly_limit: Money,
    pub spent: Money,
    pub rollover: Money,
    pub description: String,
    pub status: BudgetStatus,
}

impl Budget {
    /// Spent as a percentage of the limit; 0 when the limit is 0
    pub fn percentage(&self) -> f64 {
        self.spent.ratio_of(self.monthly_limit) * 100.0
    }

    /// Limit minus spent; negative when over budget
    pub fn remaining(&self) -> Money {
        self.monthly_limit - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_negative()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Budget", &self.name)?;
        check_name("Category", &self.category)?;
        check_non_negative("Monthly limit", self.monthly_limit)?;
        check_non_negative("Spent", self.spent)?;
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} of {}",
            self.category, self.month, self.spent, self.monthly_limit
        )
    }
}

/// Fields for a budget that has not been created yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    /// Optional display name; defaults to "<category> Budget"
    pub name: Option<String>,
    pub category: String,
    pub month: BudgetMonth,
    pub monthly_limit: Money,
    pub description: String,
    pub status: BudgetStatus,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, month: BudgetMonth, monthly_limit: Money) -> Self {
        Self {
            name: None,
            category: category.into(),
            month,
            monthly_limit,
            description: String::new(),
            status: BudgetStatus::Planned,
        }
    }

    /// The name that will be stored for this budget
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} Budget", self.category.trim()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Category", &self.category)?;
        check_name("Budget", &self.display_name())?;
        check_non_negative("Monthly limit", self.monthly_limit)?;
        Ok(())
    }
}

impl From<&Budget> for NewBudget {
    fn from(budget: &Budget) -> Self {
        Self {
            name: Some(budget.name.clone()),
            category: budget.category.clone(),
            month: budget.month,
            monthly_limit: budget.monthly_limit,
            description: budget.description.clone(),
            status: budget.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(limit: i64, spent: i64) -> Budget {
        Budget {
            id: BudgetId::new(1),
            name: "Food Budget".into(),
            category: "Food".into(),
            month: BudgetMonth::new(2025, 1).unwrap(),
            monthly_limit: Money::from_units(limit),
            spent: Money::from_units(spent),
            rollover: Money::zero(),
            description: String::new(),
            status: BudgetStatus::Planned,
        }
    }

    #[test]
    fn test_percentage_and_remaining() {
        let b = budget(400, 100);
        assert_eq!(b.percentage(), 25.0);
        assert_eq!(b.remaining(), Money::from_units(300));
        assert!(!b.is_over_budget());

        let over = budget(100, 150);
        assert_eq!(over.percentage(), 150.0);
        assert_eq!(over.remaining(), Money::from_units(-50));
        assert!(over.is_over_budget());
    }

    #[test]
    fn test_zero_limit_percentage_is_zero() {
        assert_eq!(budget(0, 75).percentage(), 0.0);
        assert_eq!(budget(0, 0).percentage(), 0.0);
    }

    #[test]
    fn test_default_name() {
        let month = BudgetMonth::new(2025, 1).unwrap();
        let mut new = NewBudget::new("Food", month, Money::from_units(300));
        assert_eq!(new.display_name(), "Food Budget");
        new.name = Some("Groceries cap".into());
        assert_eq!(new.display_name(), "Groceries cap");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(BudgetStatus::parse("Completed"), Some(BudgetStatus::Completed));
        assert_eq!(BudgetStatus::parse("overdue"), Some(BudgetStatus::Overdue));
        assert_eq!(BudgetStatus::parse("done"), None);
        assert_eq!(BudgetStatus::default(), BudgetStatus::Planned);
    }

    #[test]
    fn test_validation_rejects_negative_limit() {
        let month = BudgetMonth::new(2025, 1).unwrap();
        let new = NewBudget::new("Food", month, Money::from_cents(-1));
        assert_eq!(new.validate(), Err(ValidationError::Negative("Monthly limit")));
    }
}
