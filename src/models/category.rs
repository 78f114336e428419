//! Category model
//!
//! Budgets and transactions refer to categories by name; the record service
//! stores the category id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::validation::{check_name, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display color, e.g. "#22c55e"
    pub color: String,
    /// Icon name used by front-ends
    pub icon: String,
    /// False for the built-in defaults
    pub is_custom: bool,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub is_custom: bool,
}

impl NewCategory {
    /// A user-defined category with neutral styling
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: "#6b7280".into(),
            icon: "Tag".into(),
            is_custom: true,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("Category", &self.name)
    }
}

/// Categories created by `fintrack init`
pub fn default_categories() -> Vec<NewCategory> {
    [
        ("Food", "#22c55e", "UtensilsCrossed"),
        ("Transportation", "#3b82f6", "Car"),
        ("Housing", "#a855f7", "Home"),
        ("Utilities", "#eab308", "Zap"),
        ("Entertainment", "#ec4899", "Film"),
        ("Healthcare", "#ef4444", "Heart"),
        ("Shopping", "#f97316", "ShoppingBag"),
        ("Salary", "#14b8a6", "Briefcase"),
        ("Other", "#6b7280", "MoreHorizontal"),
    ]
    .into_iter()
    .map(|(name, color, icon)| NewCategory {
        name: name.into(),
        color: color.into(),
        icon: icon.into(),
        is_custom: false,
    })
    .collect()
}
