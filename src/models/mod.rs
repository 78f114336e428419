//! Core data models for fintrack
//!
//! This module contains the domain shapes that services hand to callers:
//! accounts, budgets, bills, transactions, savings goals and categories.
//! None of them carry wire field names.

pub mod account;
pub mod bill;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod savings_goal;
pub mod tags;
pub mod transaction;
pub mod validation;

pub use account::{Account, AccountType, NewAccount};
pub use bill::{Bill, BillStatus, NewBill};
pub use budget::{Budget, BudgetStatus, NewBudget};
pub use category::{default_categories, Category, NewCategory};
pub use ids::{AccountId, BillId, BudgetId, CategoryId, SavingsGoalId, TransactionId};
pub use money::Money;
pub use month::BudgetMonth;
pub use savings_goal::{GoalPriority, NewSavingsGoal, SavingsGoal};
pub use tags::{join_tags, parse_tags};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
pub use validation::ValidationError;
