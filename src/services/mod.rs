//! Service layer for fintrack
//!
//! One service per entity. Each is built from an explicit `&dyn RecordClient`,
//! validates input, resolves category names, translates records to models,
//! and turns record-service failures into `FintrackError`s.

pub mod account;
pub mod bill;
pub mod budget;
pub mod category;
mod records;
pub mod savings_goal;
pub mod transaction;

pub use account::AccountService;
pub use bill::BillService;
pub use budget::BudgetService;
pub use category::{CategoryResolver, CategoryService};
pub use savings_goal::SavingsGoalService;
pub use transaction::TransactionService;
