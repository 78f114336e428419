//! Reports module for fintrack
//!
//! The aggregation layer: derived bill status, budget banding and summary
//! rollups. Everything here works on records that were already fetched and
//! never touches the record service or produces service errors.

pub mod account_summary;
pub mod bill_status;
pub mod budget_progress;
pub mod budget_summary;
pub mod cash_flow;
pub mod goal_summary;

pub use account_summary::AccountSummary;
pub use bill_status::{resolve, resolve_today, BillStatusCounts, EffectiveBillStatus};
pub use budget_progress::{band, band_budget, BudgetProgress, BudgetTier};
pub use budget_summary::BudgetSummary;
pub use cash_flow::{CategoryBreakdown, CategoryShare, IncomeExpenseTrend, MonthFlow};
pub use goal_summary::GoalSummary;
