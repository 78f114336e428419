//! Savings goal totals

use crate::models::{Money, SavingsGoal};

#[derive(Debug, Clone, PartialEq)]
pub struct GoalSummary {
    pub total_target: Money,
    pub total_current: Money,
    /// total_target - total_current; negative once goals overshoot in total
    pub total_remaining: Money,
    /// total_current / total_target * 100, or 0 when nothing is targeted
    pub overall_progress: f64,
    pub active_goals: usize,
    pub completed_goals: usize,
    pub total_goals: usize,
}

impl GoalSummary {
    pub fn from_goals(goals: &[SavingsGoal]) -> Self {
        let total_target: Money = goals.iter().map(|g| g.target_amount).sum();
        let total_current: Money = goals.iter().map(|g| g.current_amount).sum();
        let completed_goals = goals.iter().filter(|g| g.is_completed()).count();

        Self {
            total_target,
            total_current,
            total_remaining: total_target - total_current,
            overall_progress: total_current.ratio_of(total_target) * 100.0,
            active_goals: goals.len() - completed_goals,
            completed_goals,
            total_goals: goals.len(),
        }
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Savings Goals\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Saved:     {:>15}\n",
            self.total_current.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Target:    {:>15}\n",
            self.total_target.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Remaining: {:>15}\n",
            self.total_remaining.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Progress:  {:>14.1}%\n", self.overall_progress));
        output.push_str(&format!(
            "Goals:     {} active, {} completed, {} total\n",
            self.active_goals, self.completed_goals, self.total_goals
        ));
        output
    }
}
