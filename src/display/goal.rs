//! Savings goal display formatting

use crate::models::SavingsGoal;

use super::truncate;

/// Width of the text progress bar
const BAR_WIDTH: usize = 20;

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format goals as a table with a progress bar per goal
pub fn format_goal_list(goals: &[SavingsGoal], currency_symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<20} {:<6} {:>12} {:>12}  {:10}  {}\n",
        "ID", "Name", "Prio", "Saved", "Target", "Deadline", "Progress"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for goal in goals {
        let progress = goal.progress();
        let deadline = goal
            .deadline
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let done = if goal.is_completed() { " done" } else { "" };

        output.push_str(&format!(
            "{:>5}  {:<20} {:<6} {:>12} {:>12}  {:10}  {} {:>5.1}%{}\n",
            goal.id.get(),
            truncate(&goal.name, 20),
            goal.priority,
            goal.current_amount.format_with_symbol(currency_symbol),
            goal.target_amount.format_with_symbol(currency_symbol),
            deadline,
            progress_bar(progress),
            progress,
            done,
        ));
    }

    output
}

pub fn format_goal_details(goal: &SavingsGoal, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&format!("  ID:        {}\n", goal.id));
    output.push_str(&format!("  Priority:  {}\n", goal.priority));
    output.push_str(&format!(
        "  Saved:     {} of {}\n",
        goal.current_amount.format_with_symbol(currency_symbol),
        goal.target_amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Remaining: {}\n",
        goal.remaining().format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Progress:  {} {:.1}%\n",
        progress_bar(goal.progress()),
        goal.progress()
    ));
    if let Some(deadline) = goal.deadline {
        output.push_str(&format!("  Deadline:  {}\n", deadline.format("%Y-%m-%d")));
    }
    if !goal.tags.is_empty() {
        output.push_str(&format!("  Tags:      {}\n", goal.tags.join(", ")));
    }
    if !goal.note.is_empty() {
        output.push_str(&format!("  Note:      {}\n", goal.note));
    }
    if let Some(created) = goal.created_at {
        output.push_str(&format!(
            "  Created:   {}\n",
            created.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    if goal.is_completed() {
        output.push_str("  Completed!\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalPriority, Money, SavingsGoalId};

    fn goal(current: i64, target: i64) -> SavingsGoal {
        SavingsGoal {
            id: SavingsGoalId::new(2),
            name: "Emergency fund".into(),
            target_amount: Money::from_units(target),
            current_amount: Money::from_units(current),
            deadline: None,
            priority: GoalPriority::High,
            tags: Vec::new(),
            note: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", ".".repeat(20)));
        assert_eq!(progress_bar(150.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(50.0), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
    }

    #[test]
    fn test_goal_list_and_details() {
        let list = format_goal_list(&[goal(500, 500)], "$");
        assert!(list.contains("Emergency fund"));
        assert!(list.contains("done"));

        let details = format_goal_details(&goal(250, 1000), "$");
        assert!(details.contains("$250.00 of $1000.00"));
        assert!(details.contains("Remaining: $750.00"));
        assert!(!details.contains("Completed"));
    }
}
