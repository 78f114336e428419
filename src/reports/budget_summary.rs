//! Monthly budget totals

use crate::display::truncate;
use crate::models::{Budget, BudgetMonth, Money};

use super::budget_progress::{band, band_budget, BudgetProgress};

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub month: BudgetMonth,
    pub total_budget: Money,
    pub total_spent: Money,
    pub remaining: Money,
    /// total_spent / total_budget * 100, or 0 when nothing is budgeted
    pub percentage: f64,
    /// Number of budgets in the month
    pub categories: usize,
}

impl BudgetSummary {
    /// Totals over the budgets that belong to `month`; others are ignored
    pub fn for_month(budgets: &[Budget], month: BudgetMonth) -> Self {
        let in_month: Vec<&Budget> = budgets.iter().filter(|b| b.month == month).collect();
        let total_budget: Money = in_month.iter().map(|b| b.monthly_limit).sum();
        let total_spent: Money = in_month.iter().map(|b| b.spent).sum();

        Self {
            month,
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
            percentage: total_spent.ratio_of(total_budget) * 100.0,
            categories: in_month.len(),
        }
    }

    pub fn progress(&self) -> BudgetProgress {
        band(self.total_spent, self.total_budget)
    }

    /// Summary block followed by one line per budget of the month
    pub fn format_terminal(&self, budgets: &[Budget], currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Budget Summary - {}\n", self.month));
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Budgeted:  {:>15}\n",
            self.total_budget.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Spent:     {:>15}  ({:.1}%)\n",
            self.total_spent.format_with_symbol(currency_symbol),
            self.percentage
        ));
        output.push_str(&format!(
            "{}\n",
            self.progress().label(currency_symbol)
        ));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>7}  {}\n",
            "Category", "Limit", "Spent", "Used", "Status"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for budget in budgets.iter().filter(|b| b.month == self.month) {
            let progress = band_budget(budget);
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>6.1}%  {}\n",
                truncate(&budget.category, 20),
                budget.monthly_limit.format_with_symbol(currency_symbol),
                budget.spent.format_with_symbol(currency_symbol),
                progress.percentage(),
                progress.tier
            ));
        }

        if self.categories == 0 {
            output.push_str("No budgets for this month.\n");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, BudgetStatus};

    fn budget(id: i64, month: BudgetMonth, limit: i64, spent: i64) -> Budget {
        Budget {
            id: BudgetId::new(id),
            name: format!("Budget {}", id),
            category: "Food".into(),
            month,
            monthly_limit: Money::from_units(limit),
            spent: Money::from_units(spent),
            rollover: Money::zero(),
            description: String::new(),
            status: BudgetStatus::Planned,
        }
    }

    #[test]
    fn test_totals_for_month() {
        let jan = BudgetMonth::new(2025, 1).unwrap();
        let feb = BudgetMonth::new(2025, 2).unwrap();
        let budgets = vec![
            budget(1, jan, 400, 100),
            budget(2, jan, 100, 150),
            budget(3, feb, 999, 999),
        ];

        let summary = BudgetSummary::for_month(&budgets, jan);
        assert_eq!(summary.total_budget, Money::from_units(500));
        assert_eq!(summary.total_spent, Money::from_units(250));
        assert_eq!(summary.remaining, Money::from_units(250));
        assert_eq!(summary.percentage, 50.0);
        assert_eq!(summary.categories, 2);

        let text = summary.format_terminal(&budgets, "$");
        assert!(text.contains("over-budget"));
        assert!(!text.contains("$999.00"));
    }

    #[test]
    fn test_zero_budget_guarded() {
        let jan = BudgetMonth::new(2025, 1).unwrap();
        let summary = BudgetSummary::for_month(&[budget(1, jan, 0, 30)], jan);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.remaining, Money::from_units(-30));
    }
}
