//! Income/expense trend and expense breakdown by category

use std::collections::HashMap;

use crate::models::{BudgetMonth, Money, Transaction, TransactionKind};

const UNCATEGORIZED: &str = "Uncategorized";

/// Income and expense for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthFlow {
    pub month: BudgetMonth,
    pub income: Money,
    pub expense: Money,
}

impl MonthFlow {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeExpenseTrend {
    pub months: Vec<MonthFlow>,
}

impl IncomeExpenseTrend {
    /// One entry per requested month, in the order given. Transactions
    /// outside those months are ignored.
    pub fn generate(months: &[BudgetMonth], transactions: &[Transaction]) -> Self {
        let months = months
            .iter()
            .map(|&month| {
                let mut flow = MonthFlow {
                    month,
                    income: Money::zero(),
                    expense: Money::zero(),
                };
                for txn in transactions.iter().filter(|t| month.contains(t.date)) {
                    match txn.kind {
                        TransactionKind::Income => flow.income += txn.amount,
                        TransactionKind::Expense => flow.expense += txn.amount,
                    }
                }
                flow
            })
            .collect();
        Self { months }
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Income vs Expenses\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<9} {:>15} {:>15} {:>15}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');
        for flow in &self.months {
            output.push_str(&format!(
                "{:<9} {:>15} {:>15} {:>15}\n",
                flow.month.to_string(),
                flow.income.format_with_symbol(currency_symbol),
                flow.expense.format_with_symbol(currency_symbol),
                flow.net().format_with_symbol(currency_symbol)
            ));
        }
        output
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Percent of total expense
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub rows: Vec<CategoryShare>,
    pub total_expense: Money,
}

impl CategoryBreakdown {
    /// Expense totals per category, largest first. Income is ignored.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut totals: HashMap<&str, Money> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let category = match txn.category.trim() {
                "" => UNCATEGORIZED,
                name => name,
            };
            *totals.entry(category).or_default() += txn.amount;
        }

        let total_expense: Money = totals.values().copied().sum();
        let mut rows: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category: category.to_string(),
                amount,
                share: amount.ratio_of(total_expense) * 100.0,
            })
            .collect();
        rows.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));

        Self {
            rows,
            total_expense,
        }
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&format!(
                "{:<25} {:>15} {:>7.1}%\n",
                row.category,
                row.amount.format_with_symbol(currency_symbol),
                row.share
            ));
        }
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>15}\n",
            "Total",
            self.total_expense.format_with_symbol(currency_symbol)
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::NaiveDate;

    fn txn(date: (i32, u32, u32), kind: TransactionKind, amount: i64, category: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(1),
            name: "t".into(),
            amount: Money::from_units(amount),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: String::new(),
            notes: String::new(),
            kind,
            category: category.into(),
        }
    }

    #[test]
    fn test_trend_per_month() {
        let jan = BudgetMonth::new(2025, 1).unwrap();
        let feb = BudgetMonth::new(2025, 2).unwrap();
        let transactions = vec![
            txn((2025, 1, 3), TransactionKind::Income, 3000, "Salary"),
            txn((2025, 1, 9), TransactionKind::Expense, 120, "Food"),
            txn((2025, 2, 1), TransactionKind::Expense, 900, "Housing"),
            txn((2024, 12, 31), TransactionKind::Income, 5000, "Salary"),
        ];

        let trend = IncomeExpenseTrend::generate(&[jan, feb], &transactions);
        assert_eq!(trend.months.len(), 2);
        assert_eq!(trend.months[0].income, Money::from_units(3000));
        assert_eq!(trend.months[0].net(), Money::from_units(2880));
        assert_eq!(trend.months[1].net(), Money::from_units(-900));
        assert!(trend.format_terminal("$").contains("2025-02"));
    }

    #[test]
    fn test_breakdown_sorted_with_shares() {
        let transactions = vec![
            txn((2025, 1, 1), TransactionKind::Expense, 100, "Food"),
            txn((2025, 1, 2), TransactionKind::Expense, 300, "Housing"),
            txn((2025, 1, 3), TransactionKind::Expense, 100, ""),
            txn((2025, 1, 4), TransactionKind::Income, 1000, "Salary"),
        ];

        let breakdown = CategoryBreakdown::generate(&transactions);
        assert_eq!(breakdown.total_expense, Money::from_units(500));
        let names: Vec<&str> = breakdown.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Uncategorized"]);
        assert_eq!(breakdown.rows[0].share, 60.0);
    }
}
