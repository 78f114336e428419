//! Bill effective status
//!
//! The stored status is only trusted when it says `paid`. Anything else is
//! re-derived from the due date against the day the caller passes in.

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::models::{Bill, BillStatus, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveBillStatus {
    Unpaid,
    Paid,
    Overdue,
}

impl fmt::Display for EffectiveBillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        })
    }
}

/// Status of `bill` as of `today`.
///
/// Paid is terminal regardless of the due date. A bill due today is still
/// unpaid; it becomes overdue the day after.
pub fn resolve(bill: &Bill, today: NaiveDate) -> EffectiveBillStatus {
    if bill.status == BillStatus::Paid {
        EffectiveBillStatus::Paid
    } else if bill.due_date < today {
        EffectiveBillStatus::Overdue
    } else {
        EffectiveBillStatus::Unpaid
    }
}

/// [`resolve`] against the local calendar date
pub fn resolve_today(bill: &Bill) -> EffectiveBillStatus {
    resolve(bill, Local::now().date_naive())
}

/// Bills counted by effective status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillStatusCounts {
    pub unpaid: usize,
    pub paid: usize,
    pub overdue: usize,
    /// Sum of unpaid and overdue amounts
    pub outstanding: Money,
    /// Overdue amounts only
    pub overdue_amount: Money,
}

impl BillStatusCounts {
    pub fn from_bills(bills: &[Bill], today: NaiveDate) -> Self {
        let mut counts = Self::default();
        for bill in bills {
            match resolve(bill, today) {
                EffectiveBillStatus::Paid => counts.paid += 1,
                EffectiveBillStatus::Unpaid => {
                    counts.unpaid += 1;
                    counts.outstanding += bill.amount;
                }
                EffectiveBillStatus::Overdue => {
                    counts.overdue += 1;
                    counts.outstanding += bill.amount;
                    counts.overdue_amount += bill.amount;
                }
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.unpaid + self.paid + self.overdue
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Bills\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Unpaid:      {:>6}\n", self.unpaid));
        output.push_str(&format!("Overdue:     {:>6}\n", self.overdue));
        output.push_str(&format!("Paid:        {:>6}\n", self.paid));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Outstanding: {:>15}\n",
            self.outstanding.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Overdue:     {:>15}\n",
            self.overdue_amount.format_with_symbol(currency_symbol)
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn bill(due: NaiveDate, status: BillStatus, amount: i64) -> Bill {
        Bill {
            id: BillId::new(1),
            name: "Internet".into(),
            tags: Vec::new(),
            due_date: due,
            amount: Money::from_units(amount),
            status,
        }
    }

    #[test]
    fn test_paid_is_sticky() {
        let past = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let future = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(resolve(&bill(past, BillStatus::Paid, 1), today()), EffectiveBillStatus::Paid);
        assert_eq!(resolve(&bill(future, BillStatus::Paid, 1), today()), EffectiveBillStatus::Paid);
    }

    #[test]
    fn test_overdue_only_after_due_date() {
        let yesterday = today().pred_opt().unwrap();
        let tomorrow = today().succ_opt().unwrap();

        assert_eq!(
            resolve(&bill(yesterday, BillStatus::Unpaid, 1), today()),
            EffectiveBillStatus::Overdue
        );
        assert_eq!(
            resolve(&bill(today(), BillStatus::Unpaid, 1), today()),
            EffectiveBillStatus::Unpaid
        );
        assert_eq!(
            resolve(&bill(tomorrow, BillStatus::Unpaid, 1), today()),
            EffectiveBillStatus::Unpaid
        );
    }

    #[test]
    fn test_stored_overdue_is_not_trusted() {
        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(
            resolve(&bill(tomorrow, BillStatus::Overdue, 1), today()),
            EffectiveBillStatus::Unpaid
        );
    }

    #[test]
    fn test_counts_and_outstanding() {
        let past = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let bills = vec![
            bill(past, BillStatus::Unpaid, 100),
            bill(later, BillStatus::Unpaid, 40),
            bill(past, BillStatus::Paid, 500),
        ];

        let counts = BillStatusCounts::from_bills(&bills, today());
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.unpaid, 1);
        assert_eq!(counts.paid, 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.outstanding, Money::from_units(140));
        assert_eq!(counts.overdue_amount, Money::from_units(100));
        assert!(counts.format_terminal("$").contains("$140.00"));
    }
}
