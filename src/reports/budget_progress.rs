//! Budget spend-vs-limit banding

use std::fmt;

use crate::models::{Budget, Money};

/// How close spending is to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BudgetTier {
    OnTrack,
    Monitor,
    ApproachingLimit,
    OverBudget,
}

impl BudgetTier {
    /// Thresholds are closed-open: [0, 0.5) [0.5, 0.8) [0.8, 1.0) [1.0, inf)
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < 0.5 {
            Self::OnTrack
        } else if ratio < 0.8 {
            Self::Monitor
        } else if ratio < 1.0 {
            Self::ApproachingLimit
        } else {
            Self::OverBudget
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::OnTrack => "on-track",
            Self::Monitor => "monitor",
            Self::ApproachingLimit => "approaching-limit",
            Self::OverBudget => "over-budget",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    /// spent / limit, or 0 when the limit is 0
    pub ratio: f64,
    pub tier: BudgetTier,
    /// limit - spent; negative when over
    pub remaining: Money,
}

impl BudgetProgress {
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }

    /// "Remaining: $X" or "Over by: $X"
    pub fn label(&self, currency_symbol: &str) -> String {
        if self.remaining.is_negative() {
            format!(
                "Over by: {}",
                self.remaining.abs().format_with_symbol(currency_symbol)
            )
        } else {
            format!(
                "Remaining: {}",
                self.remaining.format_with_symbol(currency_symbol)
            )
        }
    }
}

pub fn band(spent: Money, monthly_limit: Money) -> BudgetProgress {
    let ratio = spent.ratio_of(monthly_limit);
    BudgetProgress {
        ratio,
        tier: BudgetTier::for_ratio(ratio),
        remaining: monthly_limit - spent,
    }
}

pub fn band_budget(budget: &Budget) -> BudgetProgress {
    band(budget.spent, budget.monthly_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_at(spent_cents: i64) -> BudgetTier {
        band(Money::from_cents(spent_cents), Money::from_cents(100_000)).tier
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_at(49_999), BudgetTier::OnTrack);
        assert_eq!(tier_at(50_000), BudgetTier::Monitor);
        assert_eq!(tier_at(79_999), BudgetTier::Monitor);
        assert_eq!(tier_at(80_000), BudgetTier::ApproachingLimit);
        assert_eq!(tier_at(99_999), BudgetTier::ApproachingLimit);
        assert_eq!(tier_at(100_000), BudgetTier::OverBudget);
        assert_eq!(tier_at(150_000), BudgetTier::OverBudget);
    }

    #[test]
    fn test_fractional_percentages() {
        assert_eq!(BudgetTier::for_ratio(0.49999), BudgetTier::OnTrack);
        assert_eq!(BudgetTier::for_ratio(0.79999), BudgetTier::Monitor);
        assert_eq!(BudgetTier::for_ratio(0.99999), BudgetTier::ApproachingLimit);
    }

    #[test]
    fn test_zero_limit_is_zero_ratio() {
        let progress = band(Money::from_units(80), Money::zero());
        assert_eq!(progress.ratio, 0.0);
        assert_eq!(progress.percentage(), 0.0);
        assert_eq!(progress.tier, BudgetTier::OnTrack);
        assert_eq!(progress.label("$"), "Over by: $80.00");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            band(Money::from_units(150), Money::from_units(400)).label("$"),
            "Remaining: $250.00"
        );
        assert_eq!(
            band(Money::from_units(450), Money::from_units(400)).label("€"),
            "Over by: €50.00"
        );
        assert_eq!(
            band(Money::from_units(400), Money::from_units(400)).label("$"),
            "Remaining: $0.00"
        );
    }
}
