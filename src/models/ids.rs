//! Strongly-typed ID wrappers for all entity types
//!
//! The record service keys every record by an integer `Id`. Newtype wrappers
//! keep a budget id from being passed where a bill id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw record id
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw record id sent to the record service
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Accepts both "12" and the prefixed display form "acc-12"
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(BudgetId, "bud-");
define_id!(BillId, "bill-");
define_id!(TransactionId, "txn-");
define_id!(SavingsGoalId, "goal-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(AccountId::new(7).to_string(), "acc-7");
        assert_eq!(BillId::new(42).to_string(), "bill-42");
    }

    #[test]
    fn test_id_parse_plain_and_prefixed() {
        assert_eq!("12".parse::<BudgetId>().unwrap(), BudgetId::new(12));
        assert_eq!("bud-12".parse::<BudgetId>().unwrap(), BudgetId::new(12));
        assert!("bill-12".parse::<BudgetId>().is_err());
        assert!("Groceries".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&SavingsGoalId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: SavingsGoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 3);
    }
}
