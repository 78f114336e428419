//! Budget month representation (`YYYY-MM`)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month that budgets and transaction rollups are keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BudgetMonth {
    year: i32,
    month: u32,
}

impl BudgetMonth {
    /// Create a month, returning None for an out-of-range month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check whether a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The `count` months ending with this one, oldest first
    pub fn trailing(&self, count: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(count);
        let mut cursor = *self;
        for _ in 0..count {
            months.push(cursor);
            cursor = cursor.prev();
        }
        months.reverse();
        months
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let invalid = || MonthParseError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BudgetMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BudgetMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BudgetMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Error returned for a month string that is not `YYYY-MM`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}', expected YYYY-MM", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let month = BudgetMonth::parse("2025-03").unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2025-03");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(BudgetMonth::parse("2025-13").is_err());
        assert!(BudgetMonth::parse("2025-3").is_err());
        assert!(BudgetMonth::parse("March").is_err());
    }

    #[test]
    fn test_navigation_wraps_years() {
        let dec = BudgetMonth::new(2024, 12).unwrap();
        assert_eq!(dec.next().to_string(), "2025-01");
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_trailing_is_oldest_first() {
        let feb = BudgetMonth::new(2025, 2).unwrap();
        let months: Vec<String> = feb.trailing(3).iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-12", "2025-01", "2025-02"]);
    }

    #[test]
    fn test_contains() {
        let month = BudgetMonth::new(2025, 1).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
    }
}
