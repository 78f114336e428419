//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing. The record service speaks decimal numbers, so conversions to and
//! from `f64` round to the nearest cent at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units (dollars, euros, ...)
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a decimal value, rounding to the nearest cent
    ///
    /// Non-finite input yields zero.
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self((value * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal value, as sent to the record service
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Ratio of this amount to `whole`, or 0 when `whole` is not positive
    pub fn ratio_of(&self, whole: Money) -> f64 {
        if whole.0 > 0 {
            self.0 as f64 / whole.0 as f64
        } else {
            0.0
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "1,250.00" and "10" (whole units).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() {
            return Err(invalid());
        }

        let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        if (whole.is_empty() && frac.is_empty())
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        let out_of_range = || MoneyParseError::OutOfRange(trimmed.to_string());
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Money has more than two decimal places: {}", s)
            }
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
