//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that running totals and budget
//! comparisons are exact. Input is accepted in any decimal or scientific
//! notation and rounded to the nearest cent.
//!
//! Arithmetic is checked only: every sum or difference returns `None` rather
//! than wrapping when it leaves the i64 range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest magnitude (in currency units) that still fits in i64 cents
const MAX_UNITS: f64 = 90_000_000_000_000_000.0;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fleet::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Difference clamped to the i64 range
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Sum of all amounts, or `None` if the total overflows
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a plain numeric amount
    ///
    /// Accepts anything a floating-point parser accepts ("18000", "18000.00",
    /// "1.8e4", "-12.5"). No currency symbol.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let value: f64 = trimmed
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() || value.abs() >= MAX_UNITS {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self((value * 100.0).round() as i64))
    }

    /// Parse an amount typed by a person, allowing a `$` after an optional
    /// leading minus ("$12.50", "-$3")
    pub fn parse_with_symbol(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        if let Some(rest) = trimmed.strip_prefix('$') {
            Self::parse(rest)
        } else if let Some(rest) = trimmed.strip_prefix("-$") {
            Self::parse(&format!("-{}", rest))
        } else {
            Self::parse(trimmed)
        }
    }

    /// Format without a currency symbol, always with two decimals ("1234.50")
    pub fn format_plain(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
