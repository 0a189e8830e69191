//! Boat model
//!
//! A single fleet record: identity fields fixed at creation plus a running
//! total of expenses charged against the purchase price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{FleetError, FleetResult};

/// Kind of boat in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoatCategory {
    Sailing,
    Power,
}

impl FromStr for BoatCategory {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAILING" => Ok(Self::Sailing),
            "POWER" => Ok(Self::Power),
            other => Err(FleetError::Parse(format!(
                "unknown boat category '{}' (expected SAILING or POWER)",
                other
            ))),
        }
    }
}

impl fmt::Display for BoatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sailing => write!(f, "SAILING"),
            Self::Power => write!(f, "POWER"),
        }
    }
}

/// Result of asking to charge an expense against a boat's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseDecision {
    /// The expense was applied
    Authorized { spent: Money, remaining: Money },
    /// The expense would overrun the budget; nothing changed
    Rejected { requested: Money, remaining: Money },
}

impl ExpenseDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }

    /// Remaining budget after an authorized charge, or the unchanged budget
    /// when rejected
    pub fn remaining(&self) -> Money {
        match self {
            Self::Authorized { remaining, .. } | Self::Rejected { remaining, .. } => *remaining,
        }
    }
}

/// A boat in the club fleet
///
/// Invariants: `purchase_price >= 0` and `purchase_price - expenses` fits in
/// a `Money`. Deserialization goes through [`BoatRecord`] so a snapshot
/// cannot bypass them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoatRecord")]
pub struct Boat {
    category: BoatCategory,
    name: String,
    year: i32,
    make_model: String,
    /// Length in feet
    length: u32,
    purchase_price: Money,
    expenses: Money,
}

/// Unchecked field layout of a serialized [`Boat`]
#[derive(Debug, Deserialize)]
struct BoatRecord {
    category: BoatCategory,
    name: String,
    year: i32,
    make_model: String,
    length: u32,
    purchase_price: Money,
    #[serde(default)]
    expenses: Money,
}

impl TryFrom<BoatRecord> for Boat {
    type Error = FleetError;

    fn try_from(record: BoatRecord) -> Result<Self, Self::Error> {
        let mut boat = Boat::new(
            record.category,
            record.name,
            record.year,
            record.make_model,
            record.length,
            record.purchase_price,
        )?;

        if record.purchase_price.checked_sub(record.expenses).is_none() {
            return Err(FleetError::Validation(format!(
                "expenses {} out of range for boat '{}'",
                record.expenses, boat.name
            )));
        }
        boat.expenses = record.expenses;
        Ok(boat)
    }
}

impl Boat {
    /// Create a new boat with no expenses recorded
    ///
    /// Fails if the purchase price is negative.
    pub fn new(
        category: BoatCategory,
        name: impl Into<String>,
        year: i32,
        make_model: impl Into<String>,
        length: u32,
        purchase_price: Money,
    ) -> FleetResult<Self> {
        if purchase_price.is_negative() {
            return Err(FleetError::Validation(format!(
                "purchase price cannot be negative ({})",
                purchase_price
            )));
        }

        Ok(Self {
            category,
            name: name.into(),
            year,
            make_model: make_model.into(),
            length,
            purchase_price,
            expenses: Money::zero(),
        })
    }

    pub fn category(&self) -> BoatCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn make_model(&self) -> &str {
        &self.make_model
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn purchase_price(&self) -> Money {
        self.purchase_price
    }

    pub fn expenses(&self) -> Money {
        self.expenses
    }

    /// Purchase price minus everything spent so far
    pub fn remaining_budget(&self) -> Money {
        // Never saturates while the struct invariants hold
        self.purchase_price.saturating_sub(self.expenses)
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Charge an expense if it fits within the remaining budget
    ///
    /// Negative amounts are not rejected: they reduce the recorded expenses.
    /// A charge whose new totals would overflow is a validation error and
    /// leaves the boat unchanged.
    pub fn charge(&mut self, amount: Money) -> FleetResult<ExpenseDecision> {
        let remaining = self.remaining_budget();
        if amount > remaining {
            return Ok(ExpenseDecision::Rejected {
                requested: amount,
                remaining,
            });
        }

        let overflow = || {
            FleetError::Validation(format!(
                "expense of {} on '{}' is out of range",
                amount, self.name
            ))
        };
        let expenses = self.expenses.checked_add(amount).ok_or_else(overflow)?;
        let remaining = self
            .purchase_price
            .checked_sub(expenses)
            .ok_or_else(overflow)?;

        self.expenses = expenses;
        Ok(ExpenseDecision::Authorized {
            spent: amount,
            remaining,
        })
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} {}, {}')",
            self.category, self.name, self.year, self.make_model, self.length
        )
    }
}
