//! Core data models for the fleet manager
//!
//! The fleet domain is small: boats, the category they belong to, and the
//! money amounts tracked against each one.

pub mod boat;
pub mod money;

pub use boat::{Boat, BoatCategory, ExpenseDecision};
pub use money::Money;
