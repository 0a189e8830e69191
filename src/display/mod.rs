//! Display formatting for terminal output

pub mod fleet;

pub use fleet::{format_boat_row, format_fleet_report};
