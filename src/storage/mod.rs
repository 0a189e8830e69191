//! Storage layer for the fleet manager
//!
//! Provides the in-memory fleet store and the JSON snapshot file it is saved
//! to between runs.

pub mod file_io;
pub mod fleet;

pub use file_io::{read_json_required, write_json_atomic};
pub use fleet::{FleetStore, FleetTotals, ImportSummary};
