//! Configuration module for the fleet manager
//!
//! Resolves where the snapshot and activity log live.

pub mod paths;

pub use paths::FleetPaths;
