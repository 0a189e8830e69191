//! Path management for the fleet manager
//!
//! All data files live together in one directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` on the command line, or `FLEET_DATA_DIR` in the
//!    environment (both handled by the binary's argument parser and passed
//!    to [`FleetPaths::with_base_dir`])
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::FleetError;

/// Snapshot file name, written on exit and read on startup
pub const SNAPSHOT_FILE: &str = "FleetData.db";

/// Activity log file name
pub const AUDIT_LOG_FILE: &str = "FleetAudit.log";

/// Manages all paths used by the fleet manager
#[derive(Debug, Clone)]
pub struct FleetPaths {
    base_dir: PathBuf,
}

impl FleetPaths {
    /// Use the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, FleetError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            FleetError::Config(format!("Could not determine working directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the fleet snapshot (`FleetData.db`)
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE)
    }

    /// Path to the activity log (`FleetAudit.log`)
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_LOG_FILE)
    }
}
