//! Activity log for the fleet manager
//!
//! Records every change to the fleet (adds, removals, authorized expenses,
//! bulk imports, snapshot saves) in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(boat.name(), &boat))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
