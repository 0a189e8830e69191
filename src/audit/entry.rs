//! Audit entry data structures
//!
//! Defines the operations recorded in the activity log and the shape of a
//! single log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Boat was added
    Create,
    /// Boat was changed (an expense was charged)
    Update,
    /// Boat was removed
    Delete,
    /// Boats were bulk imported from a delimited file
    Import,
    /// Fleet snapshot was written
    Save,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
            Operation::Save => write!(f, "SAVE"),
        }
    }
}

/// What an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A single boat, identified by name
    Boat,
    /// The fleet as a whole, identified by a file path
    Fleet,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Boat => write!(f, "Boat"),
            EntityType::Fleet => write!(f, "Fleet"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Boat name, or file path for fleet-wide operations
    pub entity_id: String,

    /// JSON representation of the entity before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Short human-readable description of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            before: None,
            after: None,
            summary: None,
        }
    }

    /// Entry for a boat being added
    pub fn create<T: Serialize>(entity_id: impl Into<String>, entity: &T) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, EntityType::Boat, entity_id)
        }
    }

    /// Entry for a boat being changed
    pub fn update<T: Serialize>(
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary,
            ..Self::new(Operation::Update, EntityType::Boat, entity_id)
        }
    }

    /// Entry for a boat being removed
    pub fn delete<T: Serialize>(entity_id: impl Into<String>, entity: &T) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, EntityType::Boat, entity_id)
        }
    }

    /// Entry for a bulk import from `source`
    pub fn import(source: impl Into<String>, imported: usize, skipped: usize) -> Self {
        Self {
            summary: Some(format!("{} imported, {} skipped", imported, skipped)),
            ..Self::new(Operation::Import, EntityType::Fleet, source)
        }
    }

    /// Entry for a snapshot written to `target`
    pub fn save(target: impl Into<String>, boat_count: usize) -> Self {
        Self {
            summary: Some(format!("{} boats saved", boat_count)),
            ..Self::new(Operation::Save, EntityType::Fleet, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Import.to_string(), "IMPORT");
        assert_eq!(Operation::Save.to_string(), "SAVE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create("Eagle", &json!({"name": "Eagle"}));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Boat);
        assert_eq!(entry.entity_id, "Eagle");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry() {
        let before = json!({"name": "Eagle", "expenses": 0});
        let after = json!({"name": "Eagle", "expenses": 500000});

        let entry = AuditEntry::update(
            "Eagle",
            &before,
            &after,
            Some("expenses: $0.00 -> $5000.00".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.summary.as_deref(),
            Some("expenses: $0.00 -> $5000.00")
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete("Eagle", &json!({"name": "Eagle"}));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_fleet_entries() {
        let import = AuditEntry::import("fleet.csv", 4, 1);
        assert_eq!(import.entity_type, EntityType::Fleet);
        assert_eq!(import.summary.as_deref(), Some("4 imported, 1 skipped"));

        let save = AuditEntry::save("FleetData.db", 4);
        assert_eq!(save.operation, Operation::Save);
        assert_eq!(save.summary.as_deref(), Some("4 boats saved"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::save("FleetData.db", 2);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"save\""));
        assert!(!json.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Save);
        assert_eq!(deserialized.entity_type, EntityType::Fleet);
    }
}
