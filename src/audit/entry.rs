//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Account,
    Service,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Account => write!(f, "Account"),
            EntityType::Service => write!(f, "Service"),
        }
    }
}

/// A single audit log entry
///
/// Entries never carry entity snapshots; only a redacted diff summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Account key, or `<account>#<index>` for services
    pub entity_id: String,

    /// Human-readable name (service name, new email after a rename)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            diff_summary,
        }
    }

    /// Create a new audit entry for a create operation
    pub fn create(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self::new(Operation::Create, entity_type, entity_id, entity_name, None)
    }

    /// Create a new audit entry for an update operation
    pub fn update(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        diff_summary: Option<String>,
    ) -> Self {
        Self::new(
            Operation::Update,
            entity_type,
            entity_id,
            entity_name,
            diff_summary,
        )
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self::new(Operation::Delete, entity_type, entity_id, entity_name, None)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entity_type_serialization() {
        let json = serde_json::to_string(&EntityType::Service).unwrap();
        assert_eq!(json, "\"service\"");
    }

    #[test]
    fn test_update_entry_fields() {
        let entry = AuditEntry::update(
            EntityType::Account,
            "a@b.com",
            Some("c@d.com".into()),
            Some("email: \"a@b.com\" -> \"c@d.com\"".into()),
        );
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.entity_id, "a@b.com");
        assert!(entry.diff_summary.is_some());
    }

    #[test]
    fn test_optional_fields_skipped() {
        let entry = AuditEntry::delete(EntityType::Account, "a@b.com", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("entity_name").is_none());
        assert!(json.get("diff_summary").is_none());
    }

    #[test]
    fn test_format_human_readable() {
        let entry = AuditEntry::update(
            EntityType::Service,
            "a@b.com#0",
            Some("Mail".into()),
            Some("note: \"\" -> \"x\"".into()),
        );

        let output = entry.format_human_readable();
        assert!(output.contains("UPDATE Service a@b.com#0 (Mail)"));
        assert!(output.contains("Changes: note"));
    }
}
