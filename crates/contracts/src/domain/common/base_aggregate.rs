use super::{EntityMetadata, EventStore};
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields every aggregate carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Business code (e.g. "EVT-2026-001", "CLT-12345")
    pub code: String,
    /// Description / display name
    pub description: String,
    /// Free-form comment
    pub comment: Option<String>,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
    /// Domain event holder
    pub events: EventStore,
}

impl<Id> BaseAggregate<Id> {
    /// Create a new aggregate
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
            events: EventStore::new(),
        }
    }

    /// Rebuild an aggregate with existing metadata (loading from the DB)
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
            events: EventStore::new(),
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Set the comment
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
