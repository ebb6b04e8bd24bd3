use serde::{Deserialize, Serialize};
use super::EntityMetadata;

/// Fields every aggregate carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record id
    pub id: Id,
    /// Business code (e.g. "2025-0912", "MAT-0003")
    pub code: String,
    /// Description / title
    pub description: String,
    pub comment: Option<String>,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Update timestamp and bump the version
    pub fn touch(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
