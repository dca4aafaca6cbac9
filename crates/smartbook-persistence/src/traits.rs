use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartbook_core::SmartBookResult;
use uuid::Uuid;

/// Current on-disk format of the JSON stores.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata written alongside every persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the process instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Trait for serialization/deserialization strategies
/// Allows swapping JSON for other formats without touching the stores
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> SmartBookResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> SmartBookResult<T>;
}
