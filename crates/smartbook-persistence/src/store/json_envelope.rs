use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, Serializer, FORMAT_VERSION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use smartbook_core::{SmartBookError, SmartBookResult};
use std::path::Path;
use uuid::Uuid;

/// Wrapper structure for every JSON document the stores write
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope<T> {
    pub metadata: PersistenceMetadata,
    pub data: T,
}

impl<T> JsonEnvelope<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Read the envelope at `path`; `None` when the file does not exist yet
    pub fn read(path: &Path) -> SmartBookResult<Option<Self>> {
        let Some(bytes) = AtomicWriter::read_optional(path)? else {
            return Ok(None);
        };
        let envelope: Self = JsonSerializer.deserialize(&bytes)?;

        if envelope.metadata.format_version != FORMAT_VERSION {
            return Err(SmartBookError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.metadata.format_version
            )));
        }
        Ok(Some(envelope))
    }

    /// Stamp fresh metadata and write atomically
    pub fn write(path: &Path, instance_id: Uuid, data: T) -> SmartBookResult<PersistenceMetadata> {
        let envelope = JsonEnvelope {
            metadata: PersistenceMetadata::new(instance_id),
            data,
        };
        let bytes = JsonSerializer.serialize(&envelope)?;
        AtomicWriter::write_atomic(path, &bytes)?;
        Ok(envelope.metadata)
    }
}
