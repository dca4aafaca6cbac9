use crate::traits::Serializer;
use smartbook_core::{SmartBookError, SmartBookResult};

/// Pretty-printing JSON serializer used by the file stores
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> SmartBookResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| SmartBookError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> SmartBookResult<T> {
        serde_json::from_slice(bytes).map_err(|e| SmartBookError::Serialization(e.to_string()))
    }
}
