//! Pretty-printed JSON serializer, the store's default.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Serializer, SerializerError};

const FORMAT: &str = "json";

/// Encodes settings as indented UTF-8 JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T> Serializer<T> for JsonSerializer
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn serialize(&self, settings: &T) -> Result<Vec<u8>, SerializerError> {
        serde_json::to_vec_pretty(settings).map_err(|e| SerializerError::serialize(FORMAT, e))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        serde_json::from_slice(bytes).map_err(|e| SerializerError::deserialize(FORMAT, e))
    }
}
