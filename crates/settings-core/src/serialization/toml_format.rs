//! TOML serializer for hand-edited settings files.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Serializer, SerializerError};

const FORMAT: &str = "toml";

/// Encodes settings as pretty-printed TOML via the `toml` crate.
///
/// TOML has no null: `Option` fields that are `None` are omitted on write and
/// must carry `#[serde(default)]` to read back.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlSerializer;

impl<T> Serializer<T> for TomlSerializer
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn serialize(&self, settings: &T) -> Result<Vec<u8>, SerializerError> {
        toml::to_string_pretty(settings)
            .map(String::into_bytes)
            .map_err(|e| SerializerError::serialize(FORMAT, e))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        let text = std::str::from_utf8(bytes).map_err(|e| SerializerError::deserialize(FORMAT, e))?;
        toml::from_str(text).map_err(|e| SerializerError::deserialize(FORMAT, e))
    }
}
