//! JSON codec adapter.

use postenv_application::ports::{CodecError, DocumentCodec};
use serde_json::Value;

use super::json::{from_json, to_json_pretty_bytes};

/// Reads and writes collections as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Creates a new `JsonCodec`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentCodec for JsonCodec {
    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        from_json(text).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode(&self, document: &Value) -> Result<Vec<u8>, CodecError> {
        to_json_pretty_bytes(document).map_err(|e| CodecError::Encode(e.to_string()))
    }
}
