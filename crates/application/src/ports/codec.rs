//! Document encoding port.

use serde_json::Value;

/// Error type for decoding and encoding collection documents.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(String),

    /// The document could not be serialized.
    #[error("could not serialize document: {0}")]
    Encode(String),
}

/// Turns file contents into a JSON tree and back.
pub trait DocumentCodec {
    /// Parses a document.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the text is not valid JSON.
    fn decode(&self, text: &str) -> Result<Value, CodecError>;

    /// Serializes a document for writing.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if serialization fails.
    fn encode(&self, document: &Value) -> Result<Vec<u8>, CodecError>;
}
