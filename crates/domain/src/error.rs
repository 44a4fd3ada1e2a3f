//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while inspecting a collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document root is not a JSON object.
    #[error("collection root is not an object")]
    NotAnObject,

    /// A required top-level key is missing.
    #[error("collection is missing required key `{0}`")]
    MissingKey(&'static str),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
