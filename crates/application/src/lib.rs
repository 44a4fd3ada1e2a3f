//! Postenv Application - Transformer, use cases and ports
//!
//! This crate defines the application layer with:
//! - The collection transformer (validation, variable seeding, traversal,
//!   request rewriting)
//! - Port traits for reading and writing documents
//! - The file-to-file use case driven by the CLI
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod transformer;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{CodecError, DocumentCodec, FileSystem, FileSystemError};
pub use transformer::{CollectionTransformer, Transformed};
pub use use_cases::{
    TransformCollectionFile, TransformCollectionFileInput, TransformCollectionFileOutput,
    transformed_path,
};
