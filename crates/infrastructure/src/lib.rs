//! Postenv Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod persistence;
pub mod serialization;

pub use persistence::StdFileSystem;
pub use serialization::{
    JsonCodec, SerializationError, from_json, to_json_pretty, to_json_pretty_bytes,
};
