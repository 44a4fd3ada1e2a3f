//! JSON serialization for collection files.
//!
//! Output uses 2-space indentation and a trailing newline. Object keys keep
//! the order they were read in.

mod codec;
mod json;

pub use codec::JsonCodec;
pub use json::*;
