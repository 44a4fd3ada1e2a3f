//! Collection document types
//!
//! The rewrite works on the raw JSON tree so that fields it does not know
//! about survive untouched. These helpers give that tree just enough
//! structure to validate it and tell groups from requests.

mod node;
mod variable;

pub use node::NodeKind;
pub use variable::PostmanVariable;

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Wraps a variable name in Postman's `{{...}}` reference syntax.
#[must_use]
pub fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// Checks that a document has the two keys every collection carries.
///
/// # Errors
///
/// Returns [`DomainError::NotAnObject`] for a non-object root, or
/// [`DomainError::MissingKey`] naming the first of `info` / `item` absent.
pub fn check_collection_shape(document: &Value) -> DomainResult<()> {
    let root = document.as_object().ok_or(DomainError::NotAnObject)?;
    for key in ["info", "item"] {
        if !root.contains_key(key) {
            return Err(DomainError::MissingKey(key));
        }
    }
    Ok(())
}
