//! Item tree node classification

use serde_json::Value;

/// What an entry of an `item` list turns out to be.
///
/// Postman does not tag items; a folder is recognised by its nested `item`
/// list and a request by its `request` object, checked in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A folder holding further items
    Group,
    /// A leaf request
    Request,
    /// Anything else; left alone
    Other,
}

impl NodeKind {
    /// Classifies a node by the keys it carries.
    #[must_use]
    pub fn of(node: &Value) -> Self {
        let Some(fields) = node.as_object() else {
            return Self::Other;
        };
        if fields.contains_key("item") {
            Self::Group
        } else if fields.contains_key("request") {
            Self::Request
        } else {
            Self::Other
        }
    }

    /// Returns the node's display name, or an empty string.
    #[must_use]
    pub fn name_of(node: &Value) -> &str {
        node.get("name").and_then(Value::as_str).unwrap_or_default()
    }
}
