//! Collection-level variable entries

use serde_json::{Value, json};

/// An entry of the collection's `variable` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostmanVariable {
    /// Variable name, unique within the list
    pub key: String,
    /// Current value
    pub value: String,
    /// Postman value type, usually `string`
    pub var_type: String,
}

impl PostmanVariable {
    /// Creates a string variable with an empty value.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            var_type: "string".to_string(),
        }
    }

    /// Reads the `key` of a raw variable entry, if it has a string one.
    #[must_use]
    pub fn key_of(entry: &Value) -> Option<&str> {
        entry.get("key").and_then(Value::as_str)
    }
}

impl From<PostmanVariable> for Value {
    fn from(variable: PostmanVariable) -> Self {
        json!({
            "key": variable.key,
            "value": variable.value,
            "type": variable.var_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_variable_json() {
        let value = Value::from(PostmanVariable::empty("username"));
        assert_eq!(
            value,
            json!({"key": "username", "value": "", "type": "string"})
        );
    }

    #[test]
    fn test_key_of() {
        assert_eq!(PostmanVariable::key_of(&json!({"key": "a"})), Some("a"));
        assert_eq!(PostmanVariable::key_of(&json!({"value": "a"})), None);
    }
}
