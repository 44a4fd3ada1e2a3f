//! Test listener events attached to requests.
//!
//! The script text is carried as data for whatever runs the collection
//! later. Nothing here parses or executes it.

use serde_json::{Value, json};

/// Test script appended to auth-flow requests.
///
/// Asserts a 200 status and, on success, stores the returned tokens into
/// the `accessToken`, `bearerToken` and `refreshToken` environment variables.
pub const TOKEN_CAPTURE_SCRIPT: [&str; 14] = [
    "pm.test(\"Status code is 200\", function () {",
    "    pm.response.to.have.status(200);",
    "});",
    "",
    "if (pm.response.code === 200) {",
    "    var jsonData = pm.response.json();",
    "    if (jsonData.accessToken) {",
    "        pm.environment.set(\"accessToken\", jsonData.accessToken);",
    "        pm.environment.set(\"bearerToken\", jsonData.accessToken);",
    "    }",
    "    if (jsonData.refreshToken) {",
    "        pm.environment.set(\"refreshToken\", jsonData.refreshToken);",
    "    }",
    "}",
];

/// Event (pre-request or test script)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostmanEvent {
    /// Hook name, `prerequest` or `test`
    pub listen: String,
    /// Script run on that hook
    pub script: PostmanScript,
}

/// Script definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostmanScript {
    /// Source lines
    pub exec: Vec<String>,
    /// MIME type of the source
    pub script_type: String,
}

impl PostmanEvent {
    /// The `test` event that captures tokens from an auth response.
    #[must_use]
    pub fn token_capture() -> Self {
        Self {
            listen: "test".to_string(),
            script: PostmanScript {
                exec: TOKEN_CAPTURE_SCRIPT
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                script_type: "text/javascript".to_string(),
            },
        }
    }
}

impl From<PostmanEvent> for Value {
    fn from(event: PostmanEvent) -> Self {
        json!({
            "listen": event.listen,
            "script": {
                "exec": event.script.exec,
                "type": event.script.script_type,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_capture_listens_on_test() {
        let event = PostmanEvent::token_capture();
        assert_eq!(event.listen, "test");
        assert_eq!(event.script.script_type, "text/javascript");
    }

    #[test]
    fn test_token_capture_stores_all_tokens() {
        let source = PostmanEvent::token_capture().script.exec.join("\n");
        assert!(source.contains("pm.response.to.have.status(200)"));
        assert!(source.contains("pm.response.code === 200"));
        assert!(source.contains("pm.environment.set(\"accessToken\", jsonData.accessToken)"));
        assert!(source.contains("pm.environment.set(\"bearerToken\", jsonData.accessToken)"));
        assert!(source.contains("pm.environment.set(\"refreshToken\", jsonData.refreshToken)"));
    }
}
