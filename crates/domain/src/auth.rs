//! Request authentication types

use serde_json::{Value, json};

use crate::collection::placeholder;

/// How a request takes part in authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFlow {
    /// Obtains or renews tokens (login, auth, refresh endpoints)
    Auth,
    /// Consumes the bearer token
    Bearer,
}

impl RequestFlow {
    /// Classifies a request by its name.
    ///
    /// The name is lower-cased and matched against `triggers`, which must
    /// already be lower-case. Any substring hit selects [`Self::Auth`].
    #[must_use]
    pub fn classify<S: AsRef<str>>(name: &str, triggers: &[S]) -> Self {
        let name = name.to_lowercase();
        if triggers.iter().any(|t| name.contains(t.as_ref())) {
            Self::Auth
        } else {
            Self::Bearer
        }
    }
}

impl std::fmt::Display for RequestFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "auth"),
            Self::Bearer => write!(f, "bearer"),
        }
    }
}

/// Postman `auth` block, restricted to the bearer variant this tool writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostmanAuth {
    /// Discriminator, `bearer` here
    pub auth_type: String,
    /// Bearer parameters; Postman keeps the token under key `token`
    pub bearer: Vec<PostmanAuthParam>,
}

/// Auth parameter (key-value pair)
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostmanAuthParam {
    pub key: String,
    pub value: String,
    /// Value type, always `string` for tokens
    pub param_type: String,
}

impl PostmanAuth {
    /// Bearer auth whose token references the given variable.
    #[must_use]
    pub fn bearer_from_variable(variable: &str) -> Self {
        Self {
            auth_type: "bearer".to_string(),
            bearer: vec![PostmanAuthParam {
                key: "token".to_string(),
                value: placeholder(variable),
                param_type: "string".to_string(),
            }],
        }
    }
}

impl From<PostmanAuth> for Value {
    fn from(auth: PostmanAuth) -> Self {
        let params: Vec<Self> = auth
            .bearer
            .into_iter()
            .map(|p| json!({"key": p.key, "value": p.value, "type": p.param_type}))
            .collect();
        json!({"type": auth.auth_type, "bearer": params})
    }
}
