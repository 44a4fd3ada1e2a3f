//! Rewrite settings.

/// Variable names injected into every collection, in append order.
pub const REQUIRED_VARIABLES: [&str; 6] = [
    "base_url",
    "username",
    "password",
    "accessToken",
    "refreshToken",
    "bearerToken",
];

/// Name fragments that mark a request as part of the authentication flow.
pub const AUTH_TRIGGERS: [&str; 3] = ["login", "auth", "refresh"];

/// Body fields replaced by same-named placeholders in auth requests.
pub const CREDENTIAL_FIELDS: [&str; 2] = ["username", "password"];

/// Origin that gets replaced by the base URL placeholder.
pub const LOCAL_ORIGIN: &str = "http://localhost:8080";

/// Host segment that gets replaced by the base URL placeholder.
pub const LOCAL_HOST: &str = "localhost:8080";

/// Settings driving a collection rewrite.
///
/// The CLI always runs with the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Variables guaranteed to exist after the rewrite.
    pub required_variables: Vec<String>,
    /// Lower-case fragments of request names that select the auth flow.
    pub auth_triggers: Vec<String>,
    /// Raw body fields swapped for `{{field}}` in auth requests.
    pub credential_fields: Vec<String>,
    /// Literal origin replaced inside `url.raw`.
    pub local_origin: String,
    /// Literal host matched against a single-element `url.host`.
    pub local_host: String,
    /// Variable standing in for the origin.
    pub base_url_variable: String,
    /// Variable used as the bearer token.
    pub access_token_variable: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            required_variables: REQUIRED_VARIABLES.iter().map(ToString::to_string).collect(),
            auth_triggers: AUTH_TRIGGERS.iter().map(ToString::to_string).collect(),
            credential_fields: CREDENTIAL_FIELDS.iter().map(ToString::to_string).collect(),
            local_origin: LOCAL_ORIGIN.to_string(),
            local_host: LOCAL_HOST.to_string(),
            base_url_variable: "base_url".to_string(),
            access_token_variable: "accessToken".to_string(),
        }
    }
}
