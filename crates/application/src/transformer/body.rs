//! Credentials embedded in raw request bodies

use postenv_domain::{TransformReport, TransformWarning, placeholder};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::CollectionTransformer;

/// Parses a raw body as a JSON object.
///
/// Returns `None` for invalid JSON and for JSON that is not an object.
fn parse_embedded_object(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str(raw).ok()? {
        Value::Object(object) => Some(object),
        _ => None,
    }
}

/// A raw body after its credentials were swapped for placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenBody {
    /// The body pretty-printed with 2-space indentation
    pub raw: String,
    /// Credential fields whose value changed
    pub replaced: usize,
}

/// Replaces credential fields of a JSON body with `{{field}}` placeholders.
///
/// Only fields already present are replaced; other fields keep their
/// values and order. The result is pretty-printed with 2-space indentation
/// even when no field matched. Returns `None` when `raw` is not a JSON
/// object, in which case the body must be left as it is.
#[must_use]
pub fn rewrite_raw_credentials<S: AsRef<str>>(raw: &str, fields: &[S]) -> Option<RewrittenBody> {
    let mut object = parse_embedded_object(raw)?;
    let mut replaced = 0;
    for field in fields {
        let field = field.as_ref();
        let Some(value) = object.get_mut(field) else {
            continue;
        };
        let target = placeholder(field);
        if value.as_str() != Some(target.as_str()) {
            *value = Value::String(target);
            replaced += 1;
        }
    }
    let raw = serde_json::to_string_pretty(&Value::Object(object)).ok()?;
    Some(RewrittenBody { raw, replaced })
}

impl CollectionTransformer {
    /// Swaps credentials in a `raw` mode body for placeholders.
    pub(super) fn rewrite_credentials(
        &self,
        request: &mut Map<String, Value>,
        path: &str,
        report: &mut TransformReport,
    ) {
        let Some(body) = request.get_mut("body").and_then(Value::as_object_mut) else {
            return;
        };
        if body.get("mode").and_then(Value::as_str) != Some("raw") {
            return;
        }
        let raw = body.get("raw").and_then(Value::as_str).unwrap_or_default();
        if raw.trim().is_empty() {
            return;
        }

        let fields = self.options.credential_fields.as_slice();
        let Some(rewritten) = rewrite_raw_credentials(raw, fields) else {
            warn!(path, "raw body is not a JSON object, leaving it unchanged");
            report.push(TransformWarning::warning(
                path,
                "raw body is not a JSON object; credentials were not replaced",
            ));
            return;
        };
        if rewritten.raw == raw {
            return;
        }
        if rewritten.replaced > 0 {
            debug!(path, fields = rewritten.replaced, "replaced body credentials");
            report.bodies_rewritten += 1;
        } else {
            debug!(path, "re-indented body without credentials");
            report.bodies_reformatted += 1;
        }
        body.insert("raw".to_string(), Value::String(rewritten.raw));
    }
}
