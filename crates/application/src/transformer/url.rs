//! Request URL rewriting

use postenv_domain::{TransformReport, placeholder};
use serde_json::{Map, Value, json};
use tracing::debug;

use super::CollectionTransformer;

/// Replaces every occurrence of `origin` in `raw`.
///
/// Returns `None` when `raw` does not contain `origin`.
#[must_use]
pub fn replace_origin(raw: &str, origin: &str, replacement: &str) -> Option<String> {
    raw.contains(origin).then(|| raw.replace(origin, replacement))
}

impl CollectionTransformer {
    /// Points a structured URL at the base URL variable.
    ///
    /// Nothing happens unless `raw` mentions the local host. Inside `raw`
    /// only the full `http` origin is replaced; `host` is replaced when it
    /// is exactly the local host. The two fields are not reconciled
    /// otherwise. Plain string URLs are not rewritten.
    pub(super) fn rewrite_url(
        &self,
        request: &mut Map<String, Value>,
        path: &str,
        report: &mut TransformReport,
    ) {
        let Some(url) = request.get_mut("url").and_then(Value::as_object_mut) else {
            return;
        };
        let Some(raw) = url.get("raw").and_then(Value::as_str) else {
            return;
        };
        if !raw.contains(self.options.local_host.as_str()) {
            return;
        }

        let base_url = placeholder(&self.options.base_url_variable);
        if let Some(rewritten) = replace_origin(raw, &self.options.local_origin, &base_url) {
            debug!(path, url = %rewritten, "rewrote request URL");
            url.insert("raw".to_string(), Value::String(rewritten));
            report.urls_rewritten += 1;
        }

        if url.get("host") == Some(&json!([self.options.local_host])) {
            url.insert("host".to_string(), json!([base_url]));
            report.hosts_rewritten += 1;
        }
    }
}
