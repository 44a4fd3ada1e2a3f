//! Per-request rewriting

use postenv_domain::{
    NodeKind, PostmanAuth, PostmanEvent, RequestFlow, TransformReport, TransformWarning,
};
use serde_json::{Map, Value};
use tracing::debug;

use super::CollectionTransformer;

impl CollectionTransformer {
    /// Rewrites one request node according to its flow.
    ///
    /// Auth requests get placeholder credentials and the token capture
    /// event; every other request gets bearer auth unless it has its own.
    /// URLs are rewritten either way.
    pub(super) fn rewrite_request(
        &self,
        node: &mut Value,
        path: &str,
        report: &mut TransformReport,
    ) {
        let triggers = self.options.auth_triggers.as_slice();
        let flow = RequestFlow::classify(NodeKind::name_of(node), triggers);
        debug!(path, %flow, "rewriting request");

        let Some(fields) = node.as_object_mut() else {
            return;
        };
        if flow == RequestFlow::Auth {
            report.auth_requests += 1;
        }

        match fields.get_mut("request").and_then(Value::as_object_mut) {
            Some(request) => {
                match flow {
                    RequestFlow::Auth => self.rewrite_credentials(request, path, report),
                    RequestFlow::Bearer => self.ensure_bearer_auth(request, path, report),
                }
                self.rewrite_url(request, path, report);
            }
            None => report.push(TransformWarning::warning(
                path,
                "`request` is not an object; body, auth and URL were not rewritten",
            )),
        }

        if flow == RequestFlow::Auth {
            Self::append_token_capture(fields, path, report);
        }
    }

    fn ensure_bearer_auth(
        &self,
        request: &mut Map<String, Value>,
        path: &str,
        report: &mut TransformReport,
    ) {
        if request.contains_key("auth") {
            return;
        }
        debug!(path, "adding bearer auth");
        let auth = PostmanAuth::bearer_from_variable(&self.options.access_token_variable);
        request.insert("auth".to_string(), auth.into());
        report.bearer_auth_added += 1;
    }

    /// Appends the token capture test event unless an identical one is there.
    fn append_token_capture(
        fields: &mut Map<String, Value>,
        path: &str,
        report: &mut TransformReport,
    ) {
        let event = Value::from(PostmanEvent::token_capture());
        let events = fields
            .entry("event")
            .or_insert_with(|| Value::Array(Vec::new()));
        let Some(events) = events.as_array_mut() else {
            report.push(TransformWarning::warning(
                path,
                "`event` is not a list; token capture script was not added",
            ));
            return;
        };
        if events.contains(&event) {
            debug!(path, "token capture event already present");
            return;
        }
        events.push(event);
        report.events_appended += 1;
    }
}
