//! Collection transformer
//!
//! Rewrites a Postman collection so that it reads credentials, tokens and
//! the server origin from variables. The document is handled as a raw JSON
//! tree; keys the rewrite does not touch keep their values and order.
//!
//! Nothing in here fails. Shapes the rewrite cannot handle are left as they
//! are and recorded in the [`TransformReport`].

mod body;
mod request;
mod url;

use std::collections::HashSet;

use postenv_domain::{
    NodeKind, PostmanVariable, TransformOptions, TransformReport, TransformWarning,
    check_collection_shape,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use body::{RewrittenBody, rewrite_raw_credentials};
pub use url::replace_origin;

/// Path prefix used in warnings for the document root.
const ROOT_PATH: &str = "collection";

/// A rewritten document together with what was done to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    /// The rewritten document, or the input unchanged if it was not a collection.
    pub document: Value,
    /// Counters and warnings from the run.
    pub report: TransformReport,
}

/// Rewrites collections to use environment variables.
#[derive(Debug, Clone, Default)]
pub struct CollectionTransformer {
    options: TransformOptions,
}

impl CollectionTransformer {
    /// Create a transformer with the default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with custom settings
    #[must_use]
    pub const fn with_options(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Returns the settings in use.
    #[must_use]
    pub const fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Rewrites a collection document.
    ///
    /// A document without `info` or `item` is returned unchanged with an
    /// error-level warning in the report.
    #[must_use]
    pub fn transform(&self, mut document: Value) -> Transformed {
        let mut report = TransformReport::default();
        self.apply(&mut document, &mut report);
        Transformed { document, report }
    }

    fn apply(&self, document: &mut Value, report: &mut TransformReport) {
        if let Err(e) = check_collection_shape(document) {
            warn!(error = %e, "Invalid Postman collection format");
            report.push(TransformWarning::error(
                ROOT_PATH,
                format!("Invalid Postman collection format: {e}"),
            ));
            return;
        }
        let Some(root) = document.as_object_mut() else {
            return;
        };
        report.valid = true;

        self.seed_variables(root, report);
        if let Some(items) = root.get_mut("item") {
            self.transform_items(items, ROOT_PATH, report);
        }
    }

    /// Appends every required variable the collection does not define yet.
    fn seed_variables(&self, root: &mut Map<String, Value>, report: &mut TransformReport) {
        let variables = root
            .entry("variable")
            .or_insert_with(|| Value::Array(Vec::new()));
        let Some(variables) = variables.as_array_mut() else {
            warn!("`variable` is not a list, leaving it alone");
            report.push(TransformWarning::warning(
                ROOT_PATH,
                "`variable` is not a list; required variables were not added",
            ));
            return;
        };

        let mut existing: HashSet<String> = variables
            .iter()
            .filter_map(PostmanVariable::key_of)
            .map(ToString::to_string)
            .collect();

        for key in &self.options.required_variables {
            if existing.insert(key.clone()) {
                debug!(key = %key, "adding collection variable");
                variables.push(PostmanVariable::empty(key.as_str()).into());
                report.variables_added += 1;
            }
        }
    }

    /// Walks an `item` list depth-first, in document order.
    fn transform_items(&self, items: &mut Value, path: &str, report: &mut TransformReport) {
        let Some(nodes) = items.as_array_mut() else {
            report.push(TransformWarning::warning(
                path,
                "`item` is not a list; nothing below it was rewritten",
            ));
            return;
        };

        for node in nodes {
            let node_path = format!("{path}/{}", NodeKind::name_of(node));
            match NodeKind::of(node) {
                NodeKind::Group => {
                    report.groups_visited += 1;
                    if let Some(children) = node.get_mut("item") {
                        self.transform_items(children, &node_path, report);
                    }
                }
                NodeKind::Request => {
                    report.requests_visited += 1;
                    self.rewrite_request(node, &node_path, report);
                }
                NodeKind::Other => {
                    report.push(TransformWarning::info(
                        node_path,
                        "neither a folder nor a request, skipped",
                    ));
                }
            }
        }
    }
}
