//! Summary of a transformation run

use crate::warning::{TransformWarning, WarningSeverity, WarningStats};

/// What a rewrite did to a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Whether the document had the shape of a collection. When false the
    /// document was passed through untouched.
    pub valid: bool,
    /// Variables appended to the `variable` list
    pub variables_added: usize,
    /// Folders visited
    pub groups_visited: usize,
    /// Requests visited
    pub requests_visited: usize,
    /// Requests classified as part of the auth flow
    pub auth_requests: usize,
    /// Raw bodies where at least one credential was replaced
    pub bodies_rewritten: usize,
    /// Raw bodies re-indented without any credential to replace
    pub bodies_reformatted: usize,
    /// Token capture events appended
    pub events_appended: usize,
    /// Requests given a bearer `auth` block
    pub bearer_auth_added: usize,
    /// `url.raw` values rewritten to the base URL placeholder
    pub urls_rewritten: usize,
    /// `url.host` values rewritten to the base URL placeholder
    pub hosts_rewritten: usize,
    /// Things that were skipped or left as they were
    pub warnings: Vec<TransformWarning>,
}

impl TransformReport {
    /// Records a warning.
    pub fn push(&mut self, warning: TransformWarning) {
        self.warnings.push(warning);
    }

    /// Warning counts by severity.
    #[must_use]
    pub fn stats(&self) -> WarningStats {
        self.warnings.iter().collect()
    }

    /// Warnings at or above `min`, in the order they were recorded.
    pub fn warnings_from(
        &self,
        min: WarningSeverity,
    ) -> impl Iterator<Item = &TransformWarning> {
        self.warnings.iter().filter(move |w| w.severity >= min)
    }

    /// Whether the run changed anything in the document.
    #[must_use]
    pub const fn changed_anything(&self) -> bool {
        self.variables_added
            + self.bodies_rewritten
            + self.bodies_reformatted
            + self.events_appended
            + self.bearer_auth_added
            + self.urls_rewritten
            + self.hosts_rewritten
            > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_changed_nothing() {
        let report = TransformReport::default();
        assert!(!report.changed_anything());
        assert_eq!(report.stats(), WarningStats::default());
    }

    #[test]
    fn test_reformatted_body_counts_as_a_change() {
        let report = TransformReport {
            bodies_reformatted: 1,
            ..TransformReport::default()
        };
        assert!(report.changed_anything());
    }

    #[test]
    fn test_warnings_from_threshold() {
        let mut report = TransformReport::default();
        report.push(TransformWarning::info("collection/x", "skipped"));
        report.push(TransformWarning::warning("collection/Login", "raw body is not JSON"));
        report.push(TransformWarning::error("collection", "not a collection"));

        let paths: Vec<_> = report
            .warnings_from(WarningSeverity::Warning)
            .map(|w| w.path.as_str())
            .collect();
        assert_eq!(paths, vec!["collection/Login", "collection"]);

        let errors: Vec<_> = report.warnings_from(WarningSeverity::Error).collect();
        assert_eq!(errors.len(), 1);
    }
}
