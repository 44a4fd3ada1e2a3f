//! Transform warnings
//!
//! Everything the rewrite skips or cannot handle is recorded here instead of
//! aborting the run. Severities are ordered so callers can pick a threshold.

use std::fmt;

/// How much a warning matters, from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WarningSeverity {
    /// A node was skipped because it is neither a folder nor a request
    Info,
    /// Part of a request was left as it was
    Warning,
    /// The document could not be rewritten at all
    Error,
}

impl WarningSeverity {
    /// Lower-case label used when printing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Something the rewrite left alone, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformWarning {
    /// Slash-joined item names from the root, e.g. `collection/Auth/Login`
    pub path: String,
    /// What was left alone and why
    pub message: String,
    /// How much it matters
    pub severity: WarningSeverity,
}

impl TransformWarning {
    fn at(
        severity: WarningSeverity,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity,
        }
    }

    /// A skipped node.
    pub fn info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(WarningSeverity::Info, path, message)
    }

    /// A request field that could not be rewritten.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(WarningSeverity::Warning, path, message)
    }

    /// A document that could not be rewritten.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(WarningSeverity::Error, path, message)
    }
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.message)
    }
}

/// Warning counts by severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WarningStats {
    /// Skipped nodes
    pub info_count: usize,
    /// Request fields left alone
    pub warning_count: usize,
    /// Documents left alone
    pub error_count: usize,
}

impl<'a> FromIterator<&'a TransformWarning> for WarningStats {
    fn from_iter<I: IntoIterator<Item = &'a TransformWarning>>(warnings: I) -> Self {
        warnings.into_iter().fold(Self::default(), |mut stats, w| {
            match w.severity {
                WarningSeverity::Info => stats.info_count += 1,
                WarningSeverity::Warning => stats.warning_count += 1,
                WarningSeverity::Error => stats.error_count += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = TransformWarning::warning("collection/Login", "raw body is not JSON");
        assert_eq!(
            warning.to_string(),
            "[warning] collection/Login: raw body is not JSON"
        );
    }

    #[test]
    fn test_severities_are_ordered() {
        assert!(WarningSeverity::Info < WarningSeverity::Warning);
        assert!(WarningSeverity::Warning < WarningSeverity::Error);
    }

    #[test]
    fn test_stats_count_by_severity() {
        let warnings = [
            TransformWarning::info("a", "skipped"),
            TransformWarning::warning("b", "body"),
            TransformWarning::warning("c", "body"),
            TransformWarning::error("d", "shape"),
        ];

        let stats: WarningStats = warnings.iter().collect();
        assert_eq!(
            stats,
            WarningStats {
                info_count: 1,
                warning_count: 2,
                error_count: 1,
            }
        );
    }
}
