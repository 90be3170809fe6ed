//! Core types for lint violations and reports.

use serde::{Deserialize, Serialize};

/// Severity level for guideline violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(format!(
                "unknown severity `{other}`. Valid values: error, warning, info"
            )),
        }
    }
}

/// A guideline failure on one text layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Guideline id (e.g., "sentence-case").
    pub guideline: String,
    /// Guideline display name.
    pub name: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Host id of the offending layer.
    pub layer_id: String,
    /// Name of the offending layer.
    pub layer_name: String,
    /// Text content that failed.
    pub text: String,
    /// Guideline description.
    pub message: String,
}

impl Violation {
    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with(&self.severity.to_string())
    }

    /// Like [`Violation::format`], with `severity` as the severity label
    /// (e.g., colored for a terminal).
    #[must_use]
    pub fn format_with(&self, severity: &str) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at layer {:?} ({})\n",
            self.guideline, self.name, self.layer_name, self.layer_id,
        );
        let _ = writeln!(output, "  {}: {}", severity, self.message);
        let _ = writeln!(output, "  = text: {:?}", self.text);
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {} {:?}",
            self.layer_id, self.severity, self.guideline, self.message, self.text
        )
    }
}

/// Pass/fail counts over a set of layers.
///
/// A layer passes when every evaluated guideline passed on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineStats {
    /// Layers counted.
    pub total: usize,
    /// Layers passing every guideline.
    pub passing: usize,
    /// Layers failing at least one guideline.
    pub failing: usize,
}

impl GuidelineStats {
    /// Share of passing layers, in percent. Zero layers yields zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn passing_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passing as f64 / self.total as f64 * 100.0
    }
}

/// Shared text style usage over a set of layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleStats {
    /// Layers counted.
    pub total: usize,
    /// Layers with a shared text style.
    pub with_style: usize,
    /// Layers without a shared text style.
    pub without_style: usize,
}

/// Result of linting a set of text layers.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintReport {
    /// All violations found, in layer order then guideline registration order.
    pub violations: Vec<Violation>,
    /// Number of layers checked.
    pub layers_checked: usize,
    /// Guideline pass/fail counts.
    pub guideline_stats: GuidelineStats,
    /// Text style usage.
    pub text_style_stats: TextStyleStats,
}

impl LintReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations filtered by guideline id.
    #[must_use]
    pub fn by_guideline(&self, id: &str) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.guideline == id).collect()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity: Severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Formats the summary line printed after the violations.
    #[must_use]
    pub fn summary(&self) -> String {
        let (errors, warnings, infos) = self.count_by_severity();
        format!(
            "Found {} error(s), {} warning(s), {} info(s) in {} layer(s) ({} passing, {} failing, {} unstyled)",
            errors,
            warnings,
            infos,
            self.layers_checked,
            self.guideline_stats.passing,
            self.guideline_stats.failing,
            self.text_style_stats.without_style,
        )
    }
}
