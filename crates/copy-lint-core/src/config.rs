//! Configuration types for copy-lint.

use crate::layer::{LayerFilter, VisibilityFilter};
use crate::types::Severity;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for copy-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "basic", "whitespace").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Layer filters applied to the report.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Per-guideline configurations, keyed by guideline id.
    #[serde(default)]
    pub guidelines: HashMap<String, GuidelineConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a guideline is enabled. Unconfigured guidelines are enabled.
    #[must_use]
    pub fn is_guideline_enabled(&self, id: &str) -> bool {
        self.guidelines
            .get(id)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a guideline.
    #[must_use]
    pub fn guideline_severity(&self, id: &str) -> Option<Severity> {
        self.guidelines.get(id).and_then(|c| c.severity)
    }

    /// Effective failure threshold (default: error).
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Filters applied to the layers shown in a report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Styling/outcome filter.
    #[serde(default)]
    pub layers: LayerFilter,
    /// Visibility filter.
    #[serde(default)]
    pub visibility: VisibilityFilter,
}

/// Per-guideline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidelineConfig {
    /// Whether this guideline is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity of violations from this guideline (default: error).
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(copy_lint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(copy_lint::config::parse),
        help("run `copy-lint init` to generate a commented example")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}
