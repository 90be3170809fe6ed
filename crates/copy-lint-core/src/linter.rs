//! Linter for orchestrating guideline execution over text layers.

use crate::config::Config;
use crate::guideline::Guideline;
use crate::layer::{filter_layers, TextLayer};
use crate::registry::Registry;
use crate::result::ValidationResult;
use crate::stats::{guideline_stats, text_style_stats};
use crate::types::{LintReport, Severity, Violation};

use miette::Diagnostic;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a linter.
#[derive(Debug, Error, Diagnostic)]
pub enum LinterError {
    /// A guideline named in the selection is not registered.
    #[error("Unknown guideline: {0}")]
    #[diagnostic(
        code(copy_lint::linter::unknown_guideline),
        help("run `copy-lint list-rules` to see the available ids")
    )]
    UnknownGuideline(String),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    registry: Registry,
    config: Option<Config>,
    only: Vec<String>,
}

impl LinterBuilder {
    /// Creates a new builder with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the registry of guidelines to evaluate.
    #[must_use]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Restricts evaluation to the given guideline ids.
    #[must_use]
    pub fn only<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected guideline id is not in the registry.
    pub fn build(self) -> Result<Linter, LinterError> {
        if let Some(unknown) = self.only.iter().find(|id| !self.registry.contains(id)) {
            return Err(LinterError::UnknownGuideline(unknown.clone()));
        }

        let config = self.config.unwrap_or_default();

        for id in config.guidelines.keys() {
            if !self.registry.contains(id) {
                debug!("Configured guideline is not in this registry: {}", id);
            }
        }

        let active = self
            .registry
            .guidelines()
            .iter()
            .filter(|g| self.only.is_empty() || self.only.iter().any(|id| id == g.id()))
            .filter(|g| {
                let enabled = config.is_guideline_enabled(g.id());
                if !enabled {
                    debug!("Skipping disabled guideline: {}", g.id());
                }
                enabled
            })
            .map(|g| g.id())
            .collect();

        Ok(Linter {
            registry: self.registry,
            config,
            active,
        })
    }
}

/// Runs guidelines over text samples and host text layers.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    registry: Registry,
    config: Config,
    active: Vec<&'static str>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Guidelines that will be evaluated, in registration order.
    pub fn active_guidelines(&self) -> impl Iterator<Item = &Guideline> {
        self.registry
            .guidelines()
            .iter()
            .filter(|g| self.is_active(g))
    }

    fn is_active(&self, guideline: &Guideline) -> bool {
        self.active.contains(&guideline.id())
    }

    /// Validates a single text sample against the active guidelines.
    #[must_use]
    pub fn validate(&self, text: &str) -> ValidationResult {
        self.registry.validate_with(text, |g| self.is_active(g))
    }

    /// Fills in `guideline_results` on every layer.
    ///
    /// Layers are validated in parallel; guidelines share no state.
    pub fn annotate(&self, layers: &mut [TextLayer]) {
        layers.par_iter_mut().for_each(|layer| {
            layer.guideline_results = Some(self.validate(&layer.characters));
        });
    }

    /// Validates `layers` in place and reports their violations.
    ///
    /// Statistics cover every layer; violations are listed only for the
    /// layers kept by the configured filters.
    pub fn lint(&self, layers: &mut [TextLayer]) -> LintReport {
        info!(
            "Linting {} layers with {} guidelines",
            layers.len(),
            self.active.len()
        );

        self.annotate(layers);

        let mut report = LintReport::new();
        report.layers_checked = layers.len();
        report.guideline_stats = guideline_stats(layers.iter());
        report.text_style_stats = text_style_stats(layers.iter());

        let shown = filter_layers(
            layers,
            self.config.filter.layers,
            self.config.filter.visibility,
        );
        for layer in shown {
            report.violations.extend(self.violations_for(layer));
        }

        info!(
            "Lint complete: {} violations in {} layers",
            report.violations.len(),
            report.layers_checked
        );

        report
    }

    /// Builds violations for the failing guidelines of an annotated layer.
    fn violations_for(&self, layer: &TextLayer) -> Vec<Violation> {
        let Some(results) = &layer.guideline_results else {
            return Vec::new();
        };

        self.active_guidelines()
            .filter(|g| results.get(g.id()) == Some(false))
            .map(|g| Violation {
                guideline: g.id().to_string(),
                name: g.name().to_string(),
                severity: self.severity_for(g.id()),
                layer_id: layer.id.clone(),
                layer_name: layer.name.clone(),
                text: layer.characters.clone(),
                message: g.description().to_string(),
            })
            .collect()
    }

    fn severity_for(&self, id: &str) -> Severity {
        self.config.guideline_severity(id).unwrap_or(Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuidelineConfig;
    use crate::layer::LayerFilter;

    fn no_bang(text: &str) -> bool {
        !text.contains('!')
    }

    fn not_empty(text: &str) -> bool {
        !text.is_empty()
    }

    fn registry() -> Registry {
        Registry::builder()
            .guideline(Guideline::new("no-bang", "No bang", "No exclamation", no_bang))
            .guideline(Guideline::new("not-empty", "Not empty", "Must have text", not_empty))
            .build()
            .expect("Failed to build registry")
    }

    fn disable(config: &mut Config, id: &str) {
        config.guidelines.insert(
            id.to_string(),
            GuidelineConfig {
                enabled: Some(false),
                severity: None,
            },
        );
    }

    #[test]
    fn test_validate_uses_all_guidelines_by_default() {
        let linter = Linter::builder().registry(registry()).build().unwrap();
        let result = linter.validate("Hi!");
        assert_eq!(result.get("no-bang"), Some(false));
        assert_eq!(result.get("not-empty"), Some(true));
    }

    #[test]
    fn test_disabled_guideline_is_not_evaluated() {
        let mut config = Config::default();
        disable(&mut config, "no-bang");

        let linter = Linter::builder()
            .registry(registry())
            .config(config)
            .build()
            .unwrap();

        let result = linter.validate("Hi!");
        assert_eq!(result.get("no-bang"), None);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn config_for_guideline_outside_registry_is_ignored() {
        let mut config = Config::default();
        config.guidelines.insert(
            "sentence-case".to_string(),
            GuidelineConfig {
                enabled: Some(true),
                severity: Some(Severity::Warning),
            },
        );

        let linter = Linter::builder()
            .registry(registry())
            .config(config)
            .build()
            .unwrap();

        let ids: Vec<&str> = linter.active_guidelines().map(Guideline::id).collect();
        assert_eq!(ids, ["no-bang", "not-empty"]);
    }

    #[test]
    fn test_only_restricts_guidelines() {
        let linter = Linter::builder()
            .registry(registry())
            .only(["not-empty"])
            .build()
            .unwrap();
        let ids: Vec<&str> = linter.active_guidelines().map(Guideline::id).collect();
        assert_eq!(ids, ["not-empty"]);
    }

    #[test]
    fn test_only_rejects_unknown_id() {
        let result = Linter::builder()
            .registry(registry())
            .only(["no-such-rule"])
            .build();
        assert!(matches!(result, Err(LinterError::UnknownGuideline(id)) if id == "no-such-rule"));
    }

    #[test]
    fn test_lint_reports_violations_and_stats() {
        let linter = Linter::builder().registry(registry()).build().unwrap();
        let mut layers = vec![
            TextLayer::new("1", "ok", "Fine"),
            TextLayer::new("2", "loud", "Wow!"),
            TextLayer::new("3", "blank", "").with_text_style("S:1", "Body"),
        ];

        let report = linter.lint(&mut layers);

        assert_eq!(report.layers_checked, 3);
        assert_eq!(report.guideline_stats.passing, 1);
        assert_eq!(report.guideline_stats.failing, 2);
        assert_eq!(report.text_style_stats.with_style, 1);
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].layer_id, "2");
        assert_eq!(report.violations[0].guideline, "no-bang");
        assert_eq!(report.violations[1].guideline, "not-empty");
        assert!(report.has_errors());
        assert!(layers.iter().all(|l| l.guideline_results.is_some()));
    }

    #[test]
    fn test_severity_override() {
        let mut config = Config::default();
        config.guidelines.insert(
            "no-bang".to_string(),
            GuidelineConfig {
                enabled: None,
                severity: Some(Severity::Warning),
            },
        );
        let linter = Linter::builder()
            .registry(registry())
            .config(config)
            .build()
            .unwrap();

        let report = linter.lint(&mut [TextLayer::new("1", "loud", "Wow!")]);
        assert_eq!(report.violations[0].severity, Severity::Warning);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_filter_limits_listed_violations_not_stats() {
        let mut config = Config::default();
        config.filter.layers = LayerFilter::UnstyledOnly;
        let linter = Linter::builder()
            .registry(registry())
            .config(config)
            .build()
            .unwrap();

        let mut layers = vec![
            TextLayer::new("1", "styled", "Wow!").with_text_style("S:1", "Body"),
            TextLayer::new("2", "plain", "Wow!"),
        ];
        let report = linter.lint(&mut layers);

        assert_eq!(report.guideline_stats.failing, 2);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].layer_id, "2");
    }

    #[test]
    fn annotate_preserves_order() {
        let linter = Linter::builder().registry(registry()).build().unwrap();
        let mut layers: Vec<TextLayer> = (0..64)
            .map(|i| TextLayer::new(i.to_string(), "n", if i % 2 == 0 { "Even" } else { "Odd!" }))
            .collect();

        linter.annotate(&mut layers);

        for (i, layer) in layers.iter().enumerate() {
            assert_eq!(layer.id, i.to_string());
            assert_eq!(layer.passes_all(), i % 2 == 0);
        }
    }
}
