//! Effective settings for a `check` run.
//!
//! The config file is looked up next to the layer export being checked:
//! `copy-lint.toml`, then `.copy-lint.toml`, then
//! `~/.copy-lint/config.toml` (`$COPY_LINT_CONFIG_DIR` replaces the
//! directory). Stdin and `--text` runs search the current directory.
//! `--config` skips the lookup. Command-line flags override the file.

use anyhow::{Context, Result};
use copy_lint_core::{Config, LayerFilter, Severity, VisibilityFilter};
use copy_lint_rules::{all_guidelines, Preset};
use std::path::{Path, PathBuf};

use crate::commands::diagnostic;

const PROJECT_CONFIG_NAMES: [&str; 2] = ["copy-lint.toml", ".copy-lint.toml"];
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--preset`.
    pub preset: Option<Preset>,
    /// `--filter`.
    pub filter: Option<LayerFilter>,
    /// `--visibility`.
    pub visibility: Option<VisibilityFilter>,
}

/// Config file contents merged with command-line overrides.
#[derive(Debug)]
pub struct Settings {
    /// Config handed to the linter, filters already overridden.
    pub config: Config,
    /// Guideline set to lint with.
    pub preset: Preset,
    /// Lowest severity that fails the run.
    pub fail_on: Severity,
    /// File the config was read from, if any.
    pub origin: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings for linting `input` (`-` or `None` means no file).
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or names an
    /// unknown preset.
    pub fn resolve(
        input: Option<&Path>,
        explicit: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Self> {
        Self::resolve_in(input, explicit, global_config_dir().as_deref(), overrides)
    }

    fn resolve_in(
        input: Option<&Path>,
        explicit: Option<&Path>,
        global_dir: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Self> {
        let origin = explicit
            .map(Path::to_path_buf)
            .or_else(|| find_config(&search_dir(input), global_dir));

        let mut config = match &origin {
            Some(path) => {
                tracing::debug!("Using config: {}", path.display());
                Config::from_file(path)
                    .map_err(diagnostic)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?
            }
            None => Config::default(),
        };

        for id in unknown_guideline_ids(&config) {
            tracing::warn!("Unknown guideline in config: {}", id);
        }

        let preset = match overrides.preset {
            Some(preset) => preset,
            None => config
                .preset
                .as_deref()
                .map(str::parse::<Preset>)
                .transpose()
                .map_err(anyhow::Error::msg)?
                .unwrap_or_default(),
        };

        if let Some(filter) = overrides.filter {
            config.filter.layers = filter;
        }
        if let Some(visibility) = overrides.visibility {
            config.filter.visibility = visibility;
        }

        Ok(Self {
            fail_on: config.fail_on(),
            config,
            preset,
            origin,
        })
    }
}

/// Directory whose config applies to `input`.
fn search_dir(input: Option<&Path>) -> PathBuf {
    input
        .filter(|path| *path != Path::new("-"))
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// First existing config file for `dir`, falling back to the global one.
fn find_config(dir: &Path, global_dir: Option<&Path>) -> Option<PathBuf> {
    PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .chain(global_dir.map(|global| global.join(GLOBAL_CONFIG_NAME)))
        .find(|candidate| candidate.is_file())
}

/// Configured ids that no built-in guideline has.
///
/// Ids left out by the selected preset are not reported.
fn unknown_guideline_ids(config: &Config) -> Vec<&str> {
    let known = all_guidelines();
    let mut unknown: Vec<&str> = config
        .guidelines
        .keys()
        .map(String::as_str)
        .filter(|id| !known.iter().any(|g| g.id() == *id))
        .collect();
    unknown.sort_unstable();
    unknown
}

/// `$COPY_LINT_CONFIG_DIR`, else `~/.copy-lint/`.
fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("COPY_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".copy-lint")))
}
