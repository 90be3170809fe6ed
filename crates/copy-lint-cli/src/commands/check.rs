//! Check command implementation.

use anyhow::{bail, Context, Result};
use copy_lint_core::{
    JsonLayerSource, LayerFilter, LayerSource, Linter, TextLayer, VisibilityFilter,
};
use copy_lint_rules::Preset;
use std::path::{Path, PathBuf};

use super::diagnostic;
use crate::settings::{Overrides, Settings};
use crate::{LayerFilterArg, OutputFormat, PresetArg, VisibilityArg};

/// Arguments of the check command.
pub struct CheckOptions {
    /// Layer export path, `-` for stdin.
    pub input: Option<PathBuf>,
    /// Literal samples linted as ad hoc layers.
    pub text: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated guideline ids.
    pub guidelines: Option<String>,
    /// Preset override.
    pub preset: Option<PresetArg>,
    /// Layer filter override.
    pub filter: Option<LayerFilterArg>,
    /// Visibility filter override.
    pub visibility: Option<VisibilityArg>,
}

/// Runs the check command.
pub fn run(options: CheckOptions, config_path: Option<&Path>) -> Result<()> {
    let overrides = Overrides {
        preset: options.preset.map(Preset::from),
        filter: options.filter.map(LayerFilter::from),
        visibility: options.visibility.map(VisibilityFilter::from),
    };
    let Settings {
        config,
        preset,
        fail_on,
        ..
    } = Settings::resolve(options.input.as_deref(), config_path, overrides)?;

    let mut builder = Linter::builder().registry(preset.registry()).config(config);
    if let Some(ids) = &options.guidelines {
        builder = builder.only(ids.split(',').map(str::trim).filter(|id| !id.is_empty()));
    }
    let linter = builder
        .build()
        .map_err(diagnostic)
        .context("Failed to build linter")?;

    let mut layers = load_layers(options.input.as_deref(), options.text)?;

    tracing::info!(
        "Checking {} layers with preset {} ({} guidelines)",
        layers.len(),
        preset,
        linter.active_guidelines().count()
    );

    let report = linter.lint(&mut layers);

    super::output::print(&report, &layers, options.format)?;

    if report.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads layers from `--text` samples, stdin, or an export file.
fn load_layers(input: Option<&Path>, text: Vec<String>) -> Result<Vec<TextLayer>> {
    if !text.is_empty() {
        return Ok(text_layers(text));
    }

    match input {
        Some(path) if path == Path::new("-") => {
            JsonLayerSource::from_reader(std::io::stdin().lock())
                .map_err(diagnostic)
                .context("Failed to read layers from stdin")
        }
        Some(path) => JsonLayerSource::new(path)
            .text_layers()
            .map_err(diagnostic)
            .with_context(|| format!("Failed to read layers: {}", path.display())),
        None => bail!("No input given. Pass a layer export, `-` for stdin, or --text."),
    }
}

/// Wraps literal samples as visible, unstyled layers.
fn text_layers(samples: Vec<String>) -> Vec<TextLayer> {
    samples
        .into_iter()
        .enumerate()
        .map(|(i, sample)| {
            let n = i + 1;
            TextLayer::new(format!("text:{n}"), format!("Text {n}"), sample)
        })
        .collect()
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Recommended => Self::Recommended,
            PresetArg::Basic => Self::Basic,
            PresetArg::Whitespace => Self::Whitespace,
        }
    }
}

impl From<LayerFilterArg> for LayerFilter {
    fn from(arg: LayerFilterArg) -> Self {
        match arg {
            LayerFilterArg::All => Self::All,
            LayerFilterArg::UnstyledOnly => Self::UnstyledOnly,
            LayerFilterArg::FailingOnly => Self::FailingOnly,
        }
    }
}

impl From<VisibilityArg> for VisibilityFilter {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::All => Self::All,
            VisibilityArg::Visible => Self::Visible,
            VisibilityArg::Hidden => Self::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn text_samples_become_numbered_layers() {
        let layers = text_layers(vec!["Hello world".to_string(), "Save  now".to_string()]);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].id, "text:1");
        assert_eq!(layers[1].name, "Text 2");
        assert_eq!(layers[1].characters, "Save  now");
        assert!(layers.iter().all(|l| l.visible && !l.is_styled()));
    }

    #[test]
    fn text_samples_take_priority_over_input() {
        let layers = load_layers(
            Some(Path::new("/nonexistent/layers.json")),
            vec!["Hello".to_string()],
        )
        .unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn loads_layers_from_export_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("layers.json");
        std::fs::write(
            &path,
            r#"{"layers":[{"id":"1:2","name":"Title","characters":"Hello world"}]}"#,
        )
        .unwrap();

        let layers = load_layers(Some(&path), Vec::new()).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].characters, "Hello world");
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(load_layers(None, Vec::new()).is_err());
        assert!(load_layers(Some(Path::new("/nonexistent/layers.json")), Vec::new()).is_err());
    }

    #[test]
    fn filter_args_map_to_core_filters() {
        assert_eq!(
            LayerFilter::from(LayerFilterArg::UnstyledOnly),
            LayerFilter::UnstyledOnly
        );
        assert_eq!(
            VisibilityFilter::from(VisibilityArg::Hidden),
            VisibilityFilter::Hidden
        );
        assert_eq!(Preset::from(PresetArg::Basic), Preset::Basic);
    }
}
