//! Text layers exported by the host document and filters over them.

use crate::result::ValidationResult;
use serde::{Deserialize, Serialize};

/// Font family and style of a text layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    /// Font family (e.g., "Inter").
    pub family: String,
    /// Font style (e.g., "Regular").
    pub style: String,
}

/// A text node in the host document.
///
/// Field names follow the host's camelCase export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    /// Host node id.
    pub id: String,
    /// Layer name shown in the host's layer panel.
    pub name: String,
    /// Text content of the layer.
    pub characters: String,
    /// Font of the layer.
    #[serde(default)]
    pub font_name: FontName,
    /// Font size in pixels.
    #[serde(default)]
    pub font_size: f64,
    /// Whether the layer is visible.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Id of the shared text style applied to the layer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style_id: Option<String>,
    /// Display name of the shared text style, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style_name: Option<String>,
    /// Guideline outcomes, filled in by the linter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guideline_results: Option<ValidationResult>,
}

fn default_true() -> bool {
    true
}

impl TextLayer {
    /// Creates a visible, unstyled layer with default font metadata.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        characters: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            characters: characters.into(),
            font_name: FontName::default(),
            font_size: 0.0,
            visible: true,
            text_style_id: None,
            text_style_name: None,
            guideline_results: None,
        }
    }

    /// Sets the shared text style.
    #[must_use]
    pub fn with_text_style(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.text_style_id = Some(id.into());
        self.text_style_name = Some(name.into());
        self
    }

    /// Sets visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns true if a shared text style is applied.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.text_style_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Returns true if the layer has been validated and every guideline passed.
    ///
    /// Layers that were never validated count as failing.
    #[must_use]
    pub fn passes_all(&self) -> bool {
        self.guideline_results
            .as_ref()
            .is_some_and(ValidationResult::all_passed)
    }
}

/// Which layers to keep based on styling and guideline outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerFilter {
    /// Keep every layer.
    #[default]
    All,
    /// Keep layers without a shared text style.
    UnstyledOnly,
    /// Keep layers failing at least one guideline.
    FailingOnly,
}

impl LayerFilter {
    /// Returns true if `layer` is kept by this filter.
    #[must_use]
    pub fn matches(self, layer: &TextLayer) -> bool {
        match self {
            Self::All => true,
            Self::UnstyledOnly => !layer.is_styled(),
            Self::FailingOnly => !layer.passes_all(),
        }
    }
}

/// Which layers to keep based on visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityFilter {
    /// Keep every layer.
    #[default]
    All,
    /// Keep visible layers.
    Visible,
    /// Keep hidden layers.
    Hidden,
}

impl VisibilityFilter {
    /// Returns true if `layer` is kept by this filter.
    #[must_use]
    pub fn matches(self, layer: &TextLayer) -> bool {
        match self {
            Self::All => true,
            Self::Visible => layer.visible,
            Self::Hidden => !layer.visible,
        }
    }
}

/// Returns the layers kept by both filters, in input order.
#[must_use]
pub fn filter_layers<'a>(
    layers: &'a [TextLayer],
    filter: LayerFilter,
    visibility: VisibilityFilter,
) -> Vec<&'a TextLayer> {
    layers
        .iter()
        .filter(|layer| filter.matches(layer) && visibility.matches(layer))
        .collect()
}
