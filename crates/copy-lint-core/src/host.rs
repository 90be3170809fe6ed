//! Boundary to the host document.
//!
//! The host owns the node tree, selection, and page state. This module only
//! describes what the linter consumes from it: a source of text layers and
//! change notifications.

use crate::layer::TextLayer;

use miette::Diagnostic;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading layers from the host.
#[derive(Debug, Error, Diagnostic)]
pub enum LayerSourceError {
    /// IO error reading the export.
    #[error("Failed to read layers from {path}: {source}")]
    #[diagnostic(code(copy_lint::host::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The export is not valid layer JSON.
    #[error("Failed to decode layers: {0}")]
    #[diagnostic(
        code(copy_lint::host::decode),
        help("expected a JSON array of text layers or an object with a `layers` array")
    )]
    Decode(#[from] serde_json::Error),
}

/// Supplies the text layers currently in scope (e.g., the selection).
pub trait LayerSource {
    /// Returns the text layers to lint.
    ///
    /// # Errors
    ///
    /// Returns an error if the host data cannot be read or decoded.
    fn text_layers(&self) -> Result<Vec<TextLayer>, LayerSourceError>;
}

/// Accepted shapes of a layer export.
#[derive(Deserialize)]
#[serde(untagged)]
enum LayerExport {
    Bare(Vec<TextLayer>),
    Wrapped { layers: Vec<TextLayer> },
}

impl From<LayerExport> for Vec<TextLayer> {
    fn from(export: LayerExport) -> Self {
        match export {
            LayerExport::Bare(layers) | LayerExport::Wrapped { layers } => layers,
        }
    }
}

/// Reads layers from a JSON export file.
#[derive(Debug, Clone)]
pub struct JsonLayerSource {
    path: PathBuf,
}

impl JsonLayerSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the export path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes layers from any reader (e.g., stdin).
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid layer export.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TextLayer>, LayerSourceError> {
        let export: LayerExport = serde_json::from_reader(reader)?;
        Ok(export.into())
    }

    /// Decodes layers from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid layer export.
    pub fn parse(content: &str) -> Result<Vec<TextLayer>, LayerSourceError> {
        let export: LayerExport = serde_json::from_str(content)?;
        Ok(export.into())
    }
}

impl LayerSource for JsonLayerSource {
    fn text_layers(&self) -> Result<Vec<TextLayer>, LayerSourceError> {
        debug!("Reading layers from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|e| LayerSourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Self::parse(&content)
    }
}

impl LayerSource for Vec<TextLayer> {
    fn text_layers(&self) -> Result<Vec<TextLayer>, LayerSourceError> {
        Ok(self.clone())
    }
}

/// A change notification from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The selection changed; carries the selected node ids.
    SelectionChanged(Vec<String>),
    /// The current page changed; carries the page id.
    PageChanged(String),
}

type SelectionCallback = Box<dyn Fn(&[String]) + Send + Sync>;
type PageCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Observer registry for host events.
///
/// Callbacks are invoked in registration order.
#[derive(Default)]
pub struct HostEvents {
    selection_changed: Vec<SelectionCallback>,
    page_changed: Vec<PageCallback>,
}

impl HostEvents {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for selection changes.
    pub fn on_selection_changed<F>(&mut self, callback: F)
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.selection_changed.push(Box::new(callback));
    }

    /// Registers a callback for page changes.
    pub fn on_page_changed<F>(&mut self, callback: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.page_changed.push(Box::new(callback));
    }

    /// Dispatches `event` to the callbacks registered for its kind.
    pub fn notify(&self, event: &HostEvent) {
        match event {
            HostEvent::SelectionChanged(ids) => {
                debug!("Selection changed: {} node(s)", ids.len());
                for callback in &self.selection_changed {
                    callback(ids.as_slice());
                }
            }
            HostEvent::PageChanged(page) => {
                debug!("Page changed: {}", page);
                for callback in &self.page_changed {
                    callback(page.as_str());
                }
            }
        }
    }
}

impl std::fmt::Debug for HostEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEvents")
            .field("selection_changed", &self.selection_changed.len())
            .field("page_changed", &self.page_changed.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    const EXPORT: &str = r#"[
        { "id": "1:1", "name": "Title", "characters": "Hello world" },
        { "id": "1:2", "name": "Price", "characters": "₹1,00,000", "visible": false }
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let layers = JsonLayerSource::parse(EXPORT).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[1].characters, "₹1,00,000");
        assert!(!layers[1].visible);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let wrapped = format!(r#"{{ "layers": {EXPORT} }}"#);
        let layers = JsonLayerSource::parse(&wrapped).unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = JsonLayerSource::parse(r#"{ "nodes": [] }"#).unwrap_err();
        assert!(matches!(err, LayerSourceError::Decode(_)));
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXPORT.as_bytes()).unwrap();

        let source = JsonLayerSource::new(file.path());
        let layers = source.text_layers().unwrap();
        assert_eq!(layers[0].id, "1:1");
    }

    #[test]
    fn test_missing_file() {
        let source = JsonLayerSource::new("/nonexistent/layers.json");
        assert!(matches!(
            source.text_layers(),
            Err(LayerSourceError::Io { .. })
        ));
    }

    #[test]
    fn test_from_reader() {
        let layers = JsonLayerSource::from_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_events_dispatch_by_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut events = HostEvents::new();

        let sink = Arc::clone(&seen);
        events.on_selection_changed(move |ids| {
            sink.lock().unwrap().push(format!("selection:{}", ids.join(",")));
        });
        let sink = Arc::clone(&seen);
        events.on_page_changed(move |page| {
            sink.lock().unwrap().push(format!("page:{page}"));
        });

        events.notify(&HostEvent::SelectionChanged(vec!["1:1".into(), "1:2".into()]));
        events.notify(&HostEvent::PageChanged("Cover".into()));

        assert_eq!(
            *seen.lock().unwrap(),
            ["selection:1:1,1:2", "page:Cover"]
        );
    }

    #[test]
    fn notify_without_callbacks_is_noop() {
        HostEvents::new().notify(&HostEvent::PageChanged("Cover".into()));
    }
}
