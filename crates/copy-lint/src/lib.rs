//! # copy-lint
//!
//! Style-guideline linter for text content of design documents.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in guidelines.
//!
//! ## Quick Start
//!
//! ```
//! let results = copy_lint::validate_text("Hello world");
//!
//! assert_eq!(results.get("sentence-case"), Some(true));
//! assert_eq!(results.get("no-double-spaces"), Some(true));
//! ```
//!
//! ## Guideline Metadata
//!
//! ```
//! for guideline in copy_lint::guidelines() {
//!     println!("{}: {}", guideline.name(), guideline.description());
//! }
//! ```
//!
//! ## Linting Host Layers
//!
//! ```rust,ignore
//! use copy_lint::{JsonLayerSource, LayerSource, Linter};
//! use copy_lint::rules::Preset;
//!
//! let linter = Linter::builder()
//!     .registry(Preset::Recommended.registry())
//!     .build()?;
//!
//! let mut layers = JsonLayerSource::new("layers.json").text_layers()?;
//! let report = linter.lint(&mut layers);
//! ```

#![forbid(unsafe_code)]

use std::sync::LazyLock;

// Re-export core types
pub use copy_lint_core::*;

/// Built-in guidelines and presets.
pub mod rules {
    pub use copy_lint_rules::*;
}

static DEFAULT_REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| copy_lint_rules::Preset::Recommended.registry());

/// The process-wide registry of built-in guidelines.
#[must_use]
pub fn registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// All built-in guidelines, in registration order.
#[must_use]
pub fn guidelines() -> &'static [Guideline] {
    DEFAULT_REGISTRY.guidelines()
}

/// Looks up a built-in guideline by id.
#[must_use]
pub fn find_guideline(id: &str) -> Option<&'static Guideline> {
    DEFAULT_REGISTRY.get(id)
}

/// Runs every built-in guideline against `text`.
#[must_use]
pub fn validate_text(text: &str) -> ValidationResult {
    DEFAULT_REGISTRY.validate_text(text)
}
