//! # copy-lint-core
//!
//! Core framework for linting text content of design documents.
//!
//! This crate provides the foundational types for building copy linters.
//! It includes:
//!
//! - [`Guideline`], a named pure predicate over text
//! - [`Registry`], an ordered set of guidelines and the validation aggregator
//! - [`Linter`] for running guidelines over host [`TextLayer`]s
//! - [`LintReport`] and [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use copy_lint_core::{Linter, Registry};
//!
//! let registry = Registry::builder()
//!     .guideline(MY_GUIDELINE)
//!     .build()?;
//!
//! let linter = Linter::builder().registry(registry).build()?;
//! let report = linter.lint(&mut layers);
//! println!("{}", report.summary());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod guideline;
mod layer;
mod linter;
mod registry;
mod result;
mod stats;
mod types;

/// Boundary to the host document.
pub mod host;

pub use config::{Config, ConfigError, FilterConfig, GuidelineConfig};
pub use guideline::{Guideline, ValidateFn};
pub use host::{HostEvent, HostEvents, JsonLayerSource, LayerSource, LayerSourceError};
pub use layer::{filter_layers, FontName, LayerFilter, TextLayer, VisibilityFilter};
pub use linter::{Linter, LinterBuilder, LinterError};
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use result::ValidationResult;
pub use stats::{guideline_stats, text_style_stats};
pub use types::{GuidelineStats, LintReport, Severity, TextStyleStats, Violation};
