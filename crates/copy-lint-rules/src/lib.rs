//! # copy-lint-rules
//!
//! Built-in copy guidelines for copy-lint.
//!
//! ## Available Guidelines
//!
//! | Id | Name | Description |
//! |----|------|-------------|
//! | `sentence-case` | Sentence case | Only the first word is capitalized, with exceptions for abbreviations, prices and compounds |
//! | `no-trailing-spaces` | No trailing spaces | Text must not end in whitespace |
//! | `no-double-spaces` | No double spaces | Text must not contain runs of whitespace |
//! | `indian-currency-commas` | Indian Currency Format | Numbers of 1000 or more use lakh/crore grouping |
//!
//! Each guideline lives in its own module exposing `ID`, `NAME`,
//! `DESCRIPTION`, `GUIDELINE` and the bare `validate` function.
//!
//! ## Usage
//!
//! ```
//! use copy_lint_rules::Preset;
//!
//! let registry = Preset::Recommended.registry();
//! let result = registry.validate_text("Hello world");
//! assert!(result.all_passed());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod currency;
pub mod indian_currency_commas;
pub mod no_double_spaces;
pub mod no_trailing_spaces;
pub mod sentence_case;

mod presets;

pub use presets::{
    all_guidelines, basic_guidelines, recommended_guidelines, whitespace_guidelines, Preset,
};

/// Re-export core types for convenience.
pub use copy_lint_core::{Guideline, Registry, ValidationResult};
