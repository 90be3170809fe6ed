//! Guideline presets for common configurations.

use crate::{indian_currency_commas, no_double_spaces, no_trailing_spaces, sentence_case};
use copy_lint_core::{Guideline, Registry};

/// Preset guideline sets for copy-lint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in guideline.
    #[default]
    Recommended,
    /// Casing and whitespace, without locale-specific number formats.
    Basic,
    /// Whitespace guidelines only.
    Whitespace,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 3] = [Self::Recommended, Self::Basic, Self::Whitespace];

    /// Returns the preset name as used in configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Basic => "basic",
            Self::Whitespace => "whitespace",
        }
    }

    /// Returns the guidelines for this preset, in registration order.
    #[must_use]
    pub fn guidelines(self) -> Vec<Guideline> {
        match self {
            Self::Recommended => recommended_guidelines(),
            Self::Basic => basic_guidelines(),
            Self::Whitespace => whitespace_guidelines(),
        }
    }

    /// Builds a registry holding this preset's guidelines.
    #[must_use]
    pub fn registry(self) -> Registry {
        // Built-in ids are distinct, so building cannot fail.
        Registry::builder()
            .guidelines(self.guidelines())
            .build()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                format!("unknown preset `{s}`. Valid presets: recommended, basic, whitespace")
            })
    }
}

/// Returns every built-in guideline.
///
/// Includes:
/// - `sentence-case`
/// - `no-trailing-spaces`
/// - `no-double-spaces`
/// - `indian-currency-commas`
#[must_use]
pub fn recommended_guidelines() -> Vec<Guideline> {
    vec![
        sentence_case::GUIDELINE,
        no_trailing_spaces::GUIDELINE,
        no_double_spaces::GUIDELINE,
        indian_currency_commas::GUIDELINE,
    ]
}

/// Returns the casing and whitespace guidelines.
#[must_use]
pub fn basic_guidelines() -> Vec<Guideline> {
    vec![
        sentence_case::GUIDELINE,
        no_trailing_spaces::GUIDELINE,
        no_double_spaces::GUIDELINE,
    ]
}

/// Returns the whitespace guidelines.
#[must_use]
pub fn whitespace_guidelines() -> Vec<Guideline> {
    vec![no_trailing_spaces::GUIDELINE, no_double_spaces::GUIDELINE]
}

/// Returns all available guidelines.
#[must_use]
pub fn all_guidelines() -> Vec<Guideline> {
    recommended_guidelines()
}
