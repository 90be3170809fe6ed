//! Guideline forbidding trailing whitespace.
//!
//! Any Unicode whitespace counts, not only the ASCII space: tabs, line
//! breaks and no-break spaces left at the end of a layer fail too.

use copy_lint_core::Guideline;

/// Guideline id for no-trailing-spaces.
pub const ID: &str = "no-trailing-spaces";

/// Display name for no-trailing-spaces.
pub const NAME: &str = "No trailing spaces";

/// Description for no-trailing-spaces.
pub const DESCRIPTION: &str = "Text should not have trailing spaces";

/// The no-trailing-spaces guideline.
pub const GUIDELINE: Guideline = Guideline::new(ID, NAME, DESCRIPTION, validate);

/// Returns true if `text` does not end in whitespace.
#[must_use]
pub fn validate(text: &str) -> bool {
    !text.chars().next_back().is_some_and(char::is_whitespace)
}
