//! Guideline forbidding runs of whitespace.

use copy_lint_core::Guideline;

/// Guideline id for no-double-spaces.
pub const ID: &str = "no-double-spaces";

/// Display name for no-double-spaces.
pub const NAME: &str = "No double spaces";

/// Description for no-double-spaces.
pub const DESCRIPTION: &str = "Text should not contain double spaces";

/// The no-double-spaces guideline.
pub const GUIDELINE: Guideline = Guideline::new(ID, NAME, DESCRIPTION, validate);

/// Returns true if `text` has no two consecutive whitespace characters.
#[must_use]
pub fn validate(text: &str) -> bool {
    let mut previous_was_space = false;
    for c in text.chars() {
        let is_space = c.is_whitespace();
        if is_space && previous_was_space {
            return false;
        }
        previous_was_space = is_space;
    }
    true
}
