//! The guideline value type.

use serde::Serialize;

/// Signature of a guideline predicate.
///
/// Must be deterministic, free of side effects, and total: every `&str`,
/// including the empty string, has a defined answer.
pub type ValidateFn = fn(&str) -> bool;

/// A named style guideline for text content.
///
/// Guidelines are plain values: an id, display metadata, and a function
/// pointer. They are `Copy`, so registries can hand them out freely and
/// validate from many threads at once.
///
/// # Example
///
/// ```
/// use copy_lint_core::Guideline;
///
/// fn no_exclamation(text: &str) -> bool {
///     !text.contains('!')
/// }
///
/// const NO_EXCLAMATION: Guideline = Guideline::new(
///     "no-exclamation",
///     "No exclamation marks",
///     "Text should not shout at the reader",
///     no_exclamation,
/// );
///
/// assert!(NO_EXCLAMATION.validate("Saved"));
/// assert!(!NO_EXCLAMATION.validate("Saved!"));
/// ```
#[derive(Clone, Copy, Serialize)]
pub struct Guideline {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    #[serde(skip)]
    validate: ValidateFn,
}

impl Guideline {
    /// Creates a new guideline.
    #[must_use]
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        validate: ValidateFn,
    ) -> Self {
        Self {
            id,
            name,
            description,
            validate,
        }
    }

    /// Returns the stable kebab-case id (e.g., "sentence-case").
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the short display label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the explanation shown when the guideline fails.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Runs the guideline against `text`. Returns `true` when it passes.
    #[must_use]
    pub fn validate(&self, text: &str) -> bool {
        (self.validate)(text)
    }
}

impl std::fmt::Debug for Guideline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guideline")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Guideline {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Guideline {}
