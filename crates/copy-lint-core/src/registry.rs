//! Ordered guideline registry and the validation aggregator.

use crate::guideline::Guideline;
use crate::result::ValidationResult;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while building a registry.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    /// Two guidelines share the same id.
    #[error("Duplicate guideline id: {0}")]
    #[diagnostic(
        code(copy_lint::registry::duplicate_id),
        help("guideline ids are used as result keys and must be unique")
    )]
    DuplicateId(String),
}

/// Builder for a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    guidelines: Vec<Guideline>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a guideline. Registration order is preserved.
    #[must_use]
    pub fn guideline(mut self, guideline: Guideline) -> Self {
        self.guidelines.push(guideline);
        self
    }

    /// Appends several guidelines in order.
    #[must_use]
    pub fn guidelines<I>(mut self, guidelines: I) -> Self
    where
        I: IntoIterator<Item = Guideline>,
    {
        self.guidelines.extend(guidelines);
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] if two guidelines share an id.
    pub fn build(self) -> Result<Registry, RegistryError> {
        for (i, guideline) in self.guidelines.iter().enumerate() {
            if self.guidelines[..i].iter().any(|g| g.id() == guideline.id()) {
                return Err(RegistryError::DuplicateId(guideline.id().to_string()));
            }
        }

        Ok(Registry {
            guidelines: self.guidelines,
        })
    }
}

/// An immutable, ordered set of guidelines.
///
/// Use [`Registry::builder()`] to construct an instance.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    guidelines: Vec<Guideline>,
}

impl Registry {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// All guidelines in registration order.
    #[must_use]
    pub fn guidelines(&self) -> &[Guideline] {
        &self.guidelines
    }

    /// Looks up a guideline by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Guideline> {
        self.guidelines.iter().find(|g| g.id() == id)
    }

    /// Returns true if a guideline with `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of registered guidelines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guidelines.len()
    }

    /// Returns true if the registry holds no guidelines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guidelines.is_empty()
    }

    /// Runs every registered guideline against `text`.
    #[must_use]
    pub fn validate_text(&self, text: &str) -> ValidationResult {
        self.validate_with(text, |_| true)
    }

    /// Runs the guidelines accepted by `include` against `text`.
    pub(crate) fn validate_with<F>(&self, text: &str, include: F) -> ValidationResult
    where
        F: Fn(&Guideline) -> bool,
    {
        self.guidelines
            .iter()
            .filter(|g| include(g))
            .map(|g| (g.id().to_string(), g.validate(text)))
            .collect()
    }
}
