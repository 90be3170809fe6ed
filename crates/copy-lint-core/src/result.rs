//! Per-text validation outcome.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of running a set of guidelines against one text sample.
///
/// Maps guideline id to pass (`true`) or fail (`false`). Iteration order is
/// by id and carries no meaning; use [`ValidationResult::get`] for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    outcomes: BTreeMap<String, bool>,
}

impl ValidationResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for a guideline.
    pub fn insert(&mut self, id: impl Into<String>, passed: bool) {
        self.outcomes.insert(id.into(), passed);
    }

    /// Returns the outcome for `id`, or `None` if it was not evaluated.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<bool> {
        self.outcomes.get(id).copied()
    }

    /// Returns true if `id` was evaluated and passed.
    #[must_use]
    pub fn passed(&self, id: &str) -> bool {
        self.get(id).unwrap_or(false)
    }

    /// Returns true if every evaluated guideline passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.values().all(|passed| *passed)
    }

    /// Ids of the guidelines that failed.
    pub fn failing(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(id, _)| id.as_str())
    }

    /// Number of evaluated guidelines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if no guideline was evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates over `(id, passed)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.outcomes.iter().map(|(id, passed)| (id.as_str(), *passed))
    }
}

impl FromIterator<(String, bool)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
