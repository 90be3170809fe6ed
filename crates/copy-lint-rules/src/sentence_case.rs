//! Guideline requiring sentence case.
//!
//! # Rationale
//!
//! Interface copy reads calmer in sentence case: only the first word is
//! capitalized. Title Case and ALL CAPS are flagged.
//!
//! # Policy
//!
//! 1. The first word starts with an uppercase letter, a digit, or a
//!    currency symbol.
//! 2. A multi-word text where every word is all caps fails.
//! 3. Each word then runs through [`WORD_CHECKS`] in order; the first
//!    check that decides the word wins.
//!
//! Empty and whitespace-only text passes.

use crate::currency::is_currency_symbol;
use copy_lint_core::Guideline;

/// Guideline id for sentence-case.
pub const ID: &str = "sentence-case";

/// Display name for sentence-case.
pub const NAME: &str = "Sentence case";

/// Description for sentence-case.
pub const DESCRIPTION: &str =
    "Text should use sentence case: capitalize only the first word, abbreviations and words after a numeral";

/// The sentence-case guideline.
pub const GUIDELINE: Guideline = Guideline::new(ID, NAME, DESCRIPTION, validate);

/// A word together with its position in the text.
#[derive(Debug, Clone, Copy)]
pub struct Word<'a> {
    /// The word itself.
    pub text: &'a str,
    /// Whether this is the opening word.
    pub is_first: bool,
    /// The word before this one, if any.
    pub previous: Option<&'a str>,
}

/// A per-word check. `Some` decides the word, `None` defers to the next check.
pub type WordCheck = fn(&Word<'_>) -> Option<bool>;

/// Per-word checks in precedence order.
pub const WORD_CHECKS: [WordCheck; 5] = [
    abbreviation,
    currency_or_number,
    hyphenated,
    opening_word,
    lowercase_or_after_numeral,
];

/// Returns true if `text` is in sentence case.
#[must_use]
pub fn validate(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    let Some(first) = words.first() else {
        return true;
    };

    if !opens_sentence(first) {
        return false;
    }

    if words.len() > 1 && words.iter().all(|w| is_all_caps(w)) {
        return false;
    }

    words.iter().enumerate().all(|(i, w)| {
        let word = Word {
            text: w,
            is_first: i == 0,
            previous: i.checked_sub(1).map(|p| words[p]),
        };
        check_word(&word)
    })
}

/// Runs [`WORD_CHECKS`] on `word`; a word no check decides fails.
#[must_use]
pub fn check_word(word: &Word<'_>) -> bool {
    WORD_CHECKS
        .iter()
        .find_map(|check| check(word))
        .unwrap_or(false)
}

/// Abbreviations such as "API", "UK." or "H2O" are always accepted.
pub fn abbreviation(word: &Word<'_>) -> Option<bool> {
    is_abbreviation(word.text).then_some(true)
}

/// Prices and numbers such as "₹100" or "5th" are always accepted.
pub fn currency_or_number(word: &Word<'_>) -> Option<bool> {
    word.text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || is_currency_symbol(c))
        .then_some(true)
}

/// Hyphenated compounds: "Self-service" as the opening word, "built-in" elsewhere.
pub fn hyphenated(word: &Word<'_>) -> Option<bool> {
    if !word.text.contains('-') {
        return None;
    }

    let mut parts = word.text.split('-');
    if word.is_first {
        Some(parts.next().is_some_and(is_capitalized))
    } else {
        Some(parts.all(is_lowercase))
    }
}

/// The opening word was already checked by the sentence-start rule.
pub fn opening_word(word: &Word<'_>) -> Option<bool> {
    word.is_first.then_some(true)
}

/// Lowercase, or Capitalized directly after a numeral ("5 Star").
#[allow(clippy::unnecessary_wraps)]
pub fn lowercase_or_after_numeral(word: &Word<'_>) -> Option<bool> {
    let after_numeral = word
        .previous
        .and_then(|p| p.chars().next())
        .is_some_and(|c| c.is_ascii_digit());

    if after_numeral {
        Some(is_capitalized(word.text))
    } else {
        Some(is_lowercase(word.text))
    }
}

fn opens_sentence(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit() || is_currency_symbol(c))
}

/// Uppercase letters and digits only, with at least one letter.
/// Trailing punctuation ("UK.", "API,") is ignored.
fn is_abbreviation(word: &str) -> bool {
    let core = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
    core.chars().any(char::is_uppercase)
        && core
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit())
}

/// Contains a cased letter and no lowercase letters.
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// First character uppercase, no uppercase after it.
fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && !chars.any(char::is_uppercase)
}

/// No uppercase characters.
fn is_lowercase(word: &str) -> bool {
    !word.chars().any(char::is_uppercase)
}
