//! Guideline requiring Indian digit grouping for numbers.
//!
//! # Rationale
//!
//! Copy for Indian audiences groups digits as lakh and crore: the rightmost
//! group has three digits and every group to its left has two
//! ("1,00,000", "12,34,56,789"). Western grouping ("100,000") and
//! ungrouped values of 1000 or more ("100000") are flagged.
//!
//! # Scanning
//!
//! Numbers are found left to right without overlap. Each candidate may carry
//! a currency prefix and a decimal fraction; only the integer part is
//! checked. Fragments that do not parse as a number are ignored.

use crate::currency::strip_currency;
use copy_lint_core::Guideline;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Guideline id for indian-currency-commas.
pub const ID: &str = "indian-currency-commas";

/// Display name for indian-currency-commas.
pub const NAME: &str = "Indian Currency Format";

/// Description for indian-currency-commas.
pub const DESCRIPTION: &str = "Numbers representing currency should use the Indian comma separation format (e.g., 1,00,000, not 100,000) for values >= 1000.";

/// The indian-currency-commas guideline.
pub const GUIDELINE: Guideline = Guideline::new(ID, NAME, DESCRIPTION, validate);

/// Smallest value that must be grouped.
const GROUPING_THRESHOLD: f64 = 1000.0;

struct Patterns {
    /// Number candidates; group 1 is the number without currency prefix.
    number: Regex,
    /// Valid Indian grouping of an integer part.
    grouping: Regex,
}

static PATTERNS: LazyLock<Option<Patterns>> = LazyLock::new(|| {
    Some(Patterns {
        number: Regex::new(r"\b(?:[₹₨$€£¥]\s*)?((?:[0-9]{1,3}(?:,[0-9]+)*|[0-9]+)(?:\.[0-9]+)?)\b")
            .ok()?,
        grouping: Regex::new(r"^[0-9]{1,2}(?:,[0-9]{2})*,[0-9]{3}$").ok()?,
    })
});

/// Returns true if every number in `text` follows Indian grouping.
#[must_use]
pub fn validate(text: &str) -> bool {
    let Some(patterns) = PATTERNS.as_ref() else {
        return true;
    };

    patterns
        .number
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .all(|number| is_valid_number(number.as_str(), &patterns.grouping))
}

/// Checks one number candidate such as "1,00,000.50" or "₹500".
fn is_valid_number(number: &str, grouping: &Regex) -> bool {
    let int_part = number.split_once('.').map_or(number, |(int, _)| int);
    let int_part = strip_currency(int_part).trim();
    if int_part.is_empty() {
        return true;
    }

    let Ok(value) = int_part.replace(',', "").parse::<f64>() else {
        debug!("Ignoring non-numeric candidate: {}", number);
        return true;
    };

    if int_part.contains(',') {
        grouping.is_match(int_part)
    } else {
        value < GROUPING_THRESHOLD
    }
}

/// Returns true if `int_part` (digits and commas only) uses Indian grouping.
#[must_use]
pub fn is_indian_grouping(int_part: &str) -> bool {
    PATTERNS
        .as_ref()
        .is_some_and(|p| p.grouping.is_match(int_part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_indian_grouping() {
        assert!(validate("1,00,000"));
        assert!(validate("₹ 1,00,000.50"));
        assert!(validate("₹12,34,567"));
        assert!(validate("Total: 1,000 items"));
    }

    #[test]
    fn test_rejects_western_grouping() {
        assert!(!validate("100,000"));
        assert!(!validate("₹1,000,000"));
        assert!(!validate("Pay 123,456 now"));
    }

    #[test]
    fn test_small_numbers_pass_without_commas() {
        assert!(validate("500"));
        assert!(validate("999"));
        assert!(validate("₹ 0.99"));
    }

    #[test]
    fn test_large_numbers_need_commas() {
        assert!(!validate("1000"));
        assert!(!validate("Only ₹100000 left"));
        assert!(!validate("1000.50"));
    }

    #[test]
    fn text_without_numbers_passes() {
        assert!(validate(""));
        assert!(validate("No numbers here"));
    }

    #[test]
    fn every_number_must_pass() {
        assert!(validate("Was ₹1,50,000, now ₹99,999"));
        assert!(!validate("Was ₹1,50,000, now ₹150000"));
    }

    #[test]
    fn very_long_numbers_still_fail() {
        assert!(!validate("123456789012345678901234567890"));
    }

    #[test]
    fn test_grouping_pattern() {
        assert!(is_indian_grouping("1,000"));
        assert!(is_indian_grouping("10,000"));
        assert!(is_indian_grouping("1,00,000"));
        assert!(is_indian_grouping("12,34,56,789"));
        assert!(!is_indian_grouping("100,000"));
        assert!(!is_indian_grouping("1,0,000"));
        assert!(!is_indian_grouping("1000"));
    }

    #[test]
    fn test_is_valid_number_ignores_fraction_and_prefix() {
        let Some(patterns) = PATTERNS.as_ref() else {
            panic!("patterns should compile");
        };
        assert!(is_valid_number("₹1,00,000.123456", &patterns.grouping));
        assert!(is_valid_number("₹", &patterns.grouping));
        assert!(!is_valid_number("$1,000,000.00", &patterns.grouping));
    }
}
