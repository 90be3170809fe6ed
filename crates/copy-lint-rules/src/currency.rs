//! Currency symbols recognized by the built-in guidelines.

/// Symbols that may open a price, e.g. "₹100" or "$5".
///
/// Includes both the Indian Rupee sign (U+20B9) and the generic Rupee
/// sign (U+20A8).
pub const CURRENCY_SYMBOLS: [char; 6] = ['₹', '₨', '$', '€', '£', '¥'];

/// Returns true if `c` is a recognized currency symbol.
#[must_use]
pub fn is_currency_symbol(c: char) -> bool {
    CURRENCY_SYMBOLS.contains(&c)
}

/// Removes one leading currency symbol from `s`, if present.
#[must_use]
pub fn strip_currency(s: &str) -> &str {
    s.strip_prefix(is_currency_symbol).unwrap_or(s)
}
