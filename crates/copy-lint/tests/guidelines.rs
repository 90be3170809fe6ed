//! Behaviour of the built-in guideline set through the facade.

use copy_lint::{find_guideline, guidelines, validate_text, Registry};
use rayon::prelude::*;

const IDS: [&str; 4] = [
    "sentence-case",
    "no-trailing-spaces",
    "no-double-spaces",
    "indian-currency-commas",
];

fn rule(id: &str) -> &'static copy_lint::Guideline {
    find_guideline(id).unwrap_or_else(|| panic!("guideline {id} should be registered"))
}

// ── Aggregator ──

#[test]
fn returns_results_for_all_guidelines() {
    let results = validate_text("Hello world");
    assert_eq!(results.len(), IDS.len());
    for id in IDS {
        assert_eq!(results.get(id), Some(true), "{id} should pass");
    }
}

#[test]
fn empty_string_passes_every_guideline() {
    let results = validate_text("");
    for guideline in guidelines() {
        assert_eq!(results.get(guideline.id()), Some(true), "{}", guideline.id());
    }
}

#[test]
fn invalid_text_fails_several_guidelines() {
    let results = validate_text("hello  world ");
    assert_eq!(results.get("sentence-case"), Some(false));
    assert_eq!(results.get("no-trailing-spaces"), Some(false));
    assert_eq!(results.get("no-double-spaces"), Some(false));
    assert_eq!(results.get("indian-currency-commas"), Some(true));
}

#[test]
fn repeated_calls_are_identical() {
    for text in ["", "Hello world", "₹ 1,00,000.50", "HELLO  WORLD ", "100,000"] {
        assert_eq!(validate_text(text), validate_text(text));
    }
}

#[test]
fn outcomes_do_not_depend_on_registry_composition() {
    let texts = ["Hello world", "hello  world ", "₹100000", "Self-service portal"];

    for id in IDS {
        let alone = Registry::builder()
            .guideline(*rule(id))
            .build()
            .expect("single guideline registry");
        let reversed = Registry::builder()
            .guidelines(guidelines().iter().rev().copied())
            .build()
            .expect("reversed registry");

        for text in texts {
            let expected = validate_text(text).get(id);
            assert_eq!(alone.validate_text(text).get(id), expected);
            assert_eq!(reversed.validate_text(text).get(id), expected);
        }
    }
}

#[test]
fn parallel_validation_matches_sequential() {
    let texts: Vec<String> = (0..200)
        .map(|i| match i % 4 {
            0 => format!("Item {i}"),
            1 => format!("item  {i} "),
            2 => format!("₹{i}00000"),
            _ => "Self-service portal".to_string(),
        })
        .collect();

    let sequential: Vec<_> = texts.iter().map(|t| validate_text(t)).collect();
    let parallel: Vec<_> = texts.par_iter().map(|t| validate_text(t)).collect();
    assert_eq!(sequential, parallel);
}

// ── Registry metadata ──

#[test]
fn guidelines_are_listed_in_registration_order() {
    let ids: Vec<&str> = guidelines().iter().map(|g| g.id()).collect();
    assert_eq!(ids, IDS);
}

#[test]
fn guidelines_carry_display_metadata() {
    for guideline in guidelines() {
        assert!(!guideline.name().is_empty());
        assert!(!guideline.description().is_empty());
    }
    assert_eq!(rule("no-trailing-spaces").name(), "No trailing spaces");
    assert!(find_guideline("no-such-rule").is_none());
}

// ── Sentence case ──

#[test]
fn sentence_case_examples() {
    let sentence_case = rule("sentence-case");
    assert!(sentence_case.validate("Hello world"));
    assert!(sentence_case.validate("₹100 is the price"));
    assert!(sentence_case.validate("Self-service portal"));
    assert!(sentence_case.validate("User-friendly interface"));
    assert!(!sentence_case.validate("hello world"));
    assert!(!sentence_case.validate("Hello World"));
    assert!(!sentence_case.validate("HELLO WORLD"));
    assert!(!sentence_case.validate("123 main street"));
}

// ── Whitespace ──

#[test]
fn trailing_space_examples() {
    let trailing = rule("no-trailing-spaces");
    assert!(trailing.validate("Hello world"));
    assert!(trailing.validate(""));
    assert!(!trailing.validate("Hello world "));
    assert!(!trailing.validate(" "));
}

#[test]
fn double_space_examples() {
    let double = rule("no-double-spaces");
    assert!(double.validate("Single space between words"));
    assert!(double.validate(""));
    assert!(!double.validate("Hello  world"));
    assert!(!double.validate("Multiple   spaces   here"));
    assert!(!double.validate("  "));
}

// ── Indian number format ──

#[test]
fn indian_currency_examples() {
    let currency = rule("indian-currency-commas");
    assert!(currency.validate("1,00,000"));
    assert!(currency.validate("500"));
    assert!(currency.validate("₹ 1,00,000.50"));
    assert!(!currency.validate("100,000"));
}
