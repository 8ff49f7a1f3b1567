//! Integration tests for the shared text utilities.

use phrasedrill::foundation::{capitalize_first, normalize_answer, starts_with_vowel};
use proptest::prelude::*;

#[test]
fn capitalization_touches_only_the_first_character() {
    assert_eq!(capitalize_first("will he be here"), "Will he be here");
    assert_eq!(capitalize_first("i'm not here"), "I'm not here");
}

#[test]
fn vowel_test_is_case_insensitive_on_the_first_letter() {
    assert!(starts_with_vowel("apple"));
    assert!(starts_with_vowel("Apple"));
    assert!(!starts_with_vowel("banana"));
    assert!(!starts_with_vowel("Banana"));
}

#[test]
fn normalization_equates_presentation_variants() {
    let variants = ["I run.", "i run", "I   run", " i run. ", "I RUN!"];
    let canonical = normalize_answer("I run");
    for variant in variants {
        assert_eq!(normalize_answer(variant), canonical, "{variant:?}");
    }
}

#[test]
fn normalization_preserves_word_identity() {
    assert_ne!(normalize_answer("I walk"), normalize_answer("I run"));
}

proptest! {
    #[test]
    fn normalized_strings_never_hold_outer_whitespace(s in ".{0,48}") {
        let out = normalize_answer(&s);
        prop_assert_eq!(out.trim(), out.as_str());
    }
}
