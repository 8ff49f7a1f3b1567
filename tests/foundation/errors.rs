//! Integration tests for error construction and display.

use phrasedrill::foundation::{Error, ErrorKind};

#[test]
fn errors_carry_matchable_kinds() {
    let err = Error::incompatible_pattern("be", "SVOO");
    assert!(matches!(
        err.kind,
        ErrorKind::IncompatiblePattern {
            verb_type: "be",
            pattern: "SVOO"
        }
    ));
}

#[test]
fn error_messages_name_the_violation() {
    assert_eq!(
        Error::incompatible_pattern("be", "SVOC").to_string(),
        "incompatible sentence pattern: be verb cannot take SVOC"
    );
    assert_eq!(
        Error::empty_field("Word", "value").to_string(),
        "Word: required field `value` is empty"
    );
    assert_eq!(
        Error::results_length_mismatch(10, 9).to_string(),
        "results length mismatch: expected 10, got 9"
    );
    assert_eq!(
        Error::level_out_of_range(42).to_string(),
        "quiz level out of range: 42 (expected 1..=10)"
    );
}
