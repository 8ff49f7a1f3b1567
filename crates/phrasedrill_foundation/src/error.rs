//! Error types for the Phrasedrill system.
//!
//! Uses `thiserror` for ergonomic error definition. There is exactly one
//! class of error in the core: construction-time domain validation. Lexicon
//! misses are never errors; they fall back to regular-inflection heuristics
//! inside the generator.

use thiserror::Error;

/// Result type alias for Phrasedrill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Phrasedrill operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an incompatible-pattern error.
    ///
    /// Raised when a `be`-verb configuration requests a pattern that only
    /// transitive verbs support (SVO, SVOO, SVOC).
    #[must_use]
    pub fn incompatible_pattern(verb_type: &'static str, pattern: &'static str) -> Self {
        Self::new(ErrorKind::IncompatiblePattern { verb_type, pattern })
    }

    /// Creates an empty-field error.
    #[must_use]
    pub fn empty_field(entity: &'static str, field: &'static str) -> Self {
        Self::new(ErrorKind::EmptyField { entity, field })
    }

    /// Creates a results-length mismatch error.
    #[must_use]
    pub fn results_length_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ResultsLengthMismatch { expected, actual })
    }

    /// Creates a level-out-of-range error.
    #[must_use]
    pub fn level_out_of_range(level: u8) -> Self {
        Self::new(ErrorKind::LevelOutOfRange(level))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// A sentence pattern is not valid for the given verb type.
    #[error("incompatible sentence pattern: {verb_type} verb cannot take {pattern}")]
    IncompatiblePattern {
        /// The verb type being configured.
        verb_type: &'static str,
        /// The rejected pattern.
        pattern: &'static str,
    },

    /// A required field was empty at construction.
    #[error("{entity}: required field `{field}` is empty")]
    EmptyField {
        /// The record being constructed.
        entity: &'static str,
        /// The empty field.
        field: &'static str,
    },

    /// A results override did not match the drill count.
    #[error("results length mismatch: expected {expected}, got {actual}")]
    ResultsLengthMismatch {
        /// Number of drills in the session.
        expected: usize,
        /// Length of the supplied results.
        actual: usize,
    },

    /// Quiz level outside the supported 1..=10 range.
    #[error("quiz level out of range: {0} (expected 1..=10)")]
    LevelOutOfRange(u8),
}
