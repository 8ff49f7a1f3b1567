//! Sentence configuration and surface-text generation for Phrasedrill.
//!
//! This crate provides:
//! - [`SentenceConfig`] - The immutable grammatical state of one sentence,
//!   validated at construction, edited only through copy-on-write transitions
//! - [`generate`] - The pure rule engine mapping a configuration plus a
//!   lexicon to natural-language text
//!
//! Generation never fails: lexicon misses fall back to regular-inflection
//! heuristics, and reserved pattern/verb-type combinations produce empty
//! complements rather than errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod generate;

pub use config::{
    ConfigProps, Determiner, PatternKind, SentenceConfig, SentenceType, Subject, Tense, VerbType,
};
pub use generate::generate;
