//! Phrasedrill - English-grammar drill game core
//!
//! This crate re-exports all layers of the Phrasedrill system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: phrasedrill_quiz       — drill records, session state machine, selection
//! Layer 2: phrasedrill_grammar    — sentence configuration, surface generator
//! Layer 1: phrasedrill_lexicon    — word records, lexicon lookups, seed content
//! Layer 0: phrasedrill_foundation — error types, text utilities
//! ```

pub use phrasedrill_foundation as foundation;
pub use phrasedrill_grammar as grammar;
pub use phrasedrill_lexicon as lexicon;
pub use phrasedrill_quiz as quiz;
