//! Word records, lexicon lookups, and seed content for Phrasedrill.
//!
//! This crate provides:
//! - [`Word`] - An immutable word record with category-specific fields
//! - [`Lexicon`] - Read-only lookup tables keyed by canonical surface form
//! - [`seed`] - Built-in demo content (words and drill targets)
//!
//! The lexicon is reference data: it is loaded wholesale before generation
//! and never mutated by the core.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod seed;
pub mod word;

pub use lexicon::Lexicon;
pub use word::{NounNumber, Word, WordCategory};
