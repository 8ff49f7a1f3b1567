//! Error types and shared text utilities for Phrasedrill.
//!
//! This crate provides:
//! - [`Error`] - Categorized error types for domain validation
//! - [`Result`] - Crate-wide result alias
//! - Text helpers ([`capitalize_first`], [`starts_with_vowel`], [`normalize_answer`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod text;

pub use error::{Error, ErrorKind, Result};
pub use text::{capitalize_first, normalize_answer, starts_with_vowel};
