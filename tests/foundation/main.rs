//! Integration tests for Layer 0: Foundation
//!
//! Tests for error types and the shared text utilities.

mod errors;
mod text;
