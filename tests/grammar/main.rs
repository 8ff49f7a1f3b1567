//! Integration tests for Layer 2: Grammar
//!
//! Tests for the sentence configuration value object and the generator.

mod config;
mod generation;
