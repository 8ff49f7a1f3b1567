//! Drill records, quiz session state machine, and drill selection for
//! Phrasedrill.
//!
//! This crate provides:
//! - [`Drill`] - An immutable target sentence record
//! - [`QuizSession`] - The immutable-per-transition session entity driving a
//!   bounded sequence of graded attempts
//! - [`select`] - The level curriculum and deterministic drill selection
//! - [`seed`] - Built-in demo drill content
//!
//! Every session transition returns a new value; callers hold and replace
//! their own reference to the latest snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod drill;
pub mod seed;
pub mod select;
pub mod session;

pub use drill::Drill;
pub use select::{pattern_tag_for_level, select_drills};
pub use session::{AnswerResult, QuizSession, SessionStatus};
