//! The quiz session state machine.
//!
//! States: `Playing → {Result | Failed | AllCleared}`. The three outcome
//! states are terminal; no transition leaves them. Every transition returns
//! a new session value; drill and result sequences are persistent vectors,
//! so snapshots share structure and cloning is O(1).

use im::Vector;
use phrasedrill_foundation::text::normalize_answer;
use phrasedrill_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::drill::Drill;

/// Outcome required to clear a level: at least this many correct answers.
const PASS_THRESHOLD: usize = 8;

/// Session state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    /// Drills remain; answers are being accepted.
    Playing,
    /// Cleared the level (terminal).
    Result,
    /// Fewer than the required correct answers (terminal).
    Failed,
    /// Cleared the final level (terminal).
    AllCleared,
}

impl SessionStatus {
    /// True for the three outcome states.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// The judged outcome of one drill attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerResult {
    /// The generated sentence matched the target.
    Correct,
    /// It did not.
    Wrong,
}

/// A bounded run of drills with per-drill results and a win/lose outcome.
///
/// Invariant: `results.len() == drills.len()` always; `current_index` only
/// ever advances forward, one step per transition, and stays clamped to the
/// last valid index once the session is terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    level: u8,
    drills: Vector<Drill>,
    results: Vector<Option<AnswerResult>>,
    current_index: usize,
    status: SessionStatus,
}

impl QuizSession {
    /// Starts a session over the given drills.
    ///
    /// The drill list defines the session length; the surrounding game
    /// supplies ten, but any non-zero length works. All result slots start
    /// unanswered.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::LevelOutOfRange`] if
    /// `level` is outside `1..=10`, and
    /// [`phrasedrill_foundation::ErrorKind::EmptyField`] if `drills` is
    /// empty. With no drills there is no current drill to answer and no
    /// last drill to settle on, so both transitions would be undefined.
    pub fn start(level: u8, drills: Vec<Drill>) -> Result<Self> {
        if !(1..=10).contains(&level) {
            return Err(Error::level_out_of_range(level));
        }
        if drills.is_empty() {
            return Err(Error::empty_field("QuizSession", "drills"));
        }
        let drills: Vector<Drill> = drills.into_iter().collect();
        let results: Vector<Option<AnswerResult>> =
            std::iter::repeat(None).take(drills.len()).collect();
        Ok(Self {
            level,
            drills,
            results,
            current_index: 0,
            status: SessionStatus::Playing,
        })
    }

    // Accessors

    /// Session level, 1–10.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// The session's drills, in play order.
    #[must_use]
    pub fn drills(&self) -> &Vector<Drill> {
        &self.drills
    }

    /// Per-drill results, parallel to [`Self::drills`]; `None` = unanswered.
    #[must_use]
    pub fn results(&self) -> &Vector<Option<AnswerResult>> {
        &self.results
    }

    /// Index of the drill currently in play.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current state.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The drill currently in play, if any.
    #[must_use]
    pub fn current_drill(&self) -> Option<&Drill> {
        self.drills.get(self.current_index)
    }

    /// Number of correct answers recorded so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| **r == Some(AnswerResult::Correct))
            .count()
    }

    /// True when `current_index` points at the last drill.
    #[must_use]
    pub fn is_last_drill(&self) -> bool {
        !self.drills.is_empty() && self.current_index == self.drills.len() - 1
    }

    /// Seconds allowed per drill at this level.
    ///
    /// Level 10 is a fixed 10 seconds, levels 1–3 a fixed 30, and levels
    /// 4–9 ramp down as `max(5, 30 - 2*level)`. Pure function of the level.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        if self.level == 10 {
            return 10;
        }
        if self.level < 4 {
            return 30;
        }
        (30 - 2 * u32::from(self.level)).max(5)
    }

    // Transitions

    /// Records the judged result for the current drill.
    ///
    /// Does not advance the index; advancing is a separate transition so the
    /// surrounding game can sequence feedback in between. A no-op on
    /// terminal sessions.
    #[must_use]
    pub fn submit_answer(&self, is_correct: bool) -> Self {
        if self.status != SessionStatus::Playing {
            return self.clone();
        }
        let result = if is_correct {
            AnswerResult::Correct
        } else {
            AnswerResult::Wrong
        };
        Self {
            results: self.results.update(self.current_index, Some(result)),
            ..self.clone()
        }
    }

    /// Advances to the next drill, or settles the outcome on the last one.
    ///
    /// On the last drill: fewer than 8 correct fails the session; otherwise
    /// it clears, and clearing level 10 clears the whole game. The index
    /// stays clamped at the last drill in terminal states. A no-op on
    /// terminal sessions.
    #[must_use]
    pub fn next_drill(&self) -> Self {
        if self.status != SessionStatus::Playing {
            return self.clone();
        }

        if self.is_last_drill() {
            let status = if self.correct_count() >= PASS_THRESHOLD {
                if self.level == 10 {
                    SessionStatus::AllCleared
                } else {
                    SessionStatus::Result
                }
            } else {
                SessionStatus::Failed
            };
            return Self {
                status,
                ..self.clone()
            };
        }

        Self {
            current_index: self.current_index + 1,
            ..self.clone()
        }
    }

    /// Replaces the entire results sequence in one step.
    ///
    /// Administrative override for debug tooling and tests; index and
    /// status are untouched.
    ///
    /// # Errors
    /// Returns
    /// [`phrasedrill_foundation::ErrorKind::ResultsLengthMismatch`] if the
    /// supplied sequence does not match the drill count.
    pub fn with_results(&self, results: Vec<Option<AnswerResult>>) -> Result<Self> {
        if results.len() != self.drills.len() {
            return Err(Error::results_length_mismatch(
                self.drills.len(),
                results.len(),
            ));
        }
        Ok(Self {
            results: results.into_iter().collect(),
            ..self.clone()
        })
    }

    /// The sole definition of "correct": normalized exact equality.
    ///
    /// Both sides are lowercased, stripped of `. , ? !`, and
    /// whitespace-collapsed. No partial credit, no fuzzy matching.
    #[must_use]
    pub fn check_answer(generated: &str, target: &str) -> bool {
        normalize_answer(generated) == normalize_answer(target)
    }

    /// Checks a generated sentence against the current drill's target.
    ///
    /// False when there is no current drill.
    #[must_use]
    pub fn is_current_correct(&self, generated: &str) -> bool {
        self.current_drill()
            .is_some_and(|drill| Self::check_answer(generated, &drill.english))
    }
}
