//! Drill target records.

use phrasedrill_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

/// One target sentence pair used as a quiz item.
///
/// `sort_order` is consulted only when seeding and selecting drills, never
/// by gameplay logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    /// Unique identifier.
    pub id: String,
    /// Pattern tag used by the level curriculum (e.g. `DO_SV`, `BE_SVC`).
    pub pattern_tag: String,
    /// The expected English answer.
    pub english: String,
    /// The native-language prompt shown to the player.
    pub prompt: String,
    /// Seeding/selection order.
    pub sort_order: u32,
}

impl Drill {
    /// Creates a drill record.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::EmptyField`] if `id`,
    /// `english`, or `prompt` is empty.
    pub fn new(
        id: impl Into<String>,
        pattern_tag: impl Into<String>,
        english: impl Into<String>,
        prompt: impl Into<String>,
        sort_order: u32,
    ) -> Result<Self> {
        let drill = Self {
            id: id.into(),
            pattern_tag: pattern_tag.into(),
            english: english.into(),
            prompt: prompt.into(),
            sort_order,
        };
        if drill.id.is_empty() {
            return Err(Error::empty_field("Drill", "id"));
        }
        if drill.english.is_empty() {
            return Err(Error::empty_field("Drill", "english"));
        }
        if drill.prompt.is_empty() {
            return Err(Error::empty_field("Drill", "prompt"));
        }
        Ok(drill)
    }
}
