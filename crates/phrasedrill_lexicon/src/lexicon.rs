//! Read-only lexicon lookups.
//!
//! A [`Lexicon`] is built once from word lists supplied wholesale by the
//! host (a content store, the seed module, a test fixture) and queried
//! immutably by the generator. Lookups are case-sensitive exact matches on
//! `value`, with one exception: the bound-adverb lookup for intransitive
//! drills is case-insensitive, matching the source behavior.

use std::collections::HashMap;

use crate::word::Word;

/// Read-only word tables keyed by canonical surface form.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    nouns: HashMap<String, Word>,
    verbs: HashMap<String, Word>,
}

impl Lexicon {
    /// Builds a lexicon from noun and verb lists.
    ///
    /// Within a category, `value` is expected to be unique; if a duplicate
    /// appears, the first entry wins and later ones are dropped.
    #[must_use]
    pub fn new(nouns: Vec<Word>, verbs: Vec<Word>) -> Self {
        let mut lexicon = Self::default();
        for noun in nouns {
            lexicon.nouns.entry(noun.value.clone()).or_insert(noun);
        }
        for verb in verbs {
            lexicon.verbs.entry(verb.value.clone()).or_insert(verb);
        }
        lexicon
    }

    /// An empty lexicon. The generator degrades to regular-inflection
    /// heuristics and adjective treatment for every lookup.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up a noun by exact, case-sensitive `value`.
    #[must_use]
    pub fn noun(&self, value: &str) -> Option<&Word> {
        self.nouns.get(value)
    }

    /// Looks up a verb by exact, case-sensitive `value`.
    #[must_use]
    pub fn verb(&self, value: &str) -> Option<&Word> {
        self.verbs.get(value)
    }

    /// Looks up a verb by case-insensitive exact `value`.
    ///
    /// Used only to resolve bound adverbs for intransitive drills.
    #[must_use]
    pub fn verb_ignore_case(&self, value: &str) -> Option<&Word> {
        if let Some(word) = self.verbs.get(value) {
            return Some(word);
        }
        let lowered = value.to_lowercase();
        self.verbs
            .values()
            .find(|w| w.value.to_lowercase() == lowered)
    }

    /// Number of noun entries.
    #[must_use]
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Number of verb entries.
    #[must_use]
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }
}
