//! Immutable word records.

use phrasedrill_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

/// Grammatical category of a word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    /// A noun (object or complement candidate).
    Noun,
    /// A verb (do-verb candidate).
    Verb,
    /// An adjective (complement candidate, never takes an article).
    Adjective,
    /// An adverb (complement for intransitive drills).
    Adverb,
}

/// Number tag recorded on noun entries.
///
/// `Uncountable` nouns and `Plural` entries never take a trailing `s` or an
/// `a`/`an` article; only `Singular` countable nouns inflect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NounNumber {
    /// Mass noun; no article, no pluralization (`water`, `music`).
    Uncountable,
    /// Singular countable noun (`dog`, `story`).
    Singular,
    /// An entry that is already plural (`dogs`, `parents`).
    Plural,
}

/// A word record used by the generator.
///
/// `value` is the canonical surface form, unique within its category.
/// Lookups elsewhere in the engine are case-sensitive exact matches on
/// `value`, with one documented exception (the bound-adverb lookup).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Canonical surface form.
    pub value: String,
    /// Display label (may carry a native-language gloss).
    pub label: String,
    /// Grammatical category.
    pub category: WordCategory,
    /// Number tag; nouns only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NounNumber>,
    /// Irregular past form; verbs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_form: Option<String>,
    /// Irregular third-person-singular form; verbs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_person_form: Option<String>,
    /// Bound adverb used as the complement in intransitive (SV) drills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adverb: Option<String>,
    /// Sentence pattern tag this verb is valid for (e.g. `SV`, `SVO`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_tag: Option<String>,
    /// Ordering used when seeding and listing; never consulted by gameplay.
    #[serde(default)]
    pub sort_order: u32,
}

impl Word {
    /// Creates a noun entry.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::EmptyField`] if `value`
    /// is empty.
    pub fn noun(
        value: impl Into<String>,
        label: impl Into<String>,
        number: NounNumber,
        sort_order: u32,
    ) -> Result<Self> {
        Self::build(value, label, WordCategory::Noun, Some(number), sort_order)
    }

    /// Creates a verb entry with regular inflection.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::EmptyField`] if `value`
    /// is empty.
    pub fn verb(
        value: impl Into<String>,
        label: impl Into<String>,
        sort_order: u32,
    ) -> Result<Self> {
        Self::build(value, label, WordCategory::Verb, None, sort_order)
    }

    /// Creates an adjective entry.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::EmptyField`] if `value`
    /// is empty.
    pub fn adjective(
        value: impl Into<String>,
        label: impl Into<String>,
        sort_order: u32,
    ) -> Result<Self> {
        Self::build(value, label, WordCategory::Adjective, None, sort_order)
    }

    /// Creates an adverb entry.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::EmptyField`] if `value`
    /// is empty.
    pub fn adverb(
        value: impl Into<String>,
        label: impl Into<String>,
        sort_order: u32,
    ) -> Result<Self> {
        Self::build(value, label, WordCategory::Adverb, None, sort_order)
    }

    fn build(
        value: impl Into<String>,
        label: impl Into<String>,
        category: WordCategory,
        number: Option<NounNumber>,
        sort_order: u32,
    ) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::empty_field("Word", "value"));
        }
        Ok(Self {
            value,
            label: label.into(),
            category,
            number,
            past_form: None,
            third_person_form: None,
            adverb: None,
            pattern_tag: None,
            sort_order,
        })
    }

    /// Attaches an irregular past form.
    #[must_use]
    pub fn with_past_form(mut self, past: impl Into<String>) -> Self {
        self.past_form = Some(past.into());
        self
    }

    /// Attaches an irregular third-person-singular form.
    #[must_use]
    pub fn with_third_person_form(mut self, third: impl Into<String>) -> Self {
        self.third_person_form = Some(third.into());
        self
    }

    /// Attaches a bound adverb for intransitive drills.
    #[must_use]
    pub fn with_adverb(mut self, adverb: impl Into<String>) -> Self {
        self.adverb = Some(adverb.into());
        self
    }

    /// Tags the sentence pattern this verb is valid for.
    #[must_use]
    pub fn with_pattern_tag(mut self, tag: impl Into<String>) -> Self {
        self.pattern_tag = Some(tag.into());
        self
    }

    /// Returns true if this noun entry never takes a trailing `s`.
    ///
    /// Non-noun entries (no number tag) report false.
    #[must_use]
    pub fn resists_pluralization(&self) -> bool {
        matches!(
            self.number,
            Some(NounNumber::Uncountable | NounNumber::Plural)
        )
    }
}
