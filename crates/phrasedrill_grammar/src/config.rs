//! The sentence configuration value object.
//!
//! A [`SentenceConfig`] is the complete grammatical state of one
//! sentence-in-progress. It validates the be-verb/pattern invariant at
//! construction and exposes pure copy-on-write transitions; no instance is
//! ever mutated in place.

use phrasedrill_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Discriminants
// =============================================================================

/// Whether the sentence is built around the copula or an action verb.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbType {
    /// An action verb conjugated with do-support.
    Do,
    /// The copula `be`.
    Be,
}

impl VerbType {
    /// Static name used in validation errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Be => "be",
        }
    }
}

/// Polarity and mood of the sentence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    /// Declarative, affirmative.
    Positive,
    /// Declarative, negated.
    Negative,
    /// Yes/no question with subject-auxiliary inversion.
    Question,
}

/// The six person/number subject slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// `I`
    FirstSingular,
    /// `we`
    FirstPlural,
    /// `you`
    Second,
    /// `you` (plural)
    SecondPlural,
    /// `he`
    ThirdSingular,
    /// `they`
    ThirdPlural,
}

impl Subject {
    /// The fixed surface form for this subject slot.
    ///
    /// Always lower-case except `I`; sentence-initial capitalization happens
    /// once, at finalization.
    #[must_use]
    pub const fn surface(self) -> &'static str {
        match self {
            Self::FirstSingular => "I",
            Self::FirstPlural => "we",
            Self::Second | Self::SecondPlural => "you",
            Self::ThirdSingular => "he",
            Self::ThirdPlural => "they",
        }
    }

    /// True for the grammatically plural slots (we / you-plural / they).
    #[must_use]
    pub const fn is_plural(self) -> bool {
        matches!(self, Self::FirstPlural | Self::SecondPlural | Self::ThirdPlural)
    }

    /// The partner in the fixed 2-cycle rotation pairing.
    ///
    /// first-singular↔first-plural, second↔second-plural,
    /// third-singular↔third-plural. Applying twice returns the original.
    #[must_use]
    pub const fn rotated(self) -> Self {
        match self {
            Self::FirstSingular => Self::FirstPlural,
            Self::FirstPlural => Self::FirstSingular,
            Self::Second => Self::SecondPlural,
            Self::SecondPlural => Self::Second,
            Self::ThirdSingular => Self::ThirdPlural,
            Self::ThirdPlural => Self::ThirdSingular,
        }
    }
}

/// Grammatical tense.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Simple past.
    Past,
    /// Simple present.
    Present,
    /// `will` future.
    Future,
}

/// The five basic sentence patterns.
///
/// `Svoo` and `Svoc` are reserved: structurally valid, but the generator
/// produces an empty complement for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatternKind {
    /// Subject-Verb.
    Sv,
    /// Subject-Verb-Complement.
    Svc,
    /// Subject-Verb-Object.
    Svo,
    /// Subject-Verb-Object-Object (reserved).
    Svoo,
    /// Subject-Verb-Object-Complement (reserved).
    Svoc,
}

impl PatternKind {
    /// Static name used in validation errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sv => "SV",
            Self::Svc => "SVC",
            Self::Svo => "SVO",
            Self::Svoo => "SVOO",
            Self::Svoc => "SVOC",
        }
    }

    /// True for the object-taking patterns a copula cannot head.
    #[must_use]
    pub const fn requires_object(self) -> bool {
        matches!(self, Self::Svo | Self::Svoo | Self::Svoc)
    }
}

/// Determiner selection applied to the object or noun complement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Determiner {
    /// Bare noun.
    None,
    /// Indefinite article, vowel-adjusted at generation time.
    A,
    /// Indefinite article, vowel-adjusted at generation time.
    An,
    /// Plural form requested; bare noun.
    Plural,
    /// Definite article.
    The,
    /// Possessive `my`.
    My,
    /// Possessive `our`.
    Our,
    /// Possessive `your`.
    Your,
    /// Possessive `his`.
    His,
    /// Possessive `her`.
    Her,
    /// Possessive `their`.
    Their,
    /// Explicitly article-less.
    NoArticle,
    /// Complement is an adjective; articles degrade to bare.
    Adjective,
}

impl Determiner {
    /// The possessive surface form, if this determiner is one of the six.
    #[must_use]
    pub const fn possessive_text(self) -> Option<&'static str> {
        match self {
            Self::My => Some("my"),
            Self::Our => Some("our"),
            Self::Your => Some("your"),
            Self::His => Some("his"),
            Self::Her => Some("her"),
            Self::Their => Some("their"),
            _ => None,
        }
    }
}

// =============================================================================
// Sentence Configuration
// =============================================================================

/// Construction properties for [`SentenceConfig`].
///
/// Optional fields receive verb-type-dependent defaults; see
/// [`SentenceConfig::new`].
#[derive(Clone, Debug, Deserialize)]
pub struct ConfigProps {
    /// Copula or action verb.
    pub verb_type: VerbType,
    /// The action verb; meaningless when `verb_type` is `Be`.
    #[serde(default)]
    pub verb: Option<String>,
    /// Polarity / mood.
    pub sentence_type: SentenceType,
    /// Person/number slot.
    pub subject: Subject,
    /// Grammatical tense.
    pub tense: Tense,
    /// Sentence pattern; defaults to `SV` for be, `SVO` for do.
    #[serde(default)]
    pub pattern: Option<PatternKind>,
    /// Direct object; defaults to `something`.
    #[serde(default)]
    pub object: Option<String>,
    /// Determiner; defaults to `a` for be, bare for do.
    #[serde(default)]
    pub determiner: Option<Determiner>,
    /// Copula complement; defaults to `here`.
    #[serde(default)]
    pub be_complement: Option<String>,
}

/// The complete grammatical state of one sentence-in-progress.
///
/// Fully immutable: every edit returns a new instance. The be-verb/pattern
/// invariant is checked at construction and again by the pattern transition,
/// so a held value is always valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigProps")]
pub struct SentenceConfig {
    verb_type: VerbType,
    verb: String,
    sentence_type: SentenceType,
    subject: Subject,
    tense: Tense,
    pattern: PatternKind,
    object: String,
    determiner: Determiner,
    be_complement: String,
}

impl TryFrom<ConfigProps> for SentenceConfig {
    type Error = Error;

    fn try_from(props: ConfigProps) -> Result<Self> {
        Self::new(props)
    }
}

impl SentenceConfig {
    /// Creates a configuration, applying defaults and validating the
    /// be-verb/pattern invariant.
    ///
    /// Defaults for omitted fields: pattern `SV` (be) / `SVO` (do), object
    /// `something`, determiner `a` (be) / bare (do), complement `here`.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::IncompatiblePattern`]
    /// if a `be` configuration requests `SVO`, `SVOO`, or `SVOC`.
    pub fn new(props: ConfigProps) -> Result<Self> {
        let pattern = props.pattern.unwrap_or(match props.verb_type {
            VerbType::Be => PatternKind::Sv,
            VerbType::Do => PatternKind::Svo,
        });
        let determiner = props.determiner.unwrap_or(match props.verb_type {
            VerbType::Be => Determiner::A,
            VerbType::Do => Determiner::None,
        });
        let config = Self {
            verb_type: props.verb_type,
            verb: props.verb.unwrap_or_default(),
            sentence_type: props.sentence_type,
            subject: props.subject,
            tense: props.tense,
            pattern,
            object: props.object.unwrap_or_else(|| "something".to_string()),
            determiner,
            be_complement: props.be_complement.unwrap_or_else(|| "here".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a copula configuration with all defaults applied.
    #[must_use]
    pub fn be(sentence_type: SentenceType, subject: Subject, tense: Tense) -> Self {
        Self {
            verb_type: VerbType::Be,
            verb: String::new(),
            sentence_type,
            subject,
            tense,
            pattern: PatternKind::Sv,
            object: "something".to_string(),
            determiner: Determiner::A,
            be_complement: "here".to_string(),
        }
    }

    /// Creates an action-verb configuration with all defaults applied.
    #[must_use]
    pub fn do_verb(
        verb: impl Into<String>,
        sentence_type: SentenceType,
        subject: Subject,
        tense: Tense,
    ) -> Self {
        Self {
            verb_type: VerbType::Do,
            verb: verb.into(),
            sentence_type,
            subject,
            tense,
            pattern: PatternKind::Svo,
            object: "something".to_string(),
            determiner: Determiner::None,
            be_complement: "here".to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.verb_type == VerbType::Be && self.pattern.requires_object() {
            return Err(Error::incompatible_pattern(
                self.verb_type.name(),
                self.pattern.name(),
            ));
        }
        Ok(())
    }

    // Accessors

    /// Copula or action verb.
    #[must_use]
    pub fn verb_type(&self) -> VerbType {
        self.verb_type
    }

    /// The configured action verb (meaningless for `be` configurations).
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Polarity / mood.
    #[must_use]
    pub fn sentence_type(&self) -> SentenceType {
        self.sentence_type
    }

    /// Person/number slot.
    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    /// Grammatical tense.
    #[must_use]
    pub fn tense(&self) -> Tense {
        self.tense
    }

    /// Sentence pattern.
    #[must_use]
    pub fn pattern(&self) -> PatternKind {
        self.pattern
    }

    /// Direct object.
    #[must_use]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Determiner selection.
    #[must_use]
    pub fn determiner(&self) -> Determiner {
        self.determiner
    }

    /// Copula complement.
    #[must_use]
    pub fn be_complement(&self) -> &str {
        &self.be_complement
    }

    // Transitions

    /// Toggles the subject within its fixed singular/plural pairing.
    #[must_use]
    pub fn rotate_subject(&self) -> Self {
        Self {
            subject: self.subject.rotated(),
            ..self.clone()
        }
    }

    /// Sets the subject directly, without rotation.
    #[must_use]
    pub fn with_subject(&self, subject: Subject) -> Self {
        Self {
            subject,
            ..self.clone()
        }
    }

    /// Changes the tense.
    #[must_use]
    pub fn with_tense(&self, tense: Tense) -> Self {
        Self {
            tense,
            ..self.clone()
        }
    }

    /// Changes the polarity / mood.
    #[must_use]
    pub fn with_sentence_type(&self, sentence_type: SentenceType) -> Self {
        Self {
            sentence_type,
            ..self.clone()
        }
    }

    /// Changes the sentence pattern, revalidating the be-verb invariant.
    ///
    /// # Errors
    /// Returns [`phrasedrill_foundation::ErrorKind::IncompatiblePattern`]
    /// if the new pattern requires an object and this is a `be`
    /// configuration.
    pub fn with_pattern(&self, pattern: PatternKind) -> Result<Self> {
        let next = Self {
            pattern,
            ..self.clone()
        };
        next.validate()?;
        Ok(next)
    }

    /// Changes the action verb.
    #[must_use]
    pub fn with_verb(&self, verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            ..self.clone()
        }
    }

    /// Changes the direct object.
    #[must_use]
    pub fn with_object(&self, object: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            ..self.clone()
        }
    }

    /// Changes the determiner selection.
    #[must_use]
    pub fn with_determiner(&self, determiner: Determiner) -> Self {
        Self {
            determiner,
            ..self.clone()
        }
    }

    /// Changes the copula complement.
    #[must_use]
    pub fn with_be_complement(&self, complement: impl Into<String>) -> Self {
        Self {
            be_complement: complement.into(),
            ..self.clone()
        }
    }
}
