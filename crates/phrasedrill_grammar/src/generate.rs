//! The sentence generator.
//!
//! A pure function from a [`SentenceConfig`] plus a [`Lexicon`] to surface
//! text. Structurally valid input never fails: unknown words fall back to
//! regular-inflection heuristics, and reserved pattern combinations yield an
//! empty complement.

use phrasedrill_foundation::text::{capitalize_first, starts_with_vowel};
use phrasedrill_lexicon::Lexicon;

use crate::config::{
    Determiner, PatternKind, SentenceConfig, SentenceType, Subject, Tense, VerbType,
};

/// Generates the surface sentence for a configuration.
///
/// Returns the empty string only when no sentence can be assembled yet;
/// callers treat that as "no output", not an error. Otherwise the result is
/// capitalized and terminated with `?` for questions, `.` for statements.
#[must_use]
pub fn generate(config: &SentenceConfig, lexicon: &Lexicon) -> String {
    let raw = match config.verb_type() {
        VerbType::Be => generate_be(config, lexicon),
        VerbType::Do => generate_do(config, lexicon),
    };

    if raw.is_empty() {
        return raw;
    }

    let punctuation = match config.sentence_type() {
        SentenceType::Question => '?',
        SentenceType::Positive | SentenceType::Negative => '.',
    };
    let mut sentence = capitalize_first(&raw);
    sentence.push(punctuation);
    sentence
}

// =============================================================================
// Be branch
// =============================================================================

/// Copula form by tense and subject. Future is handled in assembly as
/// `will be`, so it has no finite copula here.
fn copula(tense: Tense, subject: Subject) -> &'static str {
    match tense {
        Tense::Past => match subject {
            Subject::FirstSingular | Subject::ThirdSingular => "was",
            _ => "were",
        },
        Tense::Present => match subject {
            Subject::FirstSingular => "am",
            Subject::ThirdSingular => "is",
            _ => "are",
        },
        Tense::Future => "",
    }
}

fn generate_be(config: &SentenceConfig, lexicon: &Lexicon) -> String {
    let subject = config.subject();
    let subject_text = subject.surface();
    let tense = config.tense();

    let complement = match config.pattern() {
        // SV: the complement is a raw adverbial phrase, untouched.
        PatternKind::Sv => config.be_complement().to_string(),
        PatternKind::Svc => format_be_complement(
            config.be_complement(),
            subject,
            config.determiner(),
            lexicon,
        ),
        // Unreachable for a validated config; produce nothing rather than
        // guessing grammar.
        PatternKind::Svo | PatternKind::Svoo | PatternKind::Svoc => String::new(),
    };

    if tense == Tense::Future {
        return match config.sentence_type() {
            SentenceType::Positive => format!("{subject_text} will be {complement}"),
            SentenceType::Negative => format!("{subject_text} won't be {complement}"),
            SentenceType::Question => format!("will {subject_text} be {complement}"),
        };
    }

    let be_verb = copula(tense, subject);
    match config.sentence_type() {
        SentenceType::Positive => format!("{subject_text} {be_verb} {complement}"),
        SentenceType::Negative => match tense {
            Tense::Past => match subject {
                Subject::FirstSingular | Subject::ThirdSingular => {
                    format!("{subject_text} wasn't {complement}")
                }
                _ => format!("{subject_text} weren't {complement}"),
            },
            Tense::Present => match subject {
                Subject::FirstSingular => format!("{subject_text}'m not {complement}"),
                Subject::ThirdSingular => format!("{subject_text} isn't {complement}"),
                _ => format!("{subject_text} aren't {complement}"),
            },
            Tense::Future => String::new(),
        },
        SentenceType::Question => {
            format!("{} {subject_text} {complement}", capitalize_first(be_verb))
        }
    }
}

/// Formats a copula complement: pluralization by subject, then determiner.
///
/// The pluralization is naive by design: a plural subject appends `s` to any
/// singular countable noun, with no irregular-plural table. A value missing
/// from the noun lexicon is treated as an adjective and returned unchanged.
fn format_be_complement(
    base: &str,
    subject: Subject,
    determiner: Determiner,
    lexicon: &Lexicon,
) -> String {
    // 'something' is a pronoun: no article, no pluralization.
    if base == "something" {
        return base.to_string();
    }

    let Some(noun) = lexicon.noun(base) else {
        return base.to_string();
    };

    let plural_subject = subject.is_plural();
    let noun_text = if plural_subject && !noun.resists_pluralization() {
        format!("{base}s")
    } else {
        base.to_string()
    };

    if let Some(possessive) = determiner.possessive_text() {
        return format!("{possessive} {noun_text}");
    }
    match determiner {
        Determiner::The => format!("the {noun_text}"),
        Determiner::Plural | Determiner::None | Determiner::NoArticle => noun_text,
        Determiner::A | Determiner::An | Determiner::Adjective => {
            // A plural subject or a non-inflecting noun never takes a/an.
            if plural_subject || noun.resists_pluralization() {
                noun_text
            } else {
                let article = if starts_with_vowel(&noun_text) { "an" } else { "a" };
                format!("{article} {noun_text}")
            }
        }
        // Possessives handled above.
        _ => noun_text,
    }
}

// =============================================================================
// Do branch
// =============================================================================

fn generate_do(config: &SentenceConfig, lexicon: &Lexicon) -> String {
    let subject = config.subject();
    let subject_text = subject.surface();

    // An unset verb (or a stray 'be') falls back to a sensible intransitive.
    let verb_base = match config.verb() {
        "" | "be" => "live",
        v => v,
    };

    let mut complement = pattern_complement(config.pattern(), config.object(), config.determiner());

    // Intransitive drills may bind an adverb to the verb.
    if config.pattern() == PatternKind::Sv {
        if let Some(adverb) = lexicon
            .verb_ignore_case(verb_base)
            .and_then(|w| w.adverb.as_deref())
        {
            complement = adverb.to_string();
        }
    }

    let tail = if complement.is_empty() {
        String::new()
    } else {
        format!(" {complement}")
    };

    match config.tense() {
        Tense::Future => match config.sentence_type() {
            SentenceType::Positive => format!("{subject_text} will {verb_base}{tail}"),
            SentenceType::Negative => format!("{subject_text} won't {verb_base}{tail}"),
            SentenceType::Question => format!("Will {subject_text} {verb_base}{tail}"),
        },
        Tense::Past => match config.sentence_type() {
            SentenceType::Positive => {
                let past = past_form(verb_base, lexicon);
                format!("{subject_text} {past}{tail}")
            }
            SentenceType::Negative => format!("{subject_text} didn't {verb_base}{tail}"),
            SentenceType::Question => format!("Did {subject_text} {verb_base}{tail}"),
        },
        Tense::Present => match config.sentence_type() {
            SentenceType::Positive => {
                if subject == Subject::ThirdSingular {
                    let third = third_person_form(verb_base, lexicon);
                    format!("{subject_text} {third}{tail}")
                } else {
                    format!("{subject_text} {verb_base}{tail}")
                }
            }
            SentenceType::Negative => {
                if subject == Subject::ThirdSingular {
                    format!("{subject_text} doesn't {verb_base}{tail}")
                } else {
                    format!("{subject_text} don't {verb_base}{tail}")
                }
            }
            SentenceType::Question => {
                if subject == Subject::ThirdSingular {
                    format!("Does {subject_text} {verb_base}{tail}")
                } else {
                    format!("Do {subject_text} {verb_base}{tail}")
                }
            }
        },
    }
}

/// The object phrase for a pattern.
///
/// `SVOO`, `SVOC`, and `SVC` are reserved for future pattern support and
/// deliberately produce an empty complement; they are cheap no-ops, not
/// errors.
fn pattern_complement(pattern: PatternKind, object: &str, determiner: Determiner) -> String {
    match pattern {
        PatternKind::Sv => String::new(),
        PatternKind::Svo => {
            if let Some(possessive) = determiner.possessive_text() {
                return format!("{possessive} {object}");
            }
            match determiner {
                Determiner::The => format!("the {object}"),
                Determiner::A | Determiner::An => {
                    let article = if starts_with_vowel(object) { "an" } else { "a" };
                    format!("{article} {object}")
                }
                Determiner::None
                | Determiner::Plural
                | Determiner::NoArticle
                | Determiner::Adjective => object.to_string(),
                // Possessives handled above.
                _ => object.to_string(),
            }
        }
        PatternKind::Svoo | PatternKind::Svoc | PatternKind::Svc => String::new(),
    }
}

/// Past form: irregular table first, then regular `-ed`.
fn past_form(verb: &str, lexicon: &Lexicon) -> String {
    if let Some(past) = lexicon.verb(verb).and_then(|w| w.past_form.as_deref()) {
        return past.to_string();
    }
    format!("{verb}ed")
}

/// Third-person-singular form: irregular table first, then suffix rules.
fn third_person_form(verb: &str, lexicon: &Lexicon) -> String {
    if let Some(third) = lexicon
        .verb(verb)
        .and_then(|w| w.third_person_form.as_deref())
    {
        return third.to_string();
    }
    if ["ch", "sh", "s", "x", "o"].iter().any(|s| verb.ends_with(s)) {
        return format!("{verb}es");
    }
    if verb.ends_with('y') {
        let stem = &verb[..verb.len() - 1];
        let penultimate = stem.chars().last();
        let vowel_before_y = penultimate
            .map(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
            .unwrap_or(false);
        if !vowel_before_y {
            return format!("{stem}ies");
        }
    }
    format!("{verb}s")
}
