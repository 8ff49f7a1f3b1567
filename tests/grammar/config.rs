//! Integration tests for the sentence configuration invariant and defaults.

use phrasedrill::foundation::ErrorKind;
use phrasedrill::grammar::{
    ConfigProps, PatternKind, SentenceConfig, SentenceType, Subject, Tense, VerbType,
};
use proptest::prelude::*;

const SUBJECTS: [Subject; 6] = [
    Subject::FirstSingular,
    Subject::FirstPlural,
    Subject::Second,
    Subject::SecondPlural,
    Subject::ThirdSingular,
    Subject::ThirdPlural,
];

const TENSES: [Tense; 3] = [Tense::Past, Tense::Present, Tense::Future];

const SENTENCE_TYPES: [SentenceType; 3] = [
    SentenceType::Positive,
    SentenceType::Negative,
    SentenceType::Question,
];

#[test]
fn be_with_object_patterns_fails_for_all_contexts() {
    for subject in SUBJECTS {
        for tense in TENSES {
            for sentence_type in SENTENCE_TYPES {
                for pattern in [PatternKind::Svo, PatternKind::Svoo, PatternKind::Svoc] {
                    let result = SentenceConfig::new(ConfigProps {
                        verb_type: VerbType::Be,
                        verb: None,
                        sentence_type,
                        subject,
                        tense,
                        pattern: Some(pattern),
                        object: None,
                        determiner: None,
                        be_complement: None,
                    });
                    let err = result.expect_err("be-verb object pattern must be rejected");
                    assert!(matches!(err.kind, ErrorKind::IncompatiblePattern { .. }));
                }
            }
        }
    }
}

#[test]
fn do_defaults_are_stable() {
    let config = SentenceConfig::new(ConfigProps {
        verb_type: VerbType::Do,
        verb: Some("run".to_string()),
        sentence_type: SentenceType::Positive,
        subject: Subject::FirstSingular,
        tense: Tense::Present,
        pattern: None,
        object: None,
        determiner: None,
        be_complement: None,
    })
    .unwrap();
    assert_eq!(config.pattern(), PatternKind::Svo);
    assert_eq!(config.object(), "something");
    assert_eq!(config.verb(), "run");
}

proptest! {
    #[test]
    fn rotation_is_an_involution(index in 0usize..6) {
        let subject = SUBJECTS[index];
        let config = SentenceConfig::do_verb(
            "run",
            SentenceType::Positive,
            subject,
            Tense::Present,
        );
        let twice = config.rotate_subject().rotate_subject();
        prop_assert_eq!(twice.subject(), subject);
        prop_assert_ne!(config.rotate_subject().subject(), subject);
    }
}
