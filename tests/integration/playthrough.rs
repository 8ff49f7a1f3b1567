//! Full quiz playthroughs: configuration → generation → answer check →
//! session transition, over the built-in seed content.

use phrasedrill::grammar::{PatternKind, SentenceConfig, SentenceType, Subject, Tense, generate};
use phrasedrill::lexicon::seed::seed_lexicon;
use phrasedrill::quiz::seed::seed_drills;
use phrasedrill::quiz::{QuizSession, SessionStatus, select_drills};

/// The player's keypad input for each level-1 drill, as a configuration.
fn level_one_answer(target: &str) -> SentenceConfig {
    let (verb, sentence_type, subject, tense) = match target {
        "I run quickly." => ("run", SentenceType::Positive, Subject::FirstSingular, Tense::Present),
        "He runs quickly." => ("run", SentenceType::Positive, Subject::ThirdSingular, Tense::Present),
        "They didn't walk slowly." => ("walk", SentenceType::Negative, Subject::ThirdPlural, Tense::Past),
        "Did you arrive?" => ("arrive", SentenceType::Question, Subject::Second, Tense::Past),
        "We won't laugh." => ("laugh", SentenceType::Negative, Subject::FirstPlural, Tense::Future),
        "I lived." => ("live", SentenceType::Positive, Subject::FirstSingular, Tense::Past),
        "Do they smile?" => ("smile", SentenceType::Question, Subject::ThirdPlural, Tense::Present),
        "He doesn't talk loudly." => ("talk", SentenceType::Negative, Subject::ThirdSingular, Tense::Present),
        "You walked slowly." => ("walk", SentenceType::Positive, Subject::Second, Tense::Past),
        "Will he go?" => ("go", SentenceType::Question, Subject::ThirdSingular, Tense::Future),
        other => panic!("unexpected drill target: {other}"),
    };
    SentenceConfig::do_verb(verb, sentence_type, subject, tense)
        .with_pattern(PatternKind::Sv)
        .expect("SV is valid for do")
}

#[test]
fn perfect_level_one_run_clears_the_level() {
    let lexicon = seed_lexicon();
    let drills = select_drills(&seed_drills(), 1, 10, 0);
    let mut session = QuizSession::start(1, drills).unwrap();

    while session.status() == SessionStatus::Playing {
        let drill = session.current_drill().expect("playing implies a drill").clone();
        let config = level_one_answer(&drill.english);
        let generated = generate(&config, &lexicon);
        let correct = session.is_current_correct(&generated);
        assert!(correct, "generated {generated:?} for target {:?}", drill.english);
        session = session.submit_answer(correct).next_drill();
    }

    assert_eq!(session.status(), SessionStatus::Result);
    assert_eq!(session.correct_count(), 10);
}

#[test]
fn three_misses_fail_the_level() {
    let lexicon = seed_lexicon();
    let drills = select_drills(&seed_drills(), 1, 10, 0);
    let mut session = QuizSession::start(1, drills).unwrap();
    let mut missed = 0;

    while session.status() == SessionStatus::Playing {
        let drill = session.current_drill().expect("playing implies a drill").clone();
        // The player fumbles polarity on the first three drills.
        let mut config = level_one_answer(&drill.english);
        if missed < 3 {
            config = config.with_sentence_type(SentenceType::Question);
            missed += 1;
        }
        let generated = generate(&config, &lexicon);
        session = session
            .submit_answer(session.is_current_correct(&generated))
            .next_drill();
    }

    assert_eq!(session.status(), SessionStatus::Failed);
    assert_eq!(session.correct_count(), 7);
}

#[test]
fn editing_a_configuration_toward_the_target() {
    // The player starts from the default do-verb state and edits step by
    // step, regenerating after each transition, as the UI does.
    let lexicon = seed_lexicon();
    let target = "They didn't walk slowly.";

    let mut config = SentenceConfig::do_verb(
        "walk",
        SentenceType::Positive,
        Subject::ThirdSingular,
        Tense::Present,
    )
    .with_pattern(PatternKind::Sv)
    .expect("SV is valid for do");
    assert_eq!(generate(&config, &lexicon), "He walks slowly.");

    config = config.rotate_subject();
    assert_eq!(generate(&config, &lexicon), "They walk slowly.");

    config = config.with_tense(Tense::Past);
    assert_eq!(generate(&config, &lexicon), "They walked slowly.");

    config = config.with_sentence_type(SentenceType::Negative);
    let generated = generate(&config, &lexicon);
    assert_eq!(generated, target);
    assert!(QuizSession::check_answer(&generated, target));
}

#[test]
fn level_ten_mixes_families_and_all_clears() {
    let drills = select_drills(&seed_drills(), 10, 10, 1234);
    let mut session = QuizSession::start(10, drills).unwrap();
    assert_eq!(session.time_limit_secs(), 10);

    while session.status() == SessionStatus::Playing {
        session = session.submit_answer(true).next_drill();
    }
    assert_eq!(session.status(), SessionStatus::AllCleared);
}
