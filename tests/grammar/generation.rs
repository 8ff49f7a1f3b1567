//! Integration tests for surface generation against a real lexicon.

use phrasedrill::grammar::{
    Determiner, PatternKind, SentenceConfig, SentenceType, Subject, Tense, generate,
};
use phrasedrill::lexicon::seed::seed_lexicon;
use phrasedrill::lexicon::{Lexicon, NounNumber, Word};

#[test]
fn negative_past_copula_with_adverbial_complement() {
    let config = SentenceConfig::be(SentenceType::Negative, Subject::ThirdPlural, Tense::Past)
        .with_be_complement("there");
    assert_eq!(generate(&config, &seed_lexicon()), "They weren't there.");
}

#[test]
fn copula_complement_agrees_with_subject_number() {
    let base = SentenceConfig::be(SentenceType::Positive, Subject::ThirdSingular, Tense::Present)
        .with_pattern(PatternKind::Svc)
        .unwrap()
        .with_be_complement("dog");
    assert_eq!(generate(&base, &seed_lexicon()), "He is a dog.");

    let plural = base.with_subject(Subject::ThirdPlural);
    assert_eq!(generate(&plural, &seed_lexicon()), "They are dogs.");
}

#[test]
fn negative_past_action_with_article_object() {
    let config = SentenceConfig::do_verb("eat", SentenceType::Negative, Subject::FirstPlural, Tense::Past)
        .with_object("apple")
        .with_determiner(Determiner::An);
    assert_eq!(generate(&config, &seed_lexicon()), "We didn't eat an apple.");
}

#[test]
fn generation_uses_seeded_irregular_forms() {
    let lexicon = seed_lexicon();

    let went = SentenceConfig::do_verb("go", SentenceType::Positive, Subject::ThirdSingular, Tense::Past)
        .with_pattern(PatternKind::Sv)
        .unwrap();
    assert_eq!(generate(&went, &lexicon), "He went.");

    let has = SentenceConfig::do_verb("have", SentenceType::Positive, Subject::ThirdSingular, Tense::Present)
        .with_object("dog")
        .with_determiner(Determiner::A);
    assert_eq!(generate(&has, &lexicon), "He has a dog.");
}

#[test]
fn incomplete_lexicon_still_produces_output() {
    let lexicon = Lexicon::empty();
    let config = SentenceConfig::do_verb("go", SentenceType::Positive, Subject::ThirdSingular, Tense::Past)
        .with_pattern(PatternKind::Sv)
        .unwrap();
    // Regular-inflection fallback, wrong but present.
    assert_eq!(generate(&config, &lexicon), "He goed.");
}

#[test]
fn naive_pluralization_is_preserved() {
    // The complement rule appends a bare 's'; irregular plurals are a known
    // simplification, not corrected here.
    let lexicon = Lexicon::new(
        vec![Word::noun("man", "man", NounNumber::Singular, 1).unwrap()],
        Vec::new(),
    );
    let config = SentenceConfig::be(SentenceType::Positive, Subject::ThirdPlural, Tense::Present)
        .with_pattern(PatternKind::Svc)
        .unwrap()
        .with_be_complement("man");
    assert_eq!(generate(&config, &lexicon), "They are mans.");
}

#[test]
fn every_seed_drill_target_is_reachable_from_a_config() {
    // Spot-check one drill per family against a hand-built configuration.
    let lexicon = seed_lexicon();

    let sv = SentenceConfig::do_verb("run", SentenceType::Positive, Subject::FirstSingular, Tense::Present)
        .with_pattern(PatternKind::Sv)
        .unwrap();
    assert_eq!(generate(&sv, &lexicon), "I run quickly.");

    let svo = SentenceConfig::do_verb("teach", SentenceType::Positive, Subject::ThirdSingular, Tense::Present)
        .with_object("English")
        .with_determiner(Determiner::None);
    assert_eq!(generate(&svo, &lexicon), "He teaches English.");

    let svc = SentenceConfig::be(SentenceType::Positive, Subject::ThirdPlural, Tense::Present)
        .with_pattern(PatternKind::Svc)
        .unwrap()
        .with_be_complement("soccer player")
        .with_determiner(Determiner::A);
    assert_eq!(generate(&svc, &lexicon), "They are soccer players.");
}
