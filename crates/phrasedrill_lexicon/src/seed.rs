//! Built-in demo content.
//!
//! A small but realistic word set for offline use and tests: intransitive
//! and transitive verbs (with irregular past and third-person forms where
//! English has them), countable/uncountable/plural noun entries, and a few
//! bound adverbs for intransitive drills.

use crate::lexicon::Lexicon;
use crate::word::{NounNumber, Word, WordCategory};

fn noun(value: &str, label: &str, number: NounNumber, sort_order: u32) -> Word {
    Word {
        value: value.to_string(),
        label: label.to_string(),
        category: WordCategory::Noun,
        number: Some(number),
        past_form: None,
        third_person_form: None,
        adverb: None,
        pattern_tag: None,
        sort_order,
    }
}

fn verb(
    value: &str,
    label: &str,
    pattern_tag: &str,
    past: Option<&str>,
    third: Option<&str>,
    adverb: Option<&str>,
    sort_order: u32,
) -> Word {
    Word {
        value: value.to_string(),
        label: label.to_string(),
        category: WordCategory::Verb,
        number: None,
        past_form: past.map(str::to_string),
        third_person_form: third.map(str::to_string),
        adverb: adverb.map(str::to_string),
        pattern_tag: Some(pattern_tag.to_string()),
        sort_order,
    }
}

/// The built-in noun list.
#[must_use]
pub fn seed_nouns() -> Vec<Word> {
    use NounNumber::{Plural, Singular, Uncountable};
    vec![
        noun("something", "something (何か)", Uncountable, 1),
        noun("dog", "dog (犬)", Singular, 2),
        noun("dogs", "dogs (犬)", Plural, 3),
        noun("story", "story (物語)", Singular, 4),
        noun("stories", "stories (物語)", Plural, 5),
        noun("soccer player", "soccer player (サッカー選手)", Singular, 6),
        noun("soccer players", "soccer players (サッカー選手)", Plural, 7),
        noun("gold medal", "gold medal (金メダル)", Singular, 8),
        noun("gold medals", "gold medals (金メダル)", Plural, 9),
        noun("passport", "passport (パスポート)", Singular, 10),
        noun("passports", "passports (パスポート)", Plural, 11),
        noun("chair", "chair (椅子)", Singular, 12),
        noun("chairs", "chairs (椅子)", Plural, 13),
        noun("butterfly", "butterfly (蝶)", Singular, 14),
        noun("butterflies", "butterflies (蝶)", Plural, 15),
        noun("parents", "parents (両親)", Plural, 16),
        noun("fruit", "fruit (果物)", Singular, 17),
        noun("fruits", "fruits (果物)", Plural, 18),
        noun("key", "key (鍵)", Singular, 19),
        noun("keys", "keys (鍵)", Plural, 20),
        noun("taxi", "taxi (タクシー)", Singular, 21),
        noun("taxis", "taxis (タクシー)", Plural, 22),
        noun("airplane", "airplane (飛行機)", Singular, 23),
        noun("airplanes", "airplanes (飛行機)", Plural, 24),
        noun("sound", "sound (音)", Singular, 25),
        noun("sounds", "sounds (音)", Plural, 26),
        noun("soccer", "soccer (サッカー)", Uncountable, 27),
        noun("violin", "violin (バイオリン)", Singular, 28),
        noun("violins", "violins (バイオリン)", Plural, 29),
        noun("song", "song (歌)", Singular, 30),
        noun("songs", "songs (歌)", Plural, 31),
        noun("English", "English (英語)", Uncountable, 32),
        noun("newspaper", "newspaper (新聞)", Singular, 33),
        noun("newspapers", "newspapers (新聞)", Plural, 34),
        noun("letter", "letter (手紙)", Singular, 35),
        noun("letters", "letters (手紙)", Plural, 36),
        noun("coffee", "coffee (コーヒー)", Uncountable, 37),
        noun("pizza", "pizza (ピザ)", Uncountable, 38),
        noun("pizzas", "pizzas (ピザ)", Plural, 40),
        noun("dinner", "dinner (夕食)", Uncountable, 41),
        noun("car", "car (車)", Singular, 42),
        noun("cars", "cars (車)", Plural, 43),
        noun("water", "water (水)", Uncountable, 44),
        noun("music", "music (音楽)", Uncountable, 45),
        noun("information", "information (情報)", Uncountable, 46),
        noun("advice", "advice (助言)", Uncountable, 47),
        noun("homework", "homework (宿題)", Uncountable, 48),
    ]
}

/// The built-in verb list.
#[must_use]
pub fn seed_verbs() -> Vec<Word> {
    vec![
        // Intransitive (SV)
        verb("do", "do (する)", "SV", Some("did"), Some("does"), None, 1),
        verb("live", "live (住む)", "SV", None, None, None, 2),
        verb("go", "go (行く)", "SV", Some("went"), None, None, 3),
        verb("arrive", "arrive (着く)", "SV", None, None, None, 4),
        verb("talk", "talk (話す)", "SV", None, None, Some("loudly"), 5),
        verb("run", "run (走る)", "SV", Some("ran"), None, Some("quickly"), 6),
        verb("walk", "walk (歩く)", "SV", None, None, Some("slowly"), 7),
        verb("smile", "smile (笑う)", "SV", None, None, None, 8),
        verb("laugh", "laugh (笑う)", "SV", None, None, None, 9),
        // Transitive (SVO)
        verb("have", "have (持つ)", "SVO", Some("had"), Some("has"), None, 2),
        verb("know", "know (知る)", "SVO", Some("knew"), None, None, 3),
        verb("get", "get (獲得する)", "SVO", Some("got"), None, None, 4),
        verb("make", "make (作る)", "SVO", Some("made"), None, None, 5),
        verb("catch", "catch (捕まえる)", "SVO", Some("caught"), None, None, 6),
        verb("love", "love (愛する)", "SVO", None, None, None, 7),
        verb("like", "like (気に入る)", "SVO", None, None, None, 8),
        verb("take", "take (取る、持っていく)", "SVO", Some("took"), None, None, 9),
        verb("see", "see (見える)", "SVO", Some("saw"), None, None, 10),
        verb("hear", "hear (聞こえる)", "SVO", Some("heard"), None, None, 11),
        verb("play", "play (遊ぶ、演奏する)", "SVO", None, None, None, 12),
        verb("sing", "sing (歌う)", "SVO", Some("sang"), None, None, 13),
        verb("study", "study (勉強する)", "SVO", Some("studied"), None, None, 14),
        verb("teach", "teach (教える)", "SVO", Some("taught"), None, None, 15),
        verb("read", "read (読む)", "SVO", Some("read"), None, None, 16),
        verb("write", "write (書く)", "SVO", Some("wrote"), None, None, 17),
        verb("drink", "drink (飲む)", "SVO", Some("drank"), None, None, 18),
        verb("eat", "eat (食べる)", "SVO", Some("ate"), None, None, 19),
        verb("cook", "cook (料理する)", "SVO", None, None, None, 20),
        verb("drive", "drive (運転する)", "SVO", Some("drove"), None, None, 21),
    ]
}

/// A ready-to-use lexicon built from the seed lists.
#[must_use]
pub fn seed_lexicon() -> Lexicon {
    Lexicon::new(seed_nouns(), seed_verbs())
}
