//! Built-in demo drill content.
//!
//! Ten drills per pattern family, matching what the generator produces from
//! the seed lexicon so a full quiz run can be driven offline.

use crate::drill::Drill;

fn drill(id: &str, tag: &str, english: &str, prompt: &str, sort_order: u32) -> Drill {
    Drill {
        id: id.to_string(),
        pattern_tag: tag.to_string(),
        english: english.to_string(),
        prompt: prompt.to_string(),
        sort_order,
    }
}

/// The built-in drill list.
#[must_use]
pub fn seed_drills() -> Vec<Drill> {
    vec![
        // Intransitive drills
        drill("do_sv_01", "DO_SV", "I run quickly.", "私は速く走ります。", 1),
        drill("do_sv_02", "DO_SV", "He runs quickly.", "彼は速く走ります。", 2),
        drill("do_sv_03", "DO_SV", "They didn't walk slowly.", "彼らはゆっくり歩きませんでした。", 3),
        drill("do_sv_04", "DO_SV", "Did you arrive?", "あなたは着きましたか。", 4),
        drill("do_sv_05", "DO_SV", "We won't laugh.", "私たちは笑いません。", 5),
        drill("do_sv_06", "DO_SV", "I lived.", "私は住んでいました。", 6),
        drill("do_sv_07", "DO_SV", "Do they smile?", "彼らは笑いますか。", 7),
        drill("do_sv_08", "DO_SV", "He doesn't talk loudly.", "彼は大声で話しません。", 8),
        drill("do_sv_09", "DO_SV", "You walked slowly.", "あなたはゆっくり歩きました。", 9),
        drill("do_sv_10", "DO_SV", "Will he go?", "彼は行きますか。", 10),
        // Transitive drills
        drill("do_svo_01", "DO_SVO", "We didn't eat an apple.", "私たちはリンゴを食べませんでした。", 1),
        drill("do_svo_02", "DO_SVO", "He has a dog.", "彼は犬を飼っています。", 2),
        drill("do_svo_03", "DO_SVO", "They read the newspaper.", "彼らは新聞を読みます。", 3),
        drill("do_svo_04", "DO_SVO", "Did you drink water?", "あなたは水を飲みましたか。", 4),
        drill("do_svo_05", "DO_SVO", "He doesn't play soccer.", "彼はサッカーをしません。", 5),
        drill("do_svo_06", "DO_SVO", "I wrote a letter.", "私は手紙を書きました。", 6),
        drill("do_svo_07", "DO_SVO", "We will sing songs.", "私たちは歌を歌います。", 7),
        drill("do_svo_08", "DO_SVO", "He teaches English.", "彼は英語を教えます。", 8),
        drill("do_svo_09", "DO_SVO", "They caught a butterfly.", "彼らは蝶を捕まえました。", 9),
        drill("do_svo_10", "DO_SVO", "Do you like music?", "あなたは音楽が好きですか。", 10),
        // Copula drills
        drill("be_svc_01", "BE_SVC", "I am happy.", "私は幸せです。", 1),
        drill("be_svc_02", "BE_SVC", "He isn't sleepy.", "彼は眠くありません。", 2),
        drill("be_svc_03", "BE_SVC", "They are soccer players.", "彼らはサッカー選手です。", 3),
        drill("be_svc_04", "BE_SVC", "He is a soccer player.", "彼はサッカー選手です。", 4),
        drill("be_svc_05", "BE_SVC", "Was he angry?", "彼は怒っていましたか。", 5),
        drill("be_svc_06", "BE_SVC", "We were tired.", "私たちは疲れていました。", 6),
        drill("be_svc_07", "BE_SVC", "I'm not angry.", "私は怒っていません。", 7),
        drill("be_svc_08", "BE_SVC", "You will be fine.", "あなたは大丈夫です。", 8),
        drill("be_svc_09", "BE_SVC", "They are butterflies.", "彼らは蝶です。", 9),
        drill("be_svc_10", "BE_SVC", "I am fine.", "私は元気です。", 10),
    ]
}
