//! Pure text helpers shared by the generator and the quiz session.
//!
//! All functions here are total: they never fail and never allocate beyond
//! the returned string.

/// Uppercases the first character of a string, leaving the rest untouched.
///
/// Used once per generated sentence, at finalization.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if the first character (lowercased) is one of `a e i o u`.
///
/// This is the simplified phonetic test used for `a`/`an` article selection.
/// It is orthographic, not phonetic: `hour` gets `a`, `university` gets `an`.
/// That matches the source behavior and is not corrected here.
#[must_use]
pub fn starts_with_vowel(s: &str) -> bool {
    s.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false)
}

/// Normalizes a sentence for answer comparison.
///
/// Lowercases, strips `.` `,` `?` `!`, collapses whitespace runs to a single
/// space, and trims. This is the sole normalization applied on both sides of
/// an answer check.
#[must_use]
pub fn normalize_answer(s: &str) -> String {
    let stripped: String = s
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '?' | '!'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
