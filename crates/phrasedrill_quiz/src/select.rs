//! Level curriculum and drill selection.
//!
//! Each level drills one pattern family; the final level mixes everything.
//! Selection is deterministic: the caller supplies the shuffle seed, so the
//! same seed always yields the same session.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::drill::Drill;

/// The pattern tag drilled at a level, or `None` for the final mixed level.
#[must_use]
pub fn pattern_tag_for_level(level: u8) -> Option<&'static str> {
    match level {
        1 | 4 | 7 => Some("DO_SV"),
        2 | 5 | 8 => Some("DO_SVO"),
        3 | 6 | 9 => Some("BE_SVC"),
        _ => None,
    }
}

/// Selects the drills for a session at the given level.
///
/// Filters by the level's pattern tag (the mixed level takes everything),
/// then: levels 1–3 take the first `session_len` in `sort_order`; higher
/// levels shuffle with a ChaCha RNG seeded by `seed` before taking
/// `session_len`. Returns fewer drills if the pool is too small.
#[must_use]
pub fn select_drills(all: &[Drill], level: u8, session_len: usize, seed: u64) -> Vec<Drill> {
    let mut pool: Vec<Drill> = match pattern_tag_for_level(level) {
        Some(tag) => all.iter().filter(|d| d.pattern_tag == tag).cloned().collect(),
        None => all.to_vec(),
    };

    if level <= 3 {
        pool.sort_by_key(|d| d.sort_order);
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        pool.shuffle(&mut rng);
    }

    pool.truncate(session_len);
    pool
}
