//! Deterministic pseudo-random rolls.
//!
//! Every "random" outcome in the labyrinth (traps, post-move events) is derived from
//! the player's step counter through [`pseudo_random`], so a replayed command sequence
//! always produces the same game.

/// Map `seed` to a value in `[0, modulo)` using the classic `fract(sin(x) * k)` hash.
///
/// Returns 0 when `modulo <= 0`.
///
/// ```
/// use labyrinth_engine::rng::pseudo_random;
///
/// assert_eq!(pseudo_random(42, 10), pseudo_random(42, 10));
/// assert_eq!(pseudo_random(42, 0), 0);
/// assert_eq!(pseudo_random(42, -1), 0);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn pseudo_random(seed: i64, modulo: i64) -> i64 {
    if modulo <= 0 {
        return 0;
    }
    let x = (seed as f64 * 12.9898).sin() * 43758.5453;
    let frac = x - x.floor();
    let roll = (frac * modulo as f64).floor() as i64;
    roll.clamp(0, modulo - 1)
}

/// Pick an index into a collection of `len` elements, seeded by a step count.
///
/// Returns `None` for an empty collection.
pub fn pseudo_index(seed: u32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let modulo = i64::try_from(len).unwrap_or(i64::MAX);
    usize::try_from(pseudo_random(i64::from(seed), modulo)).ok()
}
