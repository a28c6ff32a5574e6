//! Individual variation (IV) and talent rolls.
//!
//! IVs shift the starting stats, talent shifts growth per level. Both are rolled
//! once at acquisition and never change afterward.

use rand::Rng;

use super::types::{IvOffsets, Stats, Variation};
use crate::core::balance::scale_stat;
use crate::core::constants::{IV_MAX, IV_MIN, TALENT_MAX, TALENT_MULT_MAX, TALENT_MULT_MIN};

/// Rolls four IV offsets and a talent value, each uniform over its range.
pub fn generate_variation(rng: &mut impl Rng) -> Variation {
    Variation {
        iv: IvOffsets {
            hp: rng.gen_range(IV_MIN..=IV_MAX),
            attack: rng.gen_range(IV_MIN..=IV_MAX),
            defense: rng.gen_range(IV_MIN..=IV_MAX),
            speed: rng.gen_range(IV_MIN..=IV_MAX),
        },
        talent: rng.gen_range(0..=TALENT_MAX),
    }
}

fn iv_multiplier(offset: i32) -> f64 {
    1.0 + offset as f64 / 100.0
}

/// Scales each stat by `1 + offset/100`, flooring to at least 1.
///
/// The result is at full health: `hp` equals the scaled `max_hp`.
pub fn apply_variation(base: &Stats, iv: &IvOffsets) -> Stats {
    let max_hp = scale_stat(base.max_hp, iv_multiplier(iv.hp));
    Stats {
        hp: max_hp,
        max_hp,
        attack: scale_stat(base.attack, iv_multiplier(iv.attack)),
        defense: scale_stat(base.defense, iv_multiplier(iv.defense)),
        speed: scale_stat(base.speed, iv_multiplier(iv.speed)),
    }
}

/// Maps talent 0..=TALENT_MAX linearly onto 0.5..=1.5.
/// Out-of-range talent is clamped rather than rejected.
pub fn talent_growth_multiplier(talent: u32) -> f64 {
    let t = talent.min(TALENT_MAX) as f64 / TALENT_MAX as f64;
    let multiplier = TALENT_MULT_MIN + t * (TALENT_MULT_MAX - TALENT_MULT_MIN);
    multiplier.clamp(TALENT_MULT_MIN, TALENT_MULT_MAX)
}
