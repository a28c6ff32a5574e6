//! Damage resolution for a single attack.
//!
//! Pure functions; the battle executor owns turn order and HP bookkeeping.

use rand::Rng;

use crate::core::constants::{DAMAGE_JITTER_MAX, MIN_DAMAGE};

/// `max(1, (attack - defense) + jitter)` with jitter uniform in 0..=9.
///
/// Always at least 1 so battles cannot stall on a defense advantage.
pub fn resolve_damage(attack: u32, defense: u32, rng: &mut impl Rng) -> u32 {
    let jitter = rng.gen_range(0..=DAMAGE_JITTER_MAX);
    damage_with_jitter(attack, defense, jitter)
}

/// Deterministic core of [`resolve_damage`].
pub fn damage_with_jitter(attack: u32, defense: u32, jitter: i64) -> u32 {
    let raw = attack as i64 - defense as i64 + jitter;
    raw.clamp(MIN_DAMAGE as i64, u32::MAX as i64) as u32
}

/// HP remaining after damage (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Heals by a fraction of max HP without overhealing.
pub fn apply_heal(current_hp: u32, max_hp: u32, fraction: f64) -> u32 {
    let amount = (max_hp as f64 * fraction).floor() as u32;
    current_hp.saturating_add(amount).min(max_hp)
}
