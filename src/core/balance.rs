//! Shared balance formulas used by member progression and encounter generation.
//!
//! Curves live here so leveling and encounter rewards follow the same
//! banded accumulation pattern.

use super::constants::*;

/// XP needed to promote out of `level` (pre-promotion level).
///
/// Linear in level with the per-level coefficient stepping up at 10, 30, 50 and 100.
/// Level 0 is treated as level 1.
pub fn required_experience(level: u32) -> u64 {
    let level = level.max(1);
    let coefficient = XP_CURVE_BANDS
        .iter()
        .find(|(upper, _)| level < *upper)
        .map(|(_, coefficient)| *coefficient)
        .unwrap_or(XP_CURVE_FINAL_COEFFICIENT);
    coefficient * level as u64
}

/// Cumulative XP to climb from level 1 to `target_level`.
pub fn total_experience_for_level(target_level: u32) -> u64 {
    (1..target_level).map(required_experience).sum()
}

/// EXP granted per enemy on a main-ladder stage.
///
/// Accumulates per-stage increments over the 100/200/300 bands.
pub fn stage_experience_reward(stage: u32) -> u64 {
    let stage = stage as u64;
    let mut reward = STAGE_EXP_BASE;
    for (band, per_stage) in STAGE_EXP_PER_STAGE.iter().enumerate() {
        let band_start = band as u64 * 100;
        let in_band = if band + 1 == STAGE_EXP_PER_STAGE.len() {
            stage.saturating_sub(band_start)
        } else {
            stage.saturating_sub(band_start).min(100)
        };
        reward += in_band * per_stage;
    }
    reward
}

/// Scales a stat and floors it, never returning less than 1.
pub fn scale_stat(value: u32, multiplier: f64) -> u32 {
    ((value as f64 * multiplier).floor() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_experience_first_level() {
        assert_eq!(required_experience(1), 100);
        assert_eq!(required_experience(9), 900);
    }

    #[test]
    fn test_required_experience_breakpoints() {
        assert_eq!(required_experience(10), 1_500);
        assert_eq!(required_experience(29), 4_350);
        assert_eq!(required_experience(30), 6_000);
        assert_eq!(required_experience(50), 15_000);
        assert_eq!(required_experience(99), 29_700);
        assert_eq!(required_experience(100), 50_000);
    }

    #[test]
    fn test_required_experience_strictly_increasing() {
        for level in 1..1_000 {
            assert!(
                required_experience(level + 1) > required_experience(level),
                "curve flattened at level {}",
                level
            );
        }
    }

    #[test]
    fn test_required_experience_level_zero_clamped() {
        assert_eq!(required_experience(0), required_experience(1));
    }

    #[test]
    fn test_total_experience_for_level() {
        assert_eq!(total_experience_for_level(1), 0);
        assert_eq!(total_experience_for_level(2), 100);
        assert_eq!(total_experience_for_level(4), 100 + 200 + 300);
    }

    #[test]
    fn test_stage_experience_reward_bands() {
        assert_eq!(stage_experience_reward(1), 25);
        assert_eq!(stage_experience_reward(100), 520);
        assert_eq!(stage_experience_reward(200), 1_320);
        assert_eq!(stage_experience_reward(300), 2_520);
        assert_eq!(stage_experience_reward(400), 4_520);
    }

    #[test]
    fn test_stage_experience_reward_monotonic() {
        for stage in 1..600 {
            assert!(stage_experience_reward(stage + 1) > stage_experience_reward(stage));
        }
    }

    #[test]
    fn test_scale_stat_floors_at_one() {
        assert_eq!(scale_stat(10, 1.3), 13);
        assert_eq!(scale_stat(1, 0.5), 1);
        assert_eq!(scale_stat(0, 2.0), 1);
        assert_eq!(scale_stat(99, 0.9), 89);
    }
}
