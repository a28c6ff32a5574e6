// =============================================================================
// Individual variation & talent
// =============================================================================

/// IV offsets are whole percentages, symmetric around zero.
pub const IV_MIN: i32 = -10;
pub const IV_MAX: i32 = 10;

/// Talent is rolled in 0..=TALENT_MAX.
pub const TALENT_MAX: u32 = 100;

/// Growth multiplier at talent 0 and at TALENT_MAX.
pub const TALENT_MULT_MIN: f64 = 0.5;
pub const TALENT_MULT_MAX: f64 = 1.5;

// =============================================================================
// Leveling
// =============================================================================

// Required XP = coefficient * level, coefficient stepping up at each breakpoint.
// (upper bound exclusive, coefficient)
pub const XP_CURVE_BANDS: [(u32, u64); 4] = [(10, 100), (30, 150), (50, 200), (100, 300)];
pub const XP_CURVE_FINAL_COEFFICIENT: u64 = 500;

/// Hard ceiling on promotions from a single award.
pub const MAX_LEVEL_UPS_PER_AWARD: u32 = 10_000;

// =============================================================================
// Evolution
// =============================================================================

pub const EVOLUTION_MULTIPLIER: f64 = 1.3;

// =============================================================================
// Damage
// =============================================================================

/// Inclusive upper bound of the flat damage jitter.
pub const DAMAGE_JITTER_MAX: i64 = 9;
pub const MIN_DAMAGE: u32 = 1;

// =============================================================================
// Ladders
// =============================================================================

pub const MAIN_LADDER_STAGES: u32 = 400;
pub const TOWER_FLOORS: u32 = 200;
/// Tower floor N uses the main-ladder formula at stage N + offset.
pub const TOWER_STAGE_OFFSET: u32 = 200;

pub const MAX_ENEMIES_PER_STAGE: u32 = 5;

/// Encounters are tuned this many levels above the recommended level.
pub const ENEMY_LEVEL_HANDICAP: u32 = 15;

/// Stages per archetype band.
pub const ARCHETYPE_BAND_SIZE: u32 = 50;

// Boss tier stat multipliers, applied to the last slot only
pub const BOSS_MULTIPLIER: f64 = 1.15;
pub const MEGA_BOSS_MULTIPLIER: f64 = 1.3;
pub const ULTIMATE_BOSS_MULTIPLIER: f64 = 1.6;

// Role ratios: (hp, attack, defense, speed)
pub const NORMAL_ROLE_RATIOS: (f64, f64, f64, f64) = (0.8, 0.9, 0.9, 1.0);
pub const BOSS_ROLE_RATIOS: (f64, f64, f64, f64) = (2.0, 1.25, 1.2, 1.1);

// =============================================================================
// Rewards
// =============================================================================

/// Points for clearing every enemy in a stage, split evenly per enemy.
pub const STAGE_CLEAR_POINTS: u32 = 100;

pub const STAGE_EXP_BASE: u64 = 20;
// Per-stage EXP increments for stages 1-100, 101-200, 201-300, 301+
pub const STAGE_EXP_PER_STAGE: [u64; 4] = [5, 8, 12, 20];

// =============================================================================
// Boss skills
// =============================================================================

pub const BOSS_SKILL_MIN_STAGE: u32 = 50;

/// Heal restores this fraction of max HP.
pub const BOSS_HEAL_POWER: f64 = 0.3;
/// Revive brings an ally back at this fraction of max HP.
pub const BOSS_REVIVE_POWER: f64 = 0.5;
/// Attack buff raises attack by this fraction.
pub const BOSS_ATTACK_UP_POWER: f64 = 0.2;
