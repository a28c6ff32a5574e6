//! Stage ladders and procedurally generated encounters.
//!
//! The main ladder runs 1-400. The tower runs 1-200 and reuses the main-ladder
//! formulas offset by 200 stages, so tower floors are always late-game fights.

mod data;
mod generation;
mod types;

pub use data::{archetype_for, band_archetypes, Archetype, EPITHETS};
pub use generation::{
    base_enemy_stats, boss_skill_for_stage, enemy_count, generate_encounter,
    generate_encounter_with_rng, generate_for, generate_tower_encounter, recommended_level,
    BOSS_SKILL_ROTATION,
};
pub use types::{BossSkill, BossTier, EncounterDefinition, EncounterEnemy, Ladder};
