//! Combat rules consumed by the battle executor: damage and skill targeting.

pub mod damage;
pub mod skills;

pub use damage::{apply_damage, apply_heal, damage_with_jitter, resolve_damage};
pub use skills::{
    target_requirement, validate_target, Skill, TargetRequirement, TargetSelection, TargetShape,
};
