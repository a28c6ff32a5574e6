//! Collectible members: rarity tiers, individual variation, leveling and evolution.
//!
//! A member is created once with rolled IVs and talent, then only changes through
//! [`apply_experience`] and [`evolve_member`].

pub mod evolution;
pub mod leveling;
pub mod rarity;
pub mod types;
pub mod variation;

pub use evolution::{can_evolve, evolve, evolve_member};
pub use leveling::{
    apply_experience, apply_experience_bounded, experience_to_next_level, level_up_gains,
    LevelUpEvent, LevelingOutcome, LevelingStatus,
};
pub use rarity::{Rarity, RarityProfile};
pub use types::{IvOffsets, Member, SkillLoadout, StatGains, Stats, Variation};
pub use variation::{apply_variation, generate_variation, talent_growth_multiplier};
