use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use super::variation::{apply_variation, generate_variation};
use crate::combat::skills::Skill;

/// Core combat stats of a member or enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Full-health stat block.
    pub fn new(max_hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            attack,
            defense,
            speed,
        }
    }

    pub fn add_gains(&mut self, gains: &StatGains) {
        self.hp = self.hp.saturating_add(gains.hp);
        self.max_hp = self.max_hp.saturating_add(gains.hp);
        self.attack = self.attack.saturating_add(gains.attack);
        self.defense = self.defense.saturating_add(gains.defense);
        self.speed = self.speed.saturating_add(gains.speed);
    }

    pub fn restore_hp(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Per-level growth vector, also used for the stat gains of a single level-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatGains {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

/// Percentage offsets rolled once per member, one per stat family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IvOffsets {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

/// Everything rolled at acquisition that makes two same-rarity members differ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Variation {
    pub iv: IvOffsets,
    pub talent: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SkillLoadout {
    pub skill: Skill,
    pub power: f64,
}

/// A player-owned collectible unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: String,
    pub owner_id: String,
    pub rarity: Rarity,
    pub level: u32,
    pub experience: u64,
    pub stats: Stats,
    pub variation: Variation,
    #[serde(default)]
    pub evolution_stage: u32,
    #[serde(default)]
    pub skill: Option<SkillLoadout>,
}

impl Member {
    /// Builds a level 1 member from an already rolled variation.
    pub fn new(id: String, owner_id: String, rarity: Rarity, variation: Variation) -> Self {
        let stats = apply_variation(&rarity.base_stats(), &variation.iv);
        Self {
            id,
            owner_id,
            rarity,
            level: 1,
            experience: 0,
            stats,
            variation,
            evolution_stage: 0,
            skill: None,
        }
    }

    /// Acquisition: fresh id, freshly rolled IVs and talent.
    pub fn acquire(owner_id: &str, rarity: Rarity, rng: &mut impl Rng) -> Self {
        let variation = generate_variation(rng);
        Self::new(
            uuid::Uuid::new_v4().to_string(),
            owner_id.to_string(),
            rarity,
            variation,
        )
    }

    pub fn with_skill(mut self, skill: Skill, power: f64) -> Self {
        self.skill = Some(SkillLoadout { skill, power });
        self
    }

    pub fn level_cap(&self) -> u32 {
        self.rarity.level_cap()
    }

    pub fn is_at_level_cap(&self) -> bool {
        self.level >= self.level_cap()
    }

    pub fn is_evolved(&self) -> bool {
        self.evolution_stage > 0
    }
}
