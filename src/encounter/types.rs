use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::skills::Skill;
use crate::core::constants::*;

/// Which stage ladder an index belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Ladder {
    Main,
    Tower,
}

impl Ladder {
    /// Highest valid index on this ladder (lowest is 1).
    pub fn max_index(&self) -> u32 {
        match self {
            Ladder::Main => MAIN_LADDER_STAGES,
            Ladder::Tower => TOWER_FLOORS,
        }
    }

    /// Main-ladder stage whose formula this index uses.
    pub fn formula_stage(&self, index: u32) -> u32 {
        match self {
            Ladder::Main => index,
            Ladder::Tower => index + TOWER_STAGE_OFFSET,
        }
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ladder::Main => "main ladder",
            Ladder::Tower => "tower",
        })
    }
}

/// Escalating boss classes for the last enemy slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum BossTier {
    None,
    Boss,
    MegaBoss,
    UltimateBoss,
}

impl BossTier {
    /// Every 10th stage is a boss, every 100th a mega boss, every 200th an ultimate boss.
    pub fn for_stage(stage: u32) -> BossTier {
        if stage % 200 == 0 {
            BossTier::UltimateBoss
        } else if stage % 100 == 0 {
            BossTier::MegaBoss
        } else if stage % 10 == 0 {
            BossTier::Boss
        } else {
            BossTier::None
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            BossTier::None => 1.0,
            BossTier::Boss => BOSS_MULTIPLIER,
            BossTier::MegaBoss => MEGA_BOSS_MULTIPLIER,
            BossTier::UltimateBoss => ULTIMATE_BOSS_MULTIPLIER,
        }
    }

    pub fn is_boss(&self) -> bool {
        !matches!(self, BossTier::None)
    }

    /// Suffix appended to the boss slot's name.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            BossTier::None => None,
            BossTier::Boss => Some("Boss"),
            BossTier::MegaBoss => Some("Mega Boss"),
            BossTier::UltimateBoss => Some("Ultimate Boss"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BossSkill {
    pub skill: Skill,
    pub power: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncounterEnemy {
    pub name: String,
    /// Sprite/visual tag for the renderer.
    pub visual: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub exp_reward: u64,
    /// Even split of the stage-clear points.
    pub point_share: u32,
    /// `point_share` scaled by the boss multiplier on the boss slot.
    pub point_reward: u32,
    pub boss_tier: BossTier,
    pub boss_skill: Option<BossSkill>,
}

impl EncounterEnemy {
    pub fn is_boss(&self) -> bool {
        self.boss_tier.is_boss()
    }
}

/// Derived, never persisted description of one stage's opposition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncounterDefinition {
    pub ladder: Ladder,
    /// Index as requested on `ladder`.
    pub index: u32,
    /// Main-ladder stage the formulas were evaluated at.
    pub stage: u32,
    pub recommended_level: u32,
    pub boss_tier: BossTier,
    pub enemies: Vec<EncounterEnemy>,
}

impl EncounterDefinition {
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn boss(&self) -> Option<&EncounterEnemy> {
        self.enemies.last().filter(|enemy| enemy.is_boss())
    }

    pub fn total_exp_reward(&self) -> u64 {
        self.enemies.iter().map(|e| e.exp_reward).sum()
    }

    /// Sum of unscaled shares; at most STAGE_CLEAR_POINTS, short by flooring only.
    pub fn point_share_total(&self) -> u32 {
        self.enemies.iter().map(|e| e.point_share).sum()
    }

    pub fn total_point_reward(&self) -> u32 {
        self.enemies.iter().map(|e| e.point_reward).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_tier_for_stage() {
        assert_eq!(BossTier::for_stage(1), BossTier::None);
        assert_eq!(BossTier::for_stage(10), BossTier::Boss);
        assert_eq!(BossTier::for_stage(90), BossTier::Boss);
        assert_eq!(BossTier::for_stage(100), BossTier::MegaBoss);
        assert_eq!(BossTier::for_stage(200), BossTier::UltimateBoss);
        assert_eq!(BossTier::for_stage(300), BossTier::MegaBoss);
        assert_eq!(BossTier::for_stage(400), BossTier::UltimateBoss);
    }

    #[test]
    fn test_boss_multipliers_strictly_increase() {
        let tiers = [
            BossTier::None,
            BossTier::Boss,
            BossTier::MegaBoss,
            BossTier::UltimateBoss,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
        assert!((BossTier::MegaBoss.multiplier() - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_tower_maps_onto_main_formula() {
        assert_eq!(Ladder::Main.formula_stage(37), 37);
        assert_eq!(Ladder::Tower.formula_stage(1), TOWER_STAGE_OFFSET + 1);
        assert_eq!(
            Ladder::Tower.formula_stage(Ladder::Tower.max_index()),
            MAIN_LADDER_STAGES
        );
    }
}
