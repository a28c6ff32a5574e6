//! Skill targeting taxonomy.
//!
//! Classification only: which shape of target a skill needs. Effects are applied
//! by the battle executor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Skill {
    PowerStrike,
    Pierce,
    Drain,
    Stun,
    Heal,
    Revive,
    Cleanse,
    GroupHeal,
    WarCry,
    Meteor,
    Blizzard,
    SelfHeal,
    AttackUp,
    Guard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetShape {
    /// Self or no target.
    None,
    SingleAlly,
    AllAllies,
    SingleEnemy,
    AllEnemies,
}

/// What a caller must supply before the skill can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRequirement {
    None,
    SingleAlly,
    SingleEnemy,
}

/// A target picked by a player or AI, as slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelection {
    None,
    Ally(usize),
    Enemy(usize),
}

/// Skills that need one enemy picked.
pub const SINGLE_ENEMY_SKILLS: [&str; 4] = ["power_strike", "pierce", "drain", "stun"];

/// Skills that need one ally picked.
pub const SINGLE_ALLY_SKILLS: [&str; 3] = ["heal", "revive", "cleanse"];

impl Skill {
    pub fn all() -> [Skill; 14] {
        [
            Skill::PowerStrike,
            Skill::Pierce,
            Skill::Drain,
            Skill::Stun,
            Skill::Heal,
            Skill::Revive,
            Skill::Cleanse,
            Skill::GroupHeal,
            Skill::WarCry,
            Skill::Meteor,
            Skill::Blizzard,
            Skill::SelfHeal,
            Skill::AttackUp,
            Skill::Guard,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Skill::PowerStrike => "power_strike",
            Skill::Pierce => "pierce",
            Skill::Drain => "drain",
            Skill::Stun => "stun",
            Skill::Heal => "heal",
            Skill::Revive => "revive",
            Skill::Cleanse => "cleanse",
            Skill::GroupHeal => "group_heal",
            Skill::WarCry => "war_cry",
            Skill::Meteor => "meteor",
            Skill::Blizzard => "blizzard",
            Skill::SelfHeal => "self_heal",
            Skill::AttackUp => "attack_up",
            Skill::Guard => "guard",
        }
    }

    pub fn from_id(id: &str) -> Option<Skill> {
        Skill::all().into_iter().find(|skill| skill.id() == id)
    }

    pub fn target_shape(&self) -> TargetShape {
        match self {
            Skill::PowerStrike | Skill::Pierce | Skill::Drain | Skill::Stun => {
                TargetShape::SingleEnemy
            }
            Skill::Heal | Skill::Revive | Skill::Cleanse => TargetShape::SingleAlly,
            Skill::GroupHeal | Skill::WarCry => TargetShape::AllAllies,
            Skill::Meteor | Skill::Blizzard => TargetShape::AllEnemies,
            Skill::SelfHeal | Skill::AttackUp | Skill::Guard => TargetShape::None,
        }
    }

    pub fn target_requirement(&self) -> TargetRequirement {
        target_requirement(self.id())
    }
}

/// Looks a skill id up in the two single-target sets; anything else, unknown
/// ids included, needs no explicit target.
pub fn target_requirement(id: &str) -> TargetRequirement {
    if SINGLE_ENEMY_SKILLS.contains(&id) {
        TargetRequirement::SingleEnemy
    } else if SINGLE_ALLY_SKILLS.contains(&id) {
        TargetRequirement::SingleAlly
    } else {
        TargetRequirement::None
    }
}

/// Checks a player/AI target choice against the skill's requirement.
pub fn validate_target(id: &str, selection: TargetSelection) -> EngineResult<()> {
    let requirement = target_requirement(id);
    let ok = matches!(
        (requirement, selection),
        (TargetRequirement::None, TargetSelection::None)
            | (TargetRequirement::SingleAlly, TargetSelection::Ally(_))
            | (TargetRequirement::SingleEnemy, TargetSelection::Enemy(_))
    );
    if ok {
        Ok(())
    } else {
        Err(EngineError::InvalidTarget {
            skill: id.to_string(),
            expected: requirement.to_string(),
            selection: selection.to_string(),
        })
    }
}

impl FromStr for Skill {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::from_id(s).ok_or_else(|| EngineError::UnknownSkill(s.to_string()))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for TargetRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetRequirement::None => "no",
            TargetRequirement::SingleAlly => "a single ally",
            TargetRequirement::SingleEnemy => "a single enemy",
        })
    }
}

impl fmt::Display for TargetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSelection::None => f.write_str("no target"),
            TargetSelection::Ally(slot) => write!(f, "ally slot {}", slot),
            TargetSelection::Enemy(slot) => write!(f, "enemy slot {}", slot),
        }
    }
}
