//! Experience → level-up conversion.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use super::types::{Member, StatGains};
use super::variation::talent_growth_multiplier;
use crate::core::balance::required_experience;
use crate::core::constants::MAX_LEVEL_UPS_PER_AWARD;

/// One discrete promotion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelUpEvent {
    pub from_level: u32,
    pub to_level: u32,
    pub gains: StatGains,
}

/// Whether the promotion loop ran to completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LevelingStatus {
    Complete,
    /// The per-award ceiling was hit; remaining experience is kept unconverted.
    IterationLimit { iterations: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelingOutcome {
    pub member: Member,
    pub level_ups: Vec<LevelUpEvent>,
    pub status: LevelingStatus,
}

impl LevelingOutcome {
    pub fn levels_gained(&self) -> u32 {
        self.level_ups.len() as u32
    }

    pub fn is_partial(&self) -> bool {
        matches!(self.status, LevelingStatus::IterationLimit { .. })
    }
}

/// Stat gains for one level-up: growth scaled by talent, at least 1 per stat.
pub fn level_up_gains(rarity: Rarity, talent: u32) -> StatGains {
    let growth = rarity.growth();
    let mult = talent_growth_multiplier(talent);
    let scale = |value: u32| ((value as f64 * mult).floor() as u32).max(1);
    StatGains {
        hp: scale(growth.hp),
        attack: scale(growth.attack),
        defense: scale(growth.defense),
        speed: scale(growth.speed),
    }
}

/// Adds experience and promotes the member as many times as it affords.
pub fn apply_experience(member: Member, gained: u64) -> LevelingOutcome {
    apply_experience_bounded(member, gained, MAX_LEVEL_UPS_PER_AWARD)
}

/// Same as [`apply_experience`] with an explicit promotion ceiling.
pub fn apply_experience_bounded(
    mut member: Member,
    gained: u64,
    max_iterations: u32,
) -> LevelingOutcome {
    member.experience = member.experience.saturating_add(gained);

    let cap = member.level_cap();
    let gains = level_up_gains(member.rarity, member.variation.talent);
    let mut level_ups = Vec::new();
    let mut status = LevelingStatus::Complete;

    while member.level < cap {
        let xp_needed = required_experience(member.level);
        if member.experience < xp_needed {
            break;
        }
        if level_ups.len() as u32 >= max_iterations {
            tracing::warn!(
                member = %member.id,
                level = member.level,
                experience = member.experience,
                iterations = max_iterations,
                "level-up ceiling reached, keeping remaining experience"
            );
            status = LevelingStatus::IterationLimit {
                iterations: max_iterations,
            };
            break;
        }

        member.experience -= xp_needed;
        member.level += 1;
        member.stats.add_gains(&gains);

        level_ups.push(LevelUpEvent {
            from_level: member.level - 1,
            to_level: member.level,
            gains,
        });
    }

    if !level_ups.is_empty() {
        tracing::debug!(
            member = %member.id,
            levels = level_ups.len(),
            level = member.level,
            "member leveled up"
        );
    }

    LevelingOutcome {
        member,
        level_ups,
        status,
    }
}

/// XP still needed for the next level, or None at the level cap.
pub fn experience_to_next_level(member: &Member) -> Option<u64> {
    if member.is_at_level_cap() {
        return None;
    }
    Some(required_experience(member.level).saturating_sub(member.experience))
}
