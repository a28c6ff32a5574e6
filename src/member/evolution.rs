//! One-way evolution for members that have reached their level cap.

use super::types::{Member, Stats};
use crate::core::balance::scale_stat;
use crate::core::constants::EVOLUTION_MULTIPLIER;
use crate::core::{EngineError, EngineResult};

/// True only at the level cap and before any evolution.
pub fn can_evolve(member: &Member) -> bool {
    member.level == member.level_cap() && member.evolution_stage == 0
}

/// Evolved stat block for an eligible member.
///
/// Every stat, current HP included, is multiplied and floored. Only current HP
/// may end at 0.
pub fn evolve(member: &Member) -> EngineResult<Stats> {
    if !can_evolve(member) {
        return Err(EngineError::NotEligibleForEvolution {
            level: member.level,
            level_cap: member.level_cap(),
            evolution_stage: member.evolution_stage,
        });
    }

    let stats = &member.stats;
    let max_hp = scale_stat(stats.max_hp, EVOLUTION_MULTIPLIER);
    // Current HP has no minimum: a defeated member stays defeated
    let hp = ((stats.hp as f64 * EVOLUTION_MULTIPLIER).floor() as u32).min(max_hp);
    Ok(Stats {
        hp,
        max_hp,
        attack: scale_stat(stats.attack, EVOLUTION_MULTIPLIER),
        defense: scale_stat(stats.defense, EVOLUTION_MULTIPLIER),
        speed: scale_stat(stats.speed, EVOLUTION_MULTIPLIER),
    })
}

/// Applies [`evolve`] and marks the member as evolved.
pub fn evolve_member(mut member: Member) -> EngineResult<Member> {
    member.stats = evolve(&member)?;
    member.evolution_stage = 1;
    tracing::debug!(member = %member.id, rarity = %member.rarity, "member evolved");
    Ok(member)
}
