//! Procedural encounter generation.
//!
//! Every balance-relevant value is a pure function of the stage index. The only
//! randomness is the optional cosmetic epithet in [`generate_encounter_with_rng`].

use rand::Rng;

use super::data::{archetype_for, EPITHETS};
use super::types::{BossSkill, BossTier, EncounterDefinition, EncounterEnemy, Ladder};
use crate::combat::skills::Skill;
use crate::core::balance::{scale_stat, stage_experience_reward};
use crate::core::constants::*;
use crate::core::{EngineError, EngineResult};
use crate::member::rarity::Rarity;
use crate::member::types::Stats;

/// Boss skills cycle through this list by `stage % len`.
pub const BOSS_SKILL_ROTATION: [Skill; 3] = [Skill::Heal, Skill::Revive, Skill::AttackUp];

pub fn recommended_level(stage: u32) -> u32 {
    stage / 2 + 1
}

/// 1-2 enemies through stage 100, then one more per hundred stages, at most 5.
pub fn enemy_count(stage: u32) -> u32 {
    let count = match stage {
        0..=100 => 1 + stage.saturating_sub(1) / 50,
        101..=200 => 3,
        201..=300 => 4,
        _ => 5,
    };
    count.min(MAX_ENEMIES_PER_STAGE)
}

/// Unscaled enemy stats: the Common table evaluated at recommended level + handicap.
pub fn base_enemy_stats(stage: u32) -> Stats {
    let level = recommended_level(stage) + ENEMY_LEVEL_HANDICAP;
    let base = Rarity::Common.base_stats();
    let growth = Rarity::Common.growth();
    let steps = level - 1;
    Stats::new(
        base.max_hp + growth.hp * steps,
        base.attack + growth.attack * steps,
        base.defense + growth.defense * steps,
        base.speed + growth.speed * steps,
    )
}

fn boss_skill_power(skill: Skill) -> f64 {
    match skill {
        Skill::Heal => BOSS_HEAL_POWER,
        Skill::Revive => BOSS_REVIVE_POWER,
        _ => BOSS_ATTACK_UP_POWER,
    }
}

/// Support skill for the stage's boss slot, if it has one.
pub fn boss_skill_for_stage(stage: u32) -> Option<BossSkill> {
    if stage < BOSS_SKILL_MIN_STAGE || !BossTier::for_stage(stage).is_boss() {
        return None;
    }
    let skill = BOSS_SKILL_ROTATION[stage as usize % BOSS_SKILL_ROTATION.len()];
    Some(BossSkill {
        skill,
        power: boss_skill_power(skill),
    })
}

fn build_enemy(stage: u32, slot: usize, count: u32, base: &Stats) -> EncounterEnemy {
    let is_boss_slot = slot + 1 == count as usize;
    let boss_tier = if is_boss_slot {
        BossTier::for_stage(stage)
    } else {
        BossTier::None
    };

    let (hp_r, atk_r, def_r, spd_r) = if boss_tier.is_boss() {
        BOSS_ROLE_RATIOS
    } else {
        NORMAL_ROLE_RATIOS
    };
    let tier_mult = boss_tier.multiplier();

    let max_hp = scale_stat(base.max_hp, hp_r * tier_mult);
    let archetype = archetype_for(stage, slot);
    let name = match boss_tier.label() {
        Some(label) => format!("{} ({})", archetype.name, label),
        None => archetype.name.to_string(),
    };

    let point_share = STAGE_CLEAR_POINTS / count;
    let point_reward = if boss_tier.is_boss() {
        scale_stat(point_share, tier_mult)
    } else {
        point_share
    };

    EncounterEnemy {
        name,
        visual: archetype.visual.to_string(),
        hp: max_hp,
        max_hp,
        attack: scale_stat(base.attack, atk_r * tier_mult),
        defense: scale_stat(base.defense, def_r * tier_mult),
        speed: scale_stat(base.speed, spd_r * tier_mult),
        exp_reward: stage_experience_reward(stage),
        point_share,
        point_reward,
        boss_tier,
        boss_skill: if boss_tier.is_boss() {
            boss_skill_for_stage(stage)
        } else {
            None
        },
    }
}

fn build_encounter(ladder: Ladder, index: u32) -> EngineResult<EncounterDefinition> {
    let max = ladder.max_index();
    if index == 0 || index > max {
        return Err(EngineError::StageOutOfRange { ladder, index, max });
    }

    let stage = ladder.formula_stage(index);
    let count = enemy_count(stage);
    let base = base_enemy_stats(stage);
    let enemies: Vec<EncounterEnemy> = (0..count as usize)
        .map(|slot| build_enemy(stage, slot, count, &base))
        .collect();

    tracing::debug!(%ladder, index, stage, enemies = enemies.len(), "generated encounter");

    Ok(EncounterDefinition {
        ladder,
        index,
        stage,
        recommended_level: recommended_level(stage),
        boss_tier: BossTier::for_stage(stage),
        enemies,
    })
}

/// Encounter for a main-ladder stage (1..=400).
pub fn generate_encounter(stage: u32) -> EngineResult<EncounterDefinition> {
    build_encounter(Ladder::Main, stage)
}

/// Encounter for a tower floor (1..=200).
pub fn generate_tower_encounter(floor: u32) -> EngineResult<EncounterDefinition> {
    build_encounter(Ladder::Tower, floor)
}

pub fn generate_for(ladder: Ladder, index: u32) -> EngineResult<EncounterDefinition> {
    build_encounter(ladder, index)
}

/// Same encounter with a random cosmetic epithet on each enemy name.
/// Stats and rewards are identical to the deterministic encounter.
pub fn generate_encounter_with_rng(
    ladder: Ladder,
    index: u32,
    rng: &mut impl Rng,
) -> EngineResult<EncounterDefinition> {
    let mut encounter = build_encounter(ladder, index)?;
    for enemy in &mut encounter.enemies {
        let epithet = EPITHETS[rng.gen_range(0..EPITHETS.len())];
        enemy.name = format!("{} {}", epithet, enemy.name);
    }
    Ok(encounter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_level() {
        assert_eq!(recommended_level(1), 1);
        assert_eq!(recommended_level(2), 2);
        assert_eq!(recommended_level(99), 50);
        assert_eq!(recommended_level(400), 201);
    }

    #[test]
    fn test_enemy_count_bands() {
        assert_eq!(enemy_count(1), 1);
        assert_eq!(enemy_count(50), 1);
        assert_eq!(enemy_count(51), 2);
        assert_eq!(enemy_count(100), 2);
        assert_eq!(enemy_count(101), 3);
        assert_eq!(enemy_count(250), 4);
        assert_eq!(enemy_count(301), 5);
        assert_eq!(enemy_count(400), 5);
        assert_eq!(enemy_count(10_000), 5);
    }

    #[test]
    fn test_enemy_count_never_decreases() {
        for stage in 1..400 {
            assert!(enemy_count(stage + 1) >= enemy_count(stage));
        }
    }

    #[test]
    fn test_base_enemy_stats_stage_one() {
        // Effective level 16 on the Common table: 100 + 10*15, 20 + 2*15, 15 + 2*15, 10 + 15
        assert_eq!(base_enemy_stats(1), Stats::new(250, 50, 45, 25));
    }

    #[test]
    fn test_normal_enemy_ratios() {
        let encounter = generate_encounter(1).unwrap();
        let enemy = &encounter.enemies[0];
        assert_eq!(enemy.max_hp, 200);
        assert_eq!(enemy.hp, enemy.max_hp);
        assert_eq!(enemy.attack, 45);
        assert_eq!(enemy.defense, 40);
        assert_eq!(enemy.speed, 25);
        assert!(!enemy.is_boss());
        assert!(enemy.boss_skill.is_none());
    }

    #[test]
    fn test_boss_only_in_last_slot() {
        let encounter = generate_encounter(60).unwrap();
        assert_eq!(encounter.enemy_count(), 2);
        assert!(!encounter.enemies[0].is_boss());
        assert_eq!(encounter.enemies[1].boss_tier, BossTier::Boss);
        assert!(encounter.enemies[1].name.ends_with("(Boss)"));
        assert!(encounter.enemies[1].max_hp > encounter.enemies[0].max_hp);
        assert!(encounter.enemies[1].attack > encounter.enemies[0].attack);
    }

    #[test]
    fn test_boss_skill_rotation() {
        assert_eq!(boss_skill_for_stage(40), None); // below threshold
        assert_eq!(boss_skill_for_stage(55), None); // not a boss stage
        assert_eq!(boss_skill_for_stage(60).unwrap().skill, Skill::Heal); // 60 % 3 = 0
        assert_eq!(boss_skill_for_stage(100).unwrap().skill, Skill::Revive); // 100 % 3 = 1
        assert_eq!(boss_skill_for_stage(50).unwrap().skill, Skill::AttackUp); // 50 % 3 = 2
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            generate_encounter(0),
            Err(EngineError::StageOutOfRange {
                ladder: Ladder::Main,
                index: 0,
                max: 400
            })
        );
        assert!(generate_encounter(401).is_err());
        assert!(generate_tower_encounter(201).is_err());
        assert!(generate_tower_encounter(200).is_ok());
    }

    #[test]
    fn test_tower_uses_offset_formula() {
        let tower = generate_tower_encounter(1).unwrap();
        let main = generate_encounter(TOWER_STAGE_OFFSET + 1).unwrap();
        assert_eq!(tower.ladder, Ladder::Tower);
        assert_eq!(tower.index, 1);
        assert_eq!(tower.stage, main.stage);
        assert_eq!(tower.enemies, main.enemies);
    }

    #[test]
    fn test_rng_names_keep_stats() {
        let mut rng = rand::thread_rng();
        let plain = generate_encounter(120).unwrap();
        let decorated = generate_encounter_with_rng(Ladder::Main, 120, &mut rng).unwrap();
        for (p, d) in plain.enemies.iter().zip(&decorated.enemies) {
            assert!(d.name.ends_with(&p.name));
            assert_eq!(p.max_hp, d.max_hp);
            assert_eq!(p.attack, d.attack);
            assert_eq!(p.point_reward, d.point_reward);
        }
    }
}
