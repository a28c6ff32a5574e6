//! Minimal turn-based battle used by the simulator.
//!
//! Every round each living combatant acts once in descending speed order; the
//! party wins speed ties. Attacks always hit the first living opponent.

use rand::Rng;

use crate::combat::damage::{apply_damage, apply_heal, resolve_damage};
use crate::combat::skills::Skill;
use crate::core::balance::scale_stat;
use crate::encounter::{BossSkill, EncounterDefinition};
use crate::member::{Member, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Party,
    Enemy,
}

#[derive(Debug, Clone)]
struct Combatant {
    side: Side,
    stats: Stats,
    boss_skill: Option<BossSkill>,
    skill_used: bool,
}

/// Result of one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub won: bool,
    pub rounds: u32,
    pub party_hp_left: u32,
}

fn first_living(combatants: &[Combatant], side: Side) -> Option<usize> {
    combatants
        .iter()
        .position(|c| c.side == side && c.stats.is_alive())
}

fn side_alive(combatants: &[Combatant], side: Side) -> bool {
    first_living(combatants, side).is_some()
}

/// Uses the boss skill if its trigger is met. Returns true when the turn was spent.
fn try_boss_skill(combatants: &mut [Combatant], actor: usize) -> bool {
    let Some(boss_skill) = combatants[actor].boss_skill else {
        return false;
    };
    if combatants[actor].skill_used {
        return false;
    }

    match boss_skill.skill {
        Skill::Heal => {
            let stats = &mut combatants[actor].stats;
            if stats.hp * 2 >= stats.max_hp {
                return false;
            }
            stats.hp = apply_heal(stats.hp, stats.max_hp, boss_skill.power);
        }
        Skill::Revive => {
            let fallen = combatants
                .iter()
                .position(|c| c.side == Side::Enemy && !c.stats.is_alive());
            let Some(target) = fallen else {
                return false;
            };
            let stats = &mut combatants[target].stats;
            stats.hp = apply_heal(0, stats.max_hp, boss_skill.power).max(1);
        }
        _ => {
            let stats = &mut combatants[actor].stats;
            stats.attack = scale_stat(stats.attack, 1.0 + boss_skill.power);
        }
    }

    combatants[actor].skill_used = true;
    true
}

/// Fights `encounter` with the party at its current HP. Members are not modified.
pub fn fight(
    party: &[Member],
    encounter: &EncounterDefinition,
    max_rounds: u32,
    rng: &mut impl Rng,
) -> BattleOutcome {
    let mut combatants: Vec<Combatant> = party
        .iter()
        .map(|m| Combatant {
            side: Side::Party,
            stats: m.stats,
            boss_skill: None,
            skill_used: false,
        })
        .chain(encounter.enemies.iter().map(|e| Combatant {
            side: Side::Enemy,
            stats: Stats {
                hp: e.hp,
                max_hp: e.max_hp,
                attack: e.attack,
                defense: e.defense,
                speed: e.speed,
            },
            boss_skill: e.boss_skill,
            skill_used: false,
        }))
        .collect();

    // Stable sort keeps the party ahead of enemies on equal speed
    let mut order: Vec<usize> = (0..combatants.len()).collect();
    order.sort_by(|&a, &b| combatants[b].stats.speed.cmp(&combatants[a].stats.speed));

    let mut rounds = 0;
    while rounds < max_rounds
        && side_alive(&combatants, Side::Party)
        && side_alive(&combatants, Side::Enemy)
    {
        rounds += 1;
        for &actor in &order {
            if !combatants[actor].stats.is_alive() {
                continue;
            }
            let side = combatants[actor].side;
            if side == Side::Enemy && try_boss_skill(&mut combatants, actor) {
                continue;
            }

            let opponent = match side {
                Side::Party => Side::Enemy,
                Side::Enemy => Side::Party,
            };
            let Some(target) = first_living(&combatants, opponent) else {
                break;
            };
            let damage = resolve_damage(
                combatants[actor].stats.attack,
                combatants[target].stats.defense,
                rng,
            );
            let target_stats = &mut combatants[target].stats;
            target_stats.hp = apply_damage(target_stats.hp, damage);
        }
    }

    let party_hp_left = combatants
        .iter()
        .filter(|c| c.side == Side::Party)
        .map(|c| c.stats.hp)
        .sum();

    BattleOutcome {
        won: !side_alive(&combatants, Side::Enemy) && side_alive(&combatants, Side::Party),
        rounds,
        party_hp_left,
    }
}
