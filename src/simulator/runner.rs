//! Main simulation runner: one party climbing one ladder per run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::battle::fight;
use super::config::SimConfig;
use super::report::SimReport;
use crate::core::balance::total_experience_for_level;
use crate::core::constants::ARCHETYPE_BAND_SIZE;
use crate::encounter::generate_for;
use crate::member::{apply_experience, can_evolve, evolve_member, Member};

/// Number of 50-stage bands tracked per run.
pub const STAGE_BANDS: usize = 8;

/// Statistics for a single simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Highest index cleared (0 = none)
    pub highest_cleared: u32,
    pub average_level: f64,
    pub total_battles: u32,
    pub total_wins: u32,
    pub total_defeats: u32,
    pub total_level_ups: u32,
    pub evolutions: u32,
    pub points_earned: u64,
    /// Awards that hit the level-up ceiling
    pub partial_awards: u32,
    pub reached_target: bool,
    pub defeats_per_band: Vec<u32>,
}

fn band_of(index: u32) -> usize {
    ((index.saturating_sub(1) / ARCHETYPE_BAND_SIZE) as usize).min(STAGE_BANDS - 1)
}

/// Acquires the party and pre-levels it through the normal leveling path.
fn build_party(config: &SimConfig, rng: &mut impl Rng) -> Vec<Member> {
    let pre_level_xp = total_experience_for_level(config.starting_level);
    (0..config.party_size)
        .map(|_| {
            let member = Member::acquire("simulator", config.rarity, rng);
            apply_experience(member, pre_level_xp).member
        })
        .collect()
}

/// Simulate one run to the target stage or until the battle budget is spent.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut party = build_party(config, rng);
    let mut stats = RunStats {
        highest_cleared: 0,
        average_level: 0.0,
        total_battles: 0,
        total_wins: 0,
        total_defeats: 0,
        total_level_ups: 0,
        evolutions: 0,
        points_earned: 0,
        partial_awards: 0,
        reached_target: false,
        defeats_per_band: vec![0; STAGE_BANDS],
    };

    let mut index = 1;
    while index <= config.target_stage && stats.total_battles < config.max_battles_per_run {
        let encounter = match generate_for(config.ladder, index) {
            Ok(encounter) => encounter,
            Err(err) => {
                tracing::warn!(%err, "stopping run");
                break;
            }
        };

        for member in &mut party {
            member.stats.restore_hp();
        }

        stats.total_battles += 1;
        let outcome = fight(&party, &encounter, config.max_rounds_per_battle, rng);
        if !outcome.won {
            stats.total_defeats += 1;
            stats.defeats_per_band[band_of(index)] += 1;
            continue;
        }

        stats.total_wins += 1;
        stats.points_earned += encounter.total_point_reward() as u64;
        let exp = encounter.total_exp_reward();

        party = party
            .into_iter()
            .map(|member| {
                let outcome = apply_experience(member, exp);
                stats.total_level_ups += outcome.levels_gained();
                if outcome.is_partial() {
                    stats.partial_awards += 1;
                }
                let mut member = outcome.member;
                if config.auto_evolve && can_evolve(&member) {
                    if let Ok(evolved) = evolve_member(member.clone()) {
                        stats.evolutions += 1;
                        member = evolved;
                    }
                }
                member
            })
            .collect();

        stats.highest_cleared = index;
        index += 1;
    }

    stats.reached_target = stats.highest_cleared >= config.target_stage;
    stats.average_level =
        party.iter().map(|m| m.level as f64).sum::<f64>() / party.len().max(1) as f64;
    stats
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let config = config.clone().normalized();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(&config, &mut rng);

        if config.verbosity >= 2 {
            tracing::info!(
                run = run_idx + 1,
                of = config.num_runs,
                cleared = run.highest_cleared,
                level = run.average_level,
                wins = run.total_wins,
                defeats = run.total_defeats,
                evolutions = run.evolutions,
                "run finished"
            );
        }

        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, &config)
}
