//! Simulation configuration.

use crate::encounter::Ladder;
use crate::member::Rarity;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Rarity of every party member
    pub rarity: Rarity,

    /// Members per party (1-5)
    pub party_size: u32,

    /// Level the party is pre-leveled to before the climb
    pub starting_level: u32,

    /// Ladder to climb
    pub ladder: Ladder,

    /// Index to clear on the ladder
    pub target_stage: u32,

    /// Battle budget per run before timeout
    pub max_battles_per_run: u32,

    /// Rounds per battle before it counts as a loss
    pub max_rounds_per_battle: u32,

    /// Evolve members as soon as they hit their level cap
    pub auto_evolve: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            rarity: Rarity::SuperRare,
            party_size: 5,
            starting_level: 20,
            ladder: Ladder::Main,
            target_stage: 100,
            max_battles_per_run: 2_000,
            max_rounds_per_battle: 100,
            auto_evolve: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small run for checking early ladder pacing
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            target_stage: 30,
            max_battles_per_run: 300,
            ..Default::default()
        }
    }

    /// Whole main ladder with a strong party
    pub fn full_ladder() -> Self {
        Self {
            num_runs: 20,
            rarity: Rarity::Hst,
            starting_level: 60,
            target_stage: 400,
            max_battles_per_run: 10_000,
            ..Default::default()
        }
    }

    /// Whole tower with a strong party
    pub fn tower() -> Self {
        Self {
            ladder: Ladder::Tower,
            target_stage: 200,
            ..Self::full_ladder()
        }
    }

    /// Named preset selected by a CLI flag (`--quick`, `--full`, `--full-tower`).
    pub fn preset(flag: &str) -> Option<Self> {
        match flag {
            "--quick" => Some(Self::quick()),
            "--full" => Some(Self::full_ladder()),
            "--full-tower" => Some(Self::tower()),
            _ => None,
        }
    }

    /// Target clamped to the ladder and party size clamped to 1-5.
    pub fn normalized(mut self) -> Self {
        self.target_stage = self.target_stage.clamp(1, self.ladder.max_index());
        self.party_size = self.party_size.clamp(1, 5);
        self.starting_level = self.starting_level.clamp(1, self.rarity.level_cap());
        self
    }
}
