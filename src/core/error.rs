//! Error taxonomy for engine operations.
//!
//! Only invalid input is an error. Ordinary game states (level cap reached,
//! zero experience) and the leveling iteration ceiling are reported through
//! normal return values instead.

use crate::encounter::Ladder;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("{ladder} index {index} is out of range (1..={max})")]
    StageOutOfRange { ladder: Ladder, index: u32, max: u32 },

    #[error(
        "member cannot evolve: level {level}/{level_cap}, evolution stage {evolution_stage}"
    )]
    NotEligibleForEvolution {
        level: u32,
        level_cap: u32,
        evolution_stage: u32,
    },

    #[error("unknown rarity: {0}")]
    UnknownRarity(String),

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("skill {skill} expects {expected} target, got {selection}")]
    InvalidTarget {
        skill: String,
        expected: String,
        selection: String,
    },
}
