//! Ladder balance simulator for Monte Carlo analysis.
//!
//! Run many simulated climbs to analyze:
//! - How far a party of a given rarity gets on the main ladder or tower
//! - Where defeats cluster along the stage bands
//! - Leveling and evolution pacing against encounter rewards
//!
//! The simulator goes through the same leveling, evolution, encounter and damage
//! functions callers use, so results match the engine's numbers.

mod battle;
mod config;
mod report;
mod runner;

pub use battle::{fight, BattleOutcome};
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
