//! Rankup - Member Progression & Procedural Encounter Engine
//!
//! Pure, synchronous rules for a collectible-character RPG: rarity tiers,
//! individual variation and talent, leveling, evolution, damage, skill
//! targeting and a deterministic encounter ladder. Nothing here persists
//! state or performs I/O; callers own storage and battle orchestration.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod encounter;
pub mod member;
pub mod simulator;

pub use crate::core::{EngineError, EngineResult};
