//! Rarity tiers: level caps, per-level growth and level 1 base stats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::{StatGains, Stats};
use crate::core::EngineError;

/// Ordered from lowest to highest. `Awakened` exists for display ranking and
/// progresses on the Hst table.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    SuperRare,
    UltraRare,
    Legendary,
    Stary,
    Hst,
    Awakened,
}

/// Static progression data for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityProfile {
    pub level_cap: u32,
    pub growth: StatGains,
    /// (max_hp, attack, defense, speed) at level 1 before IVs.
    pub base: (u32, u32, u32, u32),
}

const fn profile(
    level_cap: u32,
    growth: (u32, u32, u32, u32),
    base: (u32, u32, u32, u32),
) -> RarityProfile {
    RarityProfile {
        level_cap,
        growth: StatGains {
            hp: growth.0,
            attack: growth.1,
            defense: growth.2,
            speed: growth.3,
        },
        base,
    }
}

const COMMON: RarityProfile = profile(40, (10, 2, 2, 1), (100, 20, 15, 10));
const RARE: RarityProfile = profile(50, (12, 3, 2, 1), (120, 24, 18, 12));
const SUPER_RARE: RarityProfile = profile(60, (15, 3, 3, 2), (140, 28, 21, 14));
const ULTRA_RARE: RarityProfile = profile(70, (18, 4, 3, 2), (170, 33, 25, 16));
const LEGENDARY: RarityProfile = profile(80, (22, 5, 4, 2), (200, 40, 30, 18));
const STARY: RarityProfile = profile(100, (26, 6, 5, 3), (240, 48, 36, 20));
const HST: RarityProfile = profile(999, (30, 7, 6, 3), (300, 60, 45, 24));

impl Rarity {
    pub fn all() -> [Rarity; 8] {
        [
            Rarity::Common,
            Rarity::Rare,
            Rarity::SuperRare,
            Rarity::UltraRare,
            Rarity::Legendary,
            Rarity::Stary,
            Rarity::Hst,
            Rarity::Awakened,
        ]
    }

    pub fn profile(&self) -> &'static RarityProfile {
        match self {
            Rarity::Common => &COMMON,
            Rarity::Rare => &RARE,
            Rarity::SuperRare => &SUPER_RARE,
            Rarity::UltraRare => &ULTRA_RARE,
            Rarity::Legendary => &LEGENDARY,
            Rarity::Stary => &STARY,
            Rarity::Hst | Rarity::Awakened => &HST,
        }
    }

    pub fn level_cap(&self) -> u32 {
        self.profile().level_cap
    }

    pub fn growth(&self) -> StatGains {
        self.profile().growth
    }

    /// Level 1 stats before IVs are applied.
    pub fn base_stats(&self) -> Stats {
        let (hp, attack, defense, speed) = self.profile().base;
        Stats::new(hp, attack, defense, speed)
    }

    /// Stable key used by persisted records.
    pub fn key(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::SuperRare => "super_rare",
            Rarity::UltraRare => "ultra_rare",
            Rarity::Legendary => "legendary",
            Rarity::Stary => "stary",
            Rarity::Hst => "hst",
            Rarity::Awakened => "awakened",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Stary => "Stary",
            Rarity::Hst => "HST",
            Rarity::Awakened => "Awakened",
        }
    }

    /// Sort rank for display, 0 = lowest.
    pub fn display_rank(&self) -> u32 {
        *self as u32
    }

    pub fn from_key(key: &str) -> Option<Rarity> {
        let normalized = key.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "super_rare" | "sr" => Some(Rarity::SuperRare),
            "ultra_rare" | "ur" => Some(Rarity::UltraRare),
            "legendary" => Some(Rarity::Legendary),
            "stary" => Some(Rarity::Stary),
            "hst" => Some(Rarity::Hst),
            "awakened" => Some(Rarity::Awakened),
            _ => None,
        }
    }

    /// Lenient lookup for stored keys: unknown tiers progress on the Common table.
    pub fn from_key_or_default(key: &str) -> Rarity {
        Rarity::from_key(key).unwrap_or_else(|| {
            tracing::warn!(rarity = key, "unknown rarity, falling back to common");
            Rarity::Common
        })
    }
}

impl FromStr for Rarity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::from_key(s).ok_or_else(|| EngineError::UnknownRarity(s.to_string()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
