//! Enemy archetypes by stage band. Cosmetic only.

use crate::core::constants::ARCHETYPE_BAND_SIZE;

/// Display name and visual tag of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub visual: &'static str,
}

const fn a(name: &'static str, visual: &'static str) -> Archetype {
    Archetype { name, visual }
}

// One row per 50-stage band
const ARCHETYPE_BANDS: [&[Archetype]; 8] = [
    &[
        a("Slime", "slime"),
        a("Field Rat", "rat"),
        a("Goblin", "goblin"),
        a("Wild Boar", "boar"),
    ],
    &[
        a("Forest Wolf", "wolf"),
        a("Thorn Sprite", "sprite"),
        a("Bandit", "bandit"),
        a("Giant Spider", "spider"),
    ],
    &[
        a("Stone Golem", "golem"),
        a("Harpy", "harpy"),
        a("Orc Raider", "orc"),
        a("Cave Bat", "bat"),
    ],
    &[
        a("Skeleton Knight", "skeleton"),
        a("Wraith", "wraith"),
        a("Cursed Armor", "armor"),
        a("Gargoyle", "gargoyle"),
    ],
    &[
        a("Fire Salamander", "salamander"),
        a("Magma Imp", "imp"),
        a("Ash Drake", "drake"),
        a("Flame Elemental", "elemental_fire"),
    ],
    &[
        a("Frost Wyrm", "wyrm"),
        a("Ice Wendigo", "wendigo"),
        a("Glacier Bear", "bear"),
        a("Snow Wraith", "wraith_ice"),
    ],
    &[
        a("Storm Griffin", "griffin"),
        a("Thunder Djinn", "djinn"),
        a("Sky Serpent", "serpent"),
        a("Tempest Roc", "roc"),
    ],
    &[
        a("Void Knight", "void_knight"),
        a("Abyssal Titan", "titan"),
        a("Star Devourer", "devourer"),
        a("Fallen Seraph", "seraph"),
    ],
];

/// Cosmetic prefixes for RNG-decorated names.
pub const EPITHETS: [&str; 10] = [
    "Savage", "Grim", "Feral", "Ancient", "Dire", "Cursed", "Frenzied", "Hollow", "Vile", "Elder",
];

/// Archetypes for the band containing `stage`; stages past the table reuse the last band.
pub fn band_archetypes(stage: u32) -> &'static [Archetype] {
    let band = (stage.saturating_sub(1) / ARCHETYPE_BAND_SIZE) as usize;
    ARCHETYPE_BANDS[band.min(ARCHETYPE_BANDS.len() - 1)]
}

/// Archetype for a given enemy slot, rotating through the band by stage.
pub fn archetype_for(stage: u32, slot: usize) -> Archetype {
    let band = band_archetypes(stage);
    band[(stage as usize + slot) % band.len()]
}
