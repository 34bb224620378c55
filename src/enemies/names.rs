//! Cosmetic enemy names and looks.
//!
//! Nothing here feeds into stats or combat. The factory calls these only
//! after every stat draw is done.

use super::types::{Appearance, EnemyType, Rarity};
use crate::core::random::{pick_uniform, random_int, RandomSource};

const COAT_COLORS: [&str; 8] = [
    "black", "grey", "brown", "ginger", "white", "tawny", "mottled", "sooty",
];
const EYE_COLORS: [&str; 6] = ["yellow", "green", "amber", "red", "milky", "blue"];
const SIZES: [&str; 4] = ["scrawny", "lean", "stocky", "hulking"];
const MARKINGS: [&str; 6] = [
    "torn ear",
    "scarred muzzle",
    "striped tail",
    "patchy coat",
    "white blaze",
    "notched ear",
];
const ADJECTIVES: [&str; 8] = [
    "Mangy", "Hungry", "Scarred", "Snarling", "Sly", "Grimy", "Rabid", "One-Eyed",
];

/// Word placed in front of the type name for stronger rarities.
pub fn rarity_prefix(rarity: Rarity) -> Option<&'static str> {
    match rarity {
        Rarity::Common => None,
        Rarity::Uncommon => Some("Tough"),
        Rarity::Rare => Some("Fierce"),
        Rarity::Elite => Some("Elite"),
        Rarity::Boss => Some("Alpha"),
    }
}

fn pick(options: &[&'static str], rng: &mut impl RandomSource) -> &'static str {
    pick_uniform(options, rng).copied().unwrap_or("")
}

/// Builds a display name such as "Fierce Snarling Feral Dog".
pub fn generate_enemy_name(
    enemy_type: EnemyType,
    rarity: Rarity,
    rng: &mut impl RandomSource,
) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(prefix) = rarity_prefix(rarity) {
        parts.push(prefix);
    }
    // Half of all enemies get an adjective
    if random_int(0, 1, rng) == 1 {
        parts.push(pick(&ADJECTIVES, rng));
    }
    parts.push(enemy_type.name());
    parts.join(" ")
}

pub fn generate_appearance(rng: &mut impl RandomSource) -> Appearance {
    Appearance {
        coat_color: pick(&COAT_COLORS, rng).to_string(),
        eye_color: pick(&EYE_COLORS, rng).to_string(),
        size: pick(&SIZES, rng).to_string(),
        marking: pick(&MARKINGS, rng).to_string(),
    }
}
