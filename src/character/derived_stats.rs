use super::attributes::{StatKind, StatBlock};
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Combat numbers derived from a stat block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    pub max_health: u32,
    pub current_health: u32,
    pub attack_damage: u32,
    pub accuracy: u32,
    pub dodge_chance: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub physical_attack: u32,
    pub physical_defense: u32,
    pub magic_attack: u32,
    pub magic_resistance: u32,
    pub debuff_resistance: u32,
    pub speed: u32,
    pub health_regen_rate: u32,
}

fn scaled(value: u32, factor: f64) -> u32 {
    (value as f64 * factor).floor() as u32
}

impl DerivedAttributes {
    /// Computes attributes from stats alone, before any rarity scaling.
    pub fn from_stats(stats: &StatBlock) -> Self {
        let str = stats.get(StatKind::Strength);
        let dex = stats.get(StatKind::Dexterity);
        let agi = stats.get(StatKind::Agility);
        let vit = stats.get(StatKind::Vitality);
        let wil = stats.get(StatKind::Willpower);
        let int = stats.get(StatKind::Intelligence);
        let per = stats.get(StatKind::Perception);

        let max_health = BASE_HEALTH.saturating_add(vit.saturating_mul(HEALTH_PER_VIT));

        Self {
            max_health,
            current_health: max_health,
            attack_damage: BASE_ATTACK_DAMAGE.saturating_add(str),
            accuracy: BASE_ACCURACY.saturating_add(dex),
            dodge_chance: agi as f64 * DODGE_PER_AGI,
            attack_speed: BASE_ATTACK_SPEED + agi as f64 * ATTACK_SPEED_PER_AGI,
            crit_chance: per as f64 / PER_PER_CRIT_PERCENT,
            physical_attack: scaled(str, PHYSICAL_ATTACK_PER_STR),
            physical_defense: scaled(str, PHYSICAL_DEFENSE_PER_STR),
            magic_attack: scaled(int, MAGIC_ATTACK_PER_INT),
            magic_resistance: scaled(wil, MAGIC_RESIST_PER_WIL),
            debuff_resistance: scaled(wil, DEBUFF_RESIST_PER_WIL),
            speed: scaled(dex, SPEED_PER_DEX),
            health_regen_rate: scaled(vit, REGEN_PER_VIT),
        }
    }

    /// Applies rarity health and damage multipliers.
    ///
    /// Only health and the two attack values scale; everything else stays
    /// a pure function of the stats.
    pub fn with_multipliers(mut self, health_multiplier: f64, damage_multiplier: f64) -> Self {
        self.max_health = scaled(self.max_health, health_multiplier);
        self.current_health = scaled(self.current_health, health_multiplier).min(self.max_health);
        self.physical_attack = scaled(self.physical_attack, damage_multiplier);
        self.magic_attack = scaled(self.magic_attack, damage_multiplier);
        self
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.current_health as f64 / self.max_health as f64
    }
}
