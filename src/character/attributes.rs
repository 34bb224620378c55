use crate::core::constants::NUM_STATS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatKind {
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "DEX")]
    Dexterity,
    #[serde(rename = "AGI")]
    Agility,
    #[serde(rename = "VIT")]
    Vitality,
    #[serde(rename = "WIL")]
    Willpower,
    #[serde(rename = "INT")]
    Intelligence,
    #[serde(rename = "CHA")]
    Charisma,
    #[serde(rename = "PER")]
    Perception,
    #[serde(rename = "LCK")]
    Luck,
}

impl StatKind {
    pub fn all() -> [StatKind; NUM_STATS] {
        [
            StatKind::Strength,
            StatKind::Dexterity,
            StatKind::Agility,
            StatKind::Vitality,
            StatKind::Willpower,
            StatKind::Intelligence,
            StatKind::Charisma,
            StatKind::Perception,
            StatKind::Luck,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatKind::Strength => "STR",
            StatKind::Dexterity => "DEX",
            StatKind::Agility => "AGI",
            StatKind::Vitality => "VIT",
            StatKind::Willpower => "WIL",
            StatKind::Intelligence => "INT",
            StatKind::Charisma => "CHA",
            StatKind::Perception => "PER",
            StatKind::Luck => "LCK",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatKind::Strength => 0,
            StatKind::Dexterity => 1,
            StatKind::Agility => 2,
            StatKind::Vitality => 3,
            StatKind::Willpower => 4,
            StatKind::Intelligence => 5,
            StatKind::Charisma => 6,
            StatKind::Perception => 7,
            StatKind::Luck => 8,
        }
    }
}

/// The nine-stat vector every fighter carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatBlock {
    values: [u32; NUM_STATS],
}

impl StatBlock {
    /// Every stat set to `value`.
    pub fn uniform(value: u32) -> Self {
        Self {
            values: [value; NUM_STATS],
        }
    }

    pub fn get(&self, stat: StatKind) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatKind, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn add(&mut self, stat: StatKind, amount: u32) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(amount);
    }

    /// Sum of all nine stats.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// Creates a block from values in STR, DEX, AGI, VIT, WIL, INT, CHA, PER, LCK order.
    pub fn from_values(values: [u32; NUM_STATS]) -> Self {
        Self { values }
    }
}
