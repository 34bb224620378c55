use crate::character::{DerivedAttributes, StatBlock, StatKind};
use crate::core::constants::{
    PROBABILITY_SUM_TOLERANCE, RARITY_LEVEL_OFFSETS, RARITY_REWARD_MULTIPLIERS,
    ENEMY_STRENGTH_PER_LEVEL,
};
use crate::error::{Result, StraysError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Power tier of an enemy. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Elite = 3,
    Boss = 4,
}

impl Rarity {
    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Elite,
            Rarity::Boss,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Elite => "Elite",
            Rarity::Boss => "Boss",
        }
    }

    /// Levels added on top of the party level.
    pub fn level_offset(&self) -> u32 {
        RARITY_LEVEL_OFFSETS[self.index()]
    }

    /// Multiplier for standalone battle rewards.
    pub fn reward_multiplier(&self) -> f64 {
        RARITY_REWARD_MULTIPLIERS[self.index()]
    }
}

/// One row of the rarity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityEntry {
    pub rarity: Rarity,
    pub probability: f64,
    pub stat_multiplier: f64,
    pub health_multiplier: f64,
    pub damage_multiplier: f64,
}

/// Spawn probabilities and scaling factors for every rarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RarityTable {
    pub entries: Vec<RarityEntry>,
}

impl Default for RarityTable {
    fn default() -> Self {
        super::data::default_rarity_table()
    }
}

impl RarityTable {
    pub fn entry(&self, rarity: Rarity) -> Result<&RarityEntry> {
        self.entries
            .iter()
            .find(|e| e.rarity == rarity)
            .ok_or_else(|| StraysError::config(format!("rarity {} missing from table", rarity.name())))
    }

    /// Checks that each rarity appears once, multipliers are positive,
    /// and probabilities sum to one.
    pub fn validate(&self) -> Result<()> {
        for rarity in Rarity::all() {
            let count = self.entries.iter().filter(|e| e.rarity == rarity).count();
            if count != 1 {
                return Err(StraysError::config(format!(
                    "rarity {} appears {} times",
                    rarity.name(),
                    count
                )));
            }
        }

        for entry in &self.entries {
            if !(entry.probability >= 0.0 && entry.probability.is_finite()) {
                return Err(StraysError::config(format!(
                    "rarity {} has invalid probability {}",
                    entry.rarity.name(),
                    entry.probability
                )));
            }
            let multipliers = [
                entry.stat_multiplier,
                entry.health_multiplier,
                entry.damage_multiplier,
            ];
            if multipliers.iter().any(|m| !(m.is_finite() && *m > 0.0)) {
                return Err(StraysError::config(format!(
                    "rarity {} has a non-positive multiplier",
                    entry.rarity.name()
                )));
            }
        }

        let sum: f64 = self.entries.iter().map(|e| e.probability).sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(StraysError::config(format!(
                "rarity probabilities sum to {sum}, expected 1.0"
            )));
        }

        Ok(())
    }
}

/// Enemy archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    FeralDog,
    MutantRat,
    RogueCat,
    WildBoar,
    GiantCrow,
    ScavengerRaccoon,
    SewerSnake,
    MangyFox,
}

impl EnemyType {
    pub fn all() -> [EnemyType; 8] {
        [
            EnemyType::FeralDog,
            EnemyType::MutantRat,
            EnemyType::RogueCat,
            EnemyType::WildBoar,
            EnemyType::GiantCrow,
            EnemyType::ScavengerRaccoon,
            EnemyType::SewerSnake,
            EnemyType::MangyFox,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyType::FeralDog => "Feral Dog",
            EnemyType::MutantRat => "Mutant Rat",
            EnemyType::RogueCat => "Rogue Cat",
            EnemyType::WildBoar => "Wild Boar",
            EnemyType::GiantCrow => "Giant Crow",
            EnemyType::ScavengerRaccoon => "Scavenger Raccoon",
            EnemyType::SewerSnake => "Sewer Snake",
            EnemyType::MangyFox => "Mangy Fox",
        }
    }
}

/// Stat bonuses and flavor abilities for one enemy type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTypeDef {
    /// Each gets the primary bonus.
    pub primary: [StatKind; 2],
    /// Each gets the secondary bonus.
    pub secondary: [StatKind; 2],
    pub abilities: Vec<String>,
    /// Whether a dungeon boss may be built on this type.
    #[serde(default)]
    pub boss_eligible: bool,
}

/// Registered enemy types keyed by archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyTypeTable {
    pub types: BTreeMap<EnemyType, EnemyTypeDef>,
}

impl Default for EnemyTypeTable {
    fn default() -> Self {
        super::data::default_enemy_types()
    }
}

impl EnemyTypeTable {
    /// Bonus definition for a type. `None` means the type gets no bonus.
    pub fn get(&self, enemy_type: EnemyType) -> Option<&EnemyTypeDef> {
        self.types.get(&enemy_type)
    }

    /// Registered types in a stable order.
    pub fn registered(&self) -> Vec<EnemyType> {
        self.types.keys().copied().collect()
    }

    /// Types a dungeon boss may use. Falls back to every registered type.
    pub fn boss_candidates(&self) -> Vec<EnemyType> {
        let eligible: Vec<EnemyType> = self
            .types
            .iter()
            .filter(|(_, def)| def.boss_eligible)
            .map(|(t, _)| *t)
            .collect();
        if eligible.is_empty() {
            self.registered()
        } else {
            eligible
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() {
            return Err(StraysError::config("enemy type table is empty"));
        }
        Ok(())
    }
}

/// Cosmetic look of an enemy. Never read by combat math.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Appearance {
    pub coat_color: String,
    pub eye_color: String,
    pub size: String,
    pub marking: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u64,
    pub name: String,
    pub enemy_type: EnemyType,
    pub level: u32,
    pub rarity: Rarity,
    pub appearance: Appearance,
    pub stats: StatBlock,
    pub attributes: DerivedAttributes,
    pub abilities: Vec<String>,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub phases: Option<u32>,
    #[serde(default)]
    pub current_phase: Option<u32>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.attributes.current_health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.attributes.current_health = self.attributes.current_health.saturating_sub(amount);
    }

    /// This enemy's contribution to a group's strength score.
    pub fn strength_score(&self) -> u32 {
        self.level
            .saturating_mul(ENEMY_STRENGTH_PER_LEVEL)
            .saturating_add(self.stats.get(StatKind::Strength))
            .saturating_add(self.stats.get(StatKind::Vitality))
            .saturating_add(self.attributes.physical_attack)
    }

    /// Recomputes attributes from the current stats and rarity at full health.
    pub fn recompute_attributes(&self, rarities: &RarityTable) -> Result<DerivedAttributes> {
        let entry = rarities.entry(self.rarity)?;
        Ok(DerivedAttributes::from_stats(&self.stats)
            .with_multipliers(entry.health_multiplier, entry.damage_multiplier))
    }
}
