use super::names::{generate_appearance, generate_enemy_name};
use super::types::{Enemy, EnemyType, EnemyTypeTable, Rarity, RarityTable};
use crate::character::{DerivedAttributes, StatBlock};
use crate::core::config::GameConfig;
use crate::core::constants::{
    BASE_STAT_VALUE, PRIMARY_STAT_BONUS, SECONDARY_STAT_BONUS, STAT_GAIN_PER_LEVEL,
};
use crate::core::random::{pick_uniform, roll_rarity, RandomSource};
use crate::error::Result;
use std::cell::Cell;
use tracing::debug;

/// Value every stat starts at for a given enemy level, before rarity.
pub fn base_stat_value(level: u32) -> u32 {
    BASE_STAT_VALUE.saturating_add(level.saturating_sub(1).saturating_mul(STAT_GAIN_PER_LEVEL))
}

/// Uniform stat block for a level, scaled by the rarity stat multiplier.
pub fn rolled_stats(level: u32, stat_multiplier: f64) -> StatBlock {
    let value = (base_stat_value(level) as f64 * stat_multiplier).floor() as u32;
    StatBlock::uniform(value)
}

/// Adds the type's primary and secondary bonuses.
///
/// Types missing from the table get no bonus at all.
pub fn apply_type_bonus(stats: &mut StatBlock, types: &EnemyTypeTable, enemy_type: EnemyType) {
    let Some(def) = types.get(enemy_type) else {
        return;
    };
    for stat in def.primary {
        stats.add(stat, PRIMARY_STAT_BONUS);
    }
    for stat in def.secondary {
        stats.add(stat, SECONDARY_STAT_BONUS);
    }
}

/// Builds enemies from the rarity and type tables.
///
/// Enemy ids count up from 1 and are unique only within one factory. Use
/// `starting_at` to continue numbering from another factory.
pub struct EnemyFactory<'a> {
    rarities: &'a RarityTable,
    types: &'a EnemyTypeTable,
    next_id: Cell<u64>,
}

impl<'a> EnemyFactory<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self::with_tables(&config.rarities, &config.enemy_types)
    }

    pub fn with_tables(rarities: &'a RarityTable, types: &'a EnemyTypeTable) -> Self {
        Self {
            rarities,
            types,
            next_id: Cell::new(1),
        }
    }

    /// Makes the next generated enemy take `first_id`.
    pub fn starting_at(self, first_id: u64) -> Self {
        self.next_id.set(first_id);
        self
    }

    /// Id the next generated enemy will take.
    pub fn next_id(&self) -> u64 {
        self.next_id.get()
    }

    pub fn rarities(&self) -> &'a RarityTable {
        self.rarities
    }

    pub fn types(&self) -> &'a EnemyTypeTable {
        self.types
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id.saturating_add(1));
        id
    }

    /// Generates an enemy scaled to the party level.
    ///
    /// The type is drawn uniformly from the registered types unless forced,
    /// the rarity from the rarity table unless forced. The enemy's level is
    /// the party level plus the rarity's level offset.
    pub fn generate(
        &self,
        player_level: u32,
        forced_type: Option<EnemyType>,
        forced_rarity: Option<Rarity>,
        rng: &mut impl RandomSource,
    ) -> Result<Enemy> {
        let enemy_type = match forced_type {
            Some(t) => t,
            None => *pick_uniform(&self.types.registered(), rng)?,
        };
        let rarity = match forced_rarity {
            Some(r) => r,
            None => roll_rarity(self.rarities, rng)?,
        };
        let level = player_level.max(1).saturating_add(rarity.level_offset());
        self.generate_at_level(level, enemy_type, rarity, rng)
    }

    /// Generates an enemy at exactly `level`, skipping the rarity level offset.
    pub fn generate_at_level(
        &self,
        level: u32,
        enemy_type: EnemyType,
        rarity: Rarity,
        rng: &mut impl RandomSource,
    ) -> Result<Enemy> {
        // Forced rarities never pass through roll_rarity
        self.rarities.validate()?;
        let level = level.max(1);
        let entry = self.rarities.entry(rarity)?;

        let mut stats = rolled_stats(level, entry.stat_multiplier);
        apply_type_bonus(&mut stats, self.types, enemy_type);

        let attributes = DerivedAttributes::from_stats(&stats)
            .with_multipliers(entry.health_multiplier, entry.damage_multiplier);

        let abilities = self
            .types
            .get(enemy_type)
            .map(|def| def.abilities.clone())
            .unwrap_or_default();

        // Cosmetics last so they never shift stat draws
        let name = generate_enemy_name(enemy_type, rarity, rng);
        let appearance = generate_appearance(rng);

        let enemy = Enemy {
            id: self.allocate_id(),
            name,
            enemy_type,
            level,
            rarity,
            appearance,
            stats,
            attributes,
            abilities,
            faction: None,
            phases: None,
            current_phase: None,
        };

        debug!(
            id = enemy.id,
            name = %enemy.name,
            level = enemy.level,
            rarity = enemy.rarity.name(),
            max_health = enemy.attributes.max_health,
            "generated enemy"
        );

        Ok(enemy)
    }
}
