//! Enemy groups for standalone battles.

use super::generation::EnemyFactory;
use super::types::{Enemy, Rarity};
use crate::combat::types::Battle;
use crate::core::config::GameConfig;
use crate::core::random::RandomSource;
use crate::error::{Result, StraysError};
use tracing::debug;

/// Assembles groups of enemies around forced Boss/Elite slots.
pub struct EncounterGroupBuilder<'a> {
    factory: EnemyFactory<'a>,
}

impl<'a> EncounterGroupBuilder<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            factory: EnemyFactory::new(config),
        }
    }

    pub fn with_factory(factory: EnemyFactory<'a>) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &EnemyFactory<'a> {
        &self.factory
    }

    /// Builds a group of roughly `size` enemies.
    ///
    /// A requested boss is always included, even when `size` is zero. An
    /// elite is included only when no boss was requested and a slot is
    /// free. Remaining slots are filled with unforced enemies.
    pub fn build_group(
        &self,
        player_level: u32,
        size: i32,
        include_elite: bool,
        include_boss: bool,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<Enemy>> {
        if size < 0 {
            return Err(StraysError::input(format!(
                "group size must not be negative, got {size}"
            )));
        }
        let mut remaining = size as u32;
        let mut group = Vec::with_capacity(remaining.max(1) as usize);

        if include_boss {
            group.push(self.factory.generate(player_level, None, Some(Rarity::Boss), rng)?);
            remaining = remaining.saturating_sub(1);
        } else if include_elite && remaining > 0 {
            group.push(self.factory.generate(player_level, None, Some(Rarity::Elite), rng)?);
            remaining -= 1;
        }

        for _ in 0..remaining {
            group.push(self.factory.generate(player_level, None, None, rng)?);
        }

        debug!(
            player_level,
            size,
            include_elite,
            include_boss,
            built = group.len(),
            "built encounter group"
        );

        Ok(group)
    }

    /// Builds a standalone battle with its rewards precomputed.
    pub fn build_battle(
        &self,
        player_level: u32,
        size: i32,
        include_elite: bool,
        include_boss: bool,
        rng: &mut impl RandomSource,
    ) -> Result<Battle> {
        let enemies = self.build_group(player_level, size, include_elite, include_boss, rng)?;
        Ok(Battle::new(enemies))
    }
}
