//! Themed dungeon generation.

use super::logic::average_party_level;
use super::types::{BossDefinition, Dungeon, DungeonTheme, FactionTable, LootItem, Room};
use crate::core::config::GameConfig;
use crate::core::constants::{
    BOSS_ROOM_LOOT_COUNT, DUNGEON_BOSS_LEVEL_BONUS, DUNGEON_ROOM_ENEMIES_MAX,
    DUNGEON_ROOM_ENEMIES_MIN, STANDARD_ROOM_LOOT_COUNT,
};
use crate::core::random::{pick_uniform, random_int, RandomSource};
use crate::enemies::{Enemy, EnemyFactory, Rarity};
use crate::error::Result;
use tracing::{debug, info};

/// Draws `count` items from the loot table, with replacement.
pub fn roll_loot(
    table: &[LootItem],
    count: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<LootItem>> {
    let mut loot = Vec::with_capacity(count);
    for _ in 0..count {
        loot.push(pick_uniform(table, rng)?.clone());
    }
    Ok(loot)
}

/// Builds dungeons from themes.
pub struct DungeonGenerator<'a> {
    factory: EnemyFactory<'a>,
    factions: &'a FactionTable,
}

impl<'a> DungeonGenerator<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            factory: EnemyFactory::new(config),
            factions: &config.factions,
        }
    }

    pub fn with_parts(factory: EnemyFactory<'a>, factions: &'a FactionTable) -> Self {
        Self { factory, factions }
    }

    pub fn factory(&self) -> &EnemyFactory<'a> {
        &self.factory
    }

    /// Generates a dungeon for a party whose selected cats have `party_levels`.
    ///
    /// Every room but the last is a standard room with a faction, a hazard,
    /// 2-4 enemies and one loot item. The last room holds a single boss
    /// and three loot items.
    pub fn generate(
        &self,
        theme: &DungeonTheme,
        party_levels: &[u32],
        rng: &mut impl RandomSource,
    ) -> Result<Dungeon> {
        theme.validate()?;

        let level = average_party_level(party_levels);
        let room_count = random_int(theme.min_rooms, theme.max_rooms, rng) as usize;
        let boss_def = pick_uniform(&theme.boss_options, rng)?;

        let mut rooms = Vec::with_capacity(room_count);
        for index in 0..room_count.saturating_sub(1) {
            rooms.push(self.standard_room(theme, index, level, rng)?);
        }
        rooms.push(self.boss_room(theme, boss_def, level, rng)?);

        info!(
            theme = %theme.name,
            rooms = rooms.len(),
            party_level = level,
            boss = %boss_def.name,
            "generated dungeon"
        );

        Ok(Dungeon {
            name: theme.name.clone(),
            description: theme.description.clone(),
            rooms,
            current_room_index: 0,
            completed: false,
            party_level: level,
        })
    }

    fn standard_room(
        &self,
        theme: &DungeonTheme,
        index: usize,
        level: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Room> {
        let faction = pick_uniform(&theme.enemy_factions, rng)?;
        let modifier = pick_uniform(&theme.environment_modifiers, rng)?;
        let enemy_type = self.factions.type_for(faction);

        let count = random_int(DUNGEON_ROOM_ENEMIES_MIN, DUNGEON_ROOM_ENEMIES_MAX, rng);
        let mut enemies = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let mut enemy = self.factory.generate(level, Some(enemy_type), None, rng)?;
            enemy.faction = Some(faction.clone());
            enemies.push(enemy);
        }

        let loot = roll_loot(&theme.loot_table, STANDARD_ROOM_LOOT_COUNT, rng)?;

        debug!(
            room = index + 1,
            faction = %faction,
            hazard = %modifier.name,
            enemies = enemies.len(),
            "generated room"
        );

        Ok(Room {
            name: format!("Room {}: {}", index + 1, modifier.name),
            description: format!("{} hold this room. {}", faction, modifier.description),
            enemies,
            environment_modifier: Some(modifier.clone()),
            loot,
            faction: Some(faction.clone()),
            completed: false,
            is_boss_room: false,
        })
    }

    fn boss_room(
        &self,
        theme: &DungeonTheme,
        boss_def: &BossDefinition,
        level: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Room> {
        let boss = self.build_boss(boss_def, level, rng)?;
        let loot = roll_loot(&theme.loot_table, BOSS_ROOM_LOOT_COUNT, rng)?;

        Ok(Room {
            name: format!("{}'s Lair", boss_def.name),
            description: boss_def.description.clone(),
            enemies: vec![boss],
            environment_modifier: None,
            loot,
            faction: None,
            completed: false,
            is_boss_room: true,
        })
    }

    /// Boss stats come from the factory at party level + 3; name,
    /// abilities and phases come from the boss definition.
    fn build_boss(
        &self,
        boss_def: &BossDefinition,
        level: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Enemy> {
        let candidates = self.factory.types().boss_candidates();
        let boss_type = *pick_uniform(&candidates, rng)?;

        let mut boss = self.factory.generate_at_level(
            level.saturating_add(DUNGEON_BOSS_LEVEL_BONUS),
            boss_type,
            Rarity::Boss,
            rng,
        )?;
        boss.name = boss_def.name.clone();
        boss.abilities = boss_def.abilities.clone();
        boss.phases = Some(boss_def.phases.max(1));
        boss.current_phase = Some(1);
        Ok(boss)
    }
}
