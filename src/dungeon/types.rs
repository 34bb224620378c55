//! Dungeon data structures.
//!
//! A dungeon is a fixed, ordered run of rooms ending in a boss room. These
//! are plain values; progression lives in `logic`.

use crate::character::StatKind;
use crate::enemies::{Enemy, EnemyType};
use crate::error::{Result, StraysError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flavor hazard attached to a standard room, tied to one stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentModifier {
    pub name: String,
    pub affected_stat: StatKind,
    pub description: String,
}

/// Reward item. The stat bonus is display data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootItem {
    pub name: String,
    pub stat_bonus: StatKind,
    pub description: String,
}

/// Named boss a theme can end with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossDefinition {
    pub name: String,
    pub description: String,
    pub abilities: Vec<String>,
    pub phases: u32,
}

/// Everything needed to generate one kind of dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonTheme {
    pub name: String,
    pub description: String,
    pub min_rooms: u32,
    pub max_rooms: u32,
    pub enemy_factions: Vec<String>,
    pub boss_options: Vec<BossDefinition>,
    pub environment_modifiers: Vec<EnvironmentModifier>,
    pub loot_table: Vec<LootItem>,
}

impl DungeonTheme {
    pub fn validate(&self) -> Result<()> {
        if self.min_rooms == 0 {
            return Err(StraysError::config(format!(
                "theme '{}' needs at least one room",
                self.name
            )));
        }
        if self.min_rooms > self.max_rooms {
            return Err(StraysError::config(format!(
                "theme '{}' has min_rooms {} above max_rooms {}",
                self.name, self.min_rooms, self.max_rooms
            )));
        }
        let empty = if self.enemy_factions.is_empty() {
            Some("enemy_factions")
        } else if self.boss_options.is_empty() {
            Some("boss_options")
        } else if self.environment_modifiers.is_empty() {
            Some("environment_modifiers")
        } else if self.loot_table.is_empty() {
            Some("loot_table")
        } else {
            None
        };
        if let Some(field) = empty {
            return Err(StraysError::config(format!(
                "theme '{}' has an empty {field}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Maps dungeon factions to the enemy type they field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionTable {
    pub mapping: BTreeMap<String, EnemyType>,
    /// Used for any faction not in `mapping`.
    pub fallback: EnemyType,
}

impl Default for FactionTable {
    fn default() -> Self {
        super::data::default_faction_table()
    }
}

impl FactionTable {
    pub fn type_for(&self, faction: &str) -> EnemyType {
        self.mapping.get(faction).copied().unwrap_or(self.fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub enemies: Vec<Enemy>,
    /// Always `None` for the boss room.
    pub environment_modifier: Option<EnvironmentModifier>,
    pub loot: Vec<LootItem>,
    #[serde(default)]
    pub faction: Option<String>,
    pub completed: bool,
    pub is_boss_room: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DungeonState {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub name: String,
    pub description: String,
    pub rooms: Vec<Room>,
    pub current_room_index: usize,
    pub completed: bool,
    /// Party level the dungeon was generated for.
    pub party_level: u32,
}

impl Dungeon {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(self.current_room_index)
    }

    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.get_mut(self.current_room_index)
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.rooms.last()
    }

    pub fn is_final_room(&self) -> bool {
        self.current_room_index + 1 == self.rooms.len()
    }

    /// Rooms not yet completed.
    pub fn remaining_rooms(&self) -> usize {
        self.rooms.iter().filter(|r| !r.completed).count()
    }

    pub fn state(&self) -> DungeonState {
        if self.completed {
            DungeonState::Completed
        } else {
            DungeonState::InProgress
        }
    }
}
