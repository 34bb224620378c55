//! Data tables the generators read from.

use crate::dungeon::data::default_themes;
use crate::dungeon::{DungeonTheme, FactionTable};
use crate::enemies::{EnemyTypeTable, RarityTable};
use crate::error::{Result, StraysError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Rarity, enemy type, faction and theme tables.
///
/// `Default` gives the built-in tables. Anything loaded from JSON is
/// validated before it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub rarities: RarityTable,
    #[serde(default)]
    pub enemy_types: EnemyTypeTable,
    #[serde(default)]
    pub factions: FactionTable,
    #[serde(default = "default_themes")]
    pub themes: Vec<DungeonTheme>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rarities: RarityTable::default(),
            enemy_types: EnemyTypeTable::default(),
            factions: FactionTable::default(),
            themes: default_themes(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        self.rarities.validate()?;
        self.enemy_types.validate()?;
        if self.themes.is_empty() {
            return Err(StraysError::config("no dungeon themes configured"));
        }
        for theme in &self.themes {
            theme.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), themes = config.themes.len(), "loaded config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn theme(&self, name: &str) -> Result<&DungeonTheme> {
        self.themes
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| StraysError::input(format!("unknown dungeon theme '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{EnemyType, Rarity};

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.themes.len(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json_string().unwrap();
        let parsed = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = GameConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bad_probabilities_rejected() {
        let mut config = GameConfig::default();
        config.rarities.entries[0].probability = 0.9;
        let json = config.to_json_string().unwrap();

        let result = GameConfig::from_json_str(&json);
        assert!(matches!(result, Err(StraysError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_duplicate_rarity_rejected() {
        let mut config = GameConfig::default();
        config.rarities.entries[1].rarity = Rarity::Common;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_tables_rejected() {
        let mut config = GameConfig::default();
        config.themes.clear();
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.enemy_types.types.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = GameConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(StraysError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load("/definitely/not/here/strays.json");
        assert!(matches!(result, Err(StraysError::ConfigIo(_))));
    }

    #[test]
    fn test_theme_lookup() {
        let config = GameConfig::default();
        assert_eq!(
            config.theme("Overgrown Park").unwrap().name,
            "Overgrown Park"
        );
        assert!(matches!(
            config.theme("Moon Base"),
            Err(StraysError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "factions": { "mapping": { "Rat Swarm": "SewerSnake" }, "fallback": "FeralDog" }
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();
        assert_eq!(config.factions.type_for("Rat Swarm"), EnemyType::SewerSnake);
        assert_eq!(config.factions.type_for("Boar Herd"), EnemyType::FeralDog);
        assert_eq!(config.rarities, RarityTable::default());
    }
}
