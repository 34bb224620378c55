//! Built-in rarity and enemy type tables.

use super::types::{EnemyType, EnemyTypeDef, EnemyTypeTable, Rarity, RarityEntry, RarityTable};
use crate::character::StatKind;
use std::collections::BTreeMap;

/// Rarity odds and multipliers, Common through Boss.
pub fn default_rarity_table() -> RarityTable {
    RarityTable {
        entries: vec![
            RarityEntry {
                rarity: Rarity::Common,
                probability: 0.60,
                stat_multiplier: 1.0,
                health_multiplier: 1.0,
                damage_multiplier: 1.0,
            },
            RarityEntry {
                rarity: Rarity::Uncommon,
                probability: 0.25,
                stat_multiplier: 1.3,
                health_multiplier: 1.2,
                damage_multiplier: 1.1,
            },
            RarityEntry {
                rarity: Rarity::Rare,
                probability: 0.10,
                stat_multiplier: 1.6,
                health_multiplier: 1.5,
                damage_multiplier: 1.25,
            },
            RarityEntry {
                rarity: Rarity::Elite,
                probability: 0.04,
                stat_multiplier: 2.0,
                health_multiplier: 2.0,
                damage_multiplier: 1.5,
            },
            RarityEntry {
                rarity: Rarity::Boss,
                probability: 0.01,
                stat_multiplier: 2.5,
                health_multiplier: 3.0,
                damage_multiplier: 2.0,
            },
        ],
    }
}

fn def(
    primary: [StatKind; 2],
    secondary: [StatKind; 2],
    abilities: &[&str],
    boss_eligible: bool,
) -> EnemyTypeDef {
    EnemyTypeDef {
        primary,
        secondary,
        abilities: abilities.iter().map(|a| a.to_string()).collect(),
        boss_eligible,
    }
}

/// Primary/secondary stat pairs and flavor abilities per enemy type.
pub fn default_enemy_types() -> EnemyTypeTable {
    use StatKind::*;

    let mut types = BTreeMap::new();
    types.insert(
        EnemyType::FeralDog,
        def(
            [Strength, Agility],
            [Vitality, Perception],
            &["Bite", "Pack Howl", "Lunge"],
            true,
        ),
    );
    types.insert(
        EnemyType::MutantRat,
        def(
            [Agility, Vitality],
            [Dexterity, Luck],
            &["Gnaw", "Plague Bite", "Swarm"],
            false,
        ),
    );
    types.insert(
        EnemyType::RogueCat,
        def(
            [Dexterity, Agility],
            [Perception, Charisma],
            &["Scratch", "Pounce", "Hiss"],
            true,
        ),
    );
    types.insert(
        EnemyType::WildBoar,
        def(
            [Strength, Vitality],
            [Willpower, Agility],
            &["Charge", "Tusk Gore", "Thick Hide"],
            true,
        ),
    );
    types.insert(
        EnemyType::GiantCrow,
        def(
            [Perception, Agility],
            [Intelligence, Dexterity],
            &["Peck", "Dive", "Shiny Theft"],
            false,
        ),
    );
    types.insert(
        EnemyType::ScavengerRaccoon,
        def(
            [Dexterity, Intelligence],
            [Luck, Agility],
            &["Rummage", "Trash Toss", "Masked Feint"],
            false,
        ),
    );
    types.insert(
        EnemyType::SewerSnake,
        def(
            [Agility, Perception],
            [Dexterity, Willpower],
            &["Venom Strike", "Constrict", "Slither"],
            false,
        ),
    );
    types.insert(
        EnemyType::MangyFox,
        def(
            [Intelligence, Agility],
            [Charisma, Perception],
            &["Trick", "Ambush", "Snap"],
            false,
        ),
    );

    EnemyTypeTable { types }
}
