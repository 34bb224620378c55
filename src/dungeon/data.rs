//! Built-in dungeon themes and faction roster.

use super::types::{BossDefinition, DungeonTheme, EnvironmentModifier, FactionTable, LootItem};
use crate::character::StatKind;
use crate::enemies::EnemyType;
use std::collections::BTreeMap;

fn modifier(name: &str, affected_stat: StatKind, description: &str) -> EnvironmentModifier {
    EnvironmentModifier {
        name: name.to_string(),
        affected_stat,
        description: description.to_string(),
    }
}

fn loot(name: &str, stat_bonus: StatKind, description: &str) -> LootItem {
    LootItem {
        name: name.to_string(),
        stat_bonus,
        description: description.to_string(),
    }
}

fn boss(name: &str, description: &str, abilities: &[&str], phases: u32) -> BossDefinition {
    BossDefinition {
        name: name.to_string(),
        description: description.to_string(),
        abilities: abilities.iter().map(|a| a.to_string()).collect(),
        phases,
    }
}

fn factions(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Which enemy type each faction fields.
pub fn default_faction_table() -> FactionTable {
    let mut mapping = BTreeMap::new();
    mapping.insert("Rat Swarm".to_string(), EnemyType::MutantRat);
    mapping.insert("Feral Pack".to_string(), EnemyType::FeralDog);
    mapping.insert("Rogue Clowder".to_string(), EnemyType::RogueCat);
    mapping.insert("Boar Herd".to_string(), EnemyType::WildBoar);
    mapping.insert("Crow Murder".to_string(), EnemyType::GiantCrow);
    mapping.insert("Trash Bandits".to_string(), EnemyType::ScavengerRaccoon);
    mapping.insert("Drain Nest".to_string(), EnemyType::SewerSnake);
    mapping.insert("Fox Den".to_string(), EnemyType::MangyFox);

    FactionTable {
        mapping,
        fallback: EnemyType::MutantRat,
    }
}

/// Every theme a dungeon can be generated from.
pub fn default_themes() -> Vec<DungeonTheme> {
    use StatKind::*;

    vec![
        DungeonTheme {
            name: "Abandoned Sewers".to_string(),
            description: "Dripping tunnels under the old town, thick with vermin.".to_string(),
            min_rooms: 3,
            max_rooms: 5,
            enemy_factions: factions(&["Rat Swarm", "Drain Nest", "Trash Bandits"]),
            boss_options: vec![
                boss(
                    "The Rat King",
                    "A tangle of rats moving as one.",
                    &["Summon Swarm", "Plague Wave", "Gnawing Frenzy"],
                    3,
                ),
                boss(
                    "Old Scalehide",
                    "A snake grown fat on sewer scraps.",
                    &["Crushing Coil", "Venom Spray"],
                    2,
                ),
            ],
            environment_modifiers: vec![
                modifier("Toxic Fumes", Vitality, "The air burns the lungs."),
                modifier("Slippery Ledges", Agility, "One wrong step means a swim."),
                modifier("Pitch Dark", Perception, "Nothing to see but glinting eyes."),
            ],
            loot_table: vec![
                loot("Rusty Key", Luck, "It must open something."),
                loot("Rat Tail Charm", Agility, "Oddly lucky."),
                loot("Sewer Pearl", Charisma, "Shiny once cleaned."),
                loot("Thick Pipe", Strength, "Heavy and reassuring."),
            ],
        },
        DungeonTheme {
            name: "Overgrown Park".to_string(),
            description: "A city park gone wild, claimed by dogs and birds.".to_string(),
            min_rooms: 4,
            max_rooms: 6,
            enemy_factions: factions(&["Feral Pack", "Crow Murder", "Fox Den"]),
            boss_options: vec![
                boss(
                    "Alpha Brute",
                    "Leader of the park's feral pack.",
                    &["Rallying Howl", "Savage Maul", "Pack Tactics"],
                    3,
                ),
                boss(
                    "The Watcher in the Oak",
                    "An enormous crow that sees everything.",
                    &["Screech", "Talon Storm"],
                    2,
                ),
            ],
            environment_modifiers: vec![
                modifier("Thorny Brambles", Vitality, "Every path draws blood."),
                modifier("Tangled Roots", Dexterity, "Footing is never sure."),
                modifier("Howling Wind", Willpower, "The noise wears down resolve."),
            ],
            loot_table: vec![
                loot("Crow Feather", Agility, "Light as air."),
                loot("Chewed Collar", Willpower, "A reminder of old homes."),
                loot("Acorn Stash", Vitality, "Food for lean days."),
            ],
        },
        DungeonTheme {
            name: "Ruined Factory".to_string(),
            description: "Rusting machines and broken glass, home to the boldest strays.".to_string(),
            min_rooms: 5,
            max_rooms: 8,
            enemy_factions: factions(&["Rogue Clowder", "Boar Herd", "Trash Bandits", "Feral Pack"]),
            boss_options: vec![
                boss(
                    "Iron Tusk",
                    "A boar with scrap metal grown into its hide.",
                    &["Rampage", "Iron Hide", "Ground Slam"],
                    3,
                ),
                boss(
                    "Madame Whiskers",
                    "Queen of the rogue cats.",
                    &["Shadow Pounce", "Commanding Yowl", "Nine Lives"],
                    4,
                ),
            ],
            environment_modifiers: vec![
                modifier("Broken Glass", Agility, "Glittering shards everywhere."),
                modifier("Live Wires", Intelligence, "Sparks jump from the walls."),
                modifier("Collapsing Catwalk", Dexterity, "The metal groans underfoot."),
                modifier("Eerie Silence", Willpower, "Something is watching."),
            ],
            loot_table: vec![
                loot("Copper Gear", Intelligence, "Still turns smoothly."),
                loot("Steel Claw Cap", Strength, "Makes every swipe count."),
                loot("Lucky Bolt", Luck, "Found where it shouldn't be."),
                loot("Foreman's Whistle", Charisma, "Strays pay attention to it."),
            ],
        },
    ]
}
