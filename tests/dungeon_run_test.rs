//! Integration test: Complete dungeon run
//!
//! Generates a dungeon, fights room by room and checks completion flags:
//! generate → fight → advance → boss → completed

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strays::character::StatBlock;
use strays::combat::{resolve_room, Participant, Party};
use strays::core::config::GameConfig;
use strays::core::random::ScriptedRandom;
use strays::dungeon::{DungeonGenerator, DungeonState};
use strays::enemies::Rarity;
use strays::StraysError;

/// A party strong enough to win every room of a low-level dungeon.
fn strong_party() -> Party {
    let stats = StatBlock::uniform(200);
    Party::new(vec![
        Participant::from_stats(1, "Tom", 2, &stats, u32::MAX),
        Participant::from_stats(2, "Luna", 2, &stats, u32::MAX),
    ])
}

/// A party that loses every dungeon room.
fn weak_party() -> Party {
    let stats = StatBlock::uniform(1);
    Party::new(vec![Participant::from_stats(1, "Kit", 1, &stats, u32::MAX)])
}

#[test]
fn test_complete_dungeon_run() {
    let config = GameConfig::default();
    let generator = DungeonGenerator::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let party = strong_party();

    let mut dungeon = generator
        .generate(config.theme("Abandoned Sewers").unwrap(), &party.levels(), &mut rng)
        .unwrap();
    assert_eq!(dungeon.state(), DungeonState::InProgress);
    let total_rooms = dungeon.room_count();

    let mut rooms_won = 0;
    let mut total_xp = 0;
    let mut total_loot = 0;
    loop {
        let outcome = resolve_room(&mut dungeon, &party, &mut rng).unwrap();
        assert!(outcome.victory, "room {} lost", dungeon.current_depth());
        rooms_won += 1;
        total_xp += outcome.total_xp();
        total_loot += outcome.loot.len();

        let room = dungeon.current_room().unwrap();
        assert!(room.completed);
        assert!(room.enemies.iter().all(|e| !e.is_alive()));

        if dungeon.completed {
            break;
        }
        assert!(dungeon.advance());
    }

    assert_eq!(rooms_won, total_rooms);
    assert_eq!(dungeon.state(), DungeonState::Completed);
    assert_eq!(dungeon.remaining_rooms(), 0);
    assert!(dungeon.current_room().unwrap().is_boss_room);
    // One loot per standard room, three from the boss
    assert_eq!(total_loot, (total_rooms - 1) + 3);
    // Every cat earns at least 30 per standard room and 60 from the boss
    assert!(total_xp >= 2 * (30 * (total_rooms as u32 - 1) + 60));
}

#[test]
fn test_defeat_leaves_room_open() {
    let config = GameConfig::default();
    let generator = DungeonGenerator::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let party = weak_party();

    let mut dungeon = generator
        .generate(&config.themes[2], &[10, 10], &mut rng)
        .unwrap();
    let outcome = resolve_room(&mut dungeon, &party, &mut rng).unwrap();

    assert!(!outcome.victory);
    assert!(!dungeon.current_room().unwrap().completed);
    assert!(!dungeon.completed);
    assert!(!dungeon.advance());
    assert_eq!(outcome.damage_taken.len(), 1);
    assert!(outcome.damage_taken[0].remaining_health >= 1);
    assert!(dungeon.current_room().unwrap().enemies.iter().all(|e| e.is_alive()));
}

#[test]
fn test_boss_room_contents() {
    let config = GameConfig::default();
    let generator = DungeonGenerator::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let dungeon = generator
        .generate(config.theme("Ruined Factory").unwrap(), &[4, 5, 6], &mut rng)
        .unwrap();
    let boss_room = dungeon.boss_room().unwrap();
    let boss = &boss_room.enemies[0];

    assert_eq!(dungeon.party_level, 5);
    assert_eq!(boss.level, 8);
    assert_eq!(boss.rarity, Rarity::Boss);
    assert_eq!(boss.attributes.current_health, boss.attributes.max_health);
    assert!(boss.phases.unwrap_or(0) >= 1);
    assert!(boss_room.environment_modifier.is_none());
}

#[test]
fn test_hazard_checks_along_the_way() {
    let config = GameConfig::default();
    let generator = DungeonGenerator::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    let dungeon = generator
        .generate(&config.themes[0], &[3], &mut rng)
        .unwrap();
    // Lowest draw at depth 1: difficulty 12
    let mut low = ScriptedRandom::constant(0.0);
    let check = dungeon.check_current_room(12, &mut low).unwrap();
    assert_eq!(check.difficulty, 12);
    assert!(check.passed);
    assert_eq!(
        Some(check.stat),
        dungeon.rooms[0].environment_modifier.as_ref().map(|m| m.affected_stat)
    );
}

#[test]
fn test_finished_dungeon_rejects_more_fights() {
    let config = GameConfig::default();
    let generator = DungeonGenerator::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let party = strong_party();

    let mut dungeon = generator
        .generate(&config.themes[1], &party.levels(), &mut rng)
        .unwrap();
    while !dungeon.completed {
        resolve_room(&mut dungeon, &party, &mut rng).unwrap();
        dungeon.advance();
    }

    let result = resolve_room(&mut dungeon, &party, &mut rng);
    assert!(matches!(result, Err(StraysError::InvalidInput(_))));
}
