//! Integration test: Standalone encounters
//!
//! Builds groups through the encounter builder and resolves them with the
//! combat resolver, covering rewards, XP split and defeat damage.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strays::character::StatBlock;
use strays::combat::{fight_battle, resolve_battle, BattleContext, EncounterState, Participant, Party};
use strays::core::config::GameConfig;
use strays::core::random::ScriptedRandom;
use strays::enemies::{EncounterGroupBuilder, EnemyFactory, EnemyType, Rarity};
use strays::StraysError;

fn party_of(stat: u32, count: u64) -> Party {
    let stats = StatBlock::uniform(stat);
    Party::new(
        (1..=count)
            .map(|id| Participant::from_stats(id, format!("Cat {id}"), 3, &stats, u32::MAX))
            .collect(),
    )
}

#[test]
fn test_standalone_battle_victory_pays_rewards() {
    let config = GameConfig::default();
    let builder = EncounterGroupBuilder::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut battle = builder.build_battle(2, 3, false, false, &mut rng).unwrap();
    assert_eq!(battle.enemies.len(), 3);
    assert!(battle.rewards.xp >= 3 * 20);

    let party = party_of(150, 3);
    let outcome = fight_battle(&mut battle, &party, &mut rng).unwrap();

    assert!(outcome.victory);
    assert_eq!(battle.state, EncounterState::Victory);
    assert_eq!(outcome.rewards, Some(battle.rewards));
    assert!(outcome.loot.is_empty());
    let share = (battle.rewards.xp / 3).max(1);
    assert!(outcome.xp_awards.iter().all(|a| a.xp == share));
}

#[test]
fn test_boss_encounter_defeat() {
    let config = GameConfig::default();
    let builder = EncounterGroupBuilder::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    let mut battle = builder.build_battle(15, 2, false, true, &mut rng).unwrap();
    assert_eq!(battle.enemies[0].rarity, Rarity::Boss);
    assert_eq!(battle.enemies[0].level, 20);

    let party = party_of(5, 2);
    let outcome = fight_battle(&mut battle, &party, &mut rng).unwrap();

    assert!(!outcome.victory);
    assert_eq!(battle.state, EncounterState::Defeat);
    assert!(outcome.rewards.is_none());
    assert!(outcome.xp_awards.is_empty());
    assert_eq!(outcome.damage_taken.len(), 2);
    for hit in &outcome.damage_taken {
        let p = party
            .participants
            .iter()
            .find(|p| p.id == hit.participant_id)
            .unwrap();
        let low = (p.max_health as f64 * 0.2).floor() as u32;
        let high = (p.max_health as f64 * 0.4).floor() as u32;
        assert!(hit.damage >= low && hit.damage <= high);
        assert_eq!(hit.remaining_health, p.current_health - hit.damage);
    }
}

#[test]
fn test_reference_strength_comparison() {
    let config = GameConfig::default();
    let factory = EnemyFactory::new(&config);
    let mut rng = ScriptedRandom::constant(0.5);

    let enemy = factory
        .generate_at_level(1, EnemyType::MutantRat, Rarity::Common, &mut rng)
        .unwrap();
    let party = party_of(10, 2);
    let outcome = resolve_battle(
        &party,
        std::slice::from_ref(&enemy),
        BattleContext::Standalone {
            rewards: Default::default(),
        },
        &mut rng,
    )
    .unwrap();

    // STR 10, VIT 10, physicalAttack 15, per cat, plus 10 each
    assert_eq!(outcome.player_strength, 2 * (10 + 10 + 15 + 10));
    assert_eq!(outcome.enemy_strength, enemy.strength_score());
    assert!(outcome.victory);
    // Zero-XP rewards still give each cat one XP
    assert!(outcome.xp_awards.iter().all(|a| a.xp == 1));
}

#[test]
fn test_empty_group_cannot_be_fought() {
    let config = GameConfig::default();
    let builder = EncounterGroupBuilder::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    let mut battle = builder.build_battle(5, 0, true, false, &mut rng).unwrap();
    assert!(battle.enemies.is_empty());

    let result = fight_battle(&mut battle, &party_of(10, 1), &mut rng);
    assert!(matches!(result, Err(StraysError::EmptyEncounter(_))));
}

#[test]
fn test_negative_group_size_rejected() {
    let config = GameConfig::default();
    let builder = EncounterGroupBuilder::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(14);

    let result = builder.build_group(5, -1, false, true, &mut rng);
    assert!(matches!(result, Err(StraysError::InvalidInput(_))));
}
