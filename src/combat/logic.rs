//! Battle resolution.
//!
//! A battle is one comparison: party strength times a luck factor against
//! the summed strength of the enemy group. These functions never touch the
//! cat roster or resource ledger; they return outcomes for the caller to
//! apply.

use super::types::{
    Battle, BattleContext, BattleOutcome, Casualty, DamageTaken, EncounterState, Party, XpAward,
};
use crate::core::constants::*;
use crate::core::random::{random_int, uniform, RandomSource};
use crate::dungeon::Dungeon;
use crate::enemies::Enemy;
use crate::error::{Result, StraysError};
use tracing::info;

/// Summed strength score of an enemy group.
pub fn enemy_strength(enemies: &[Enemy]) -> u32 {
    enemies
        .iter()
        .fold(0u32, |acc, e| acc.saturating_add(e.strength_score()))
}

/// XP each participant earns for clearing a dungeon room.
pub fn dungeon_room_xp(is_boss_room: bool, rng: &mut impl RandomSource) -> u32 {
    let room_bonus = if is_boss_room {
        DUNGEON_XP_BOSS_ROOM_BONUS
    } else {
        DUNGEON_XP_ROOM_BONUS
    };
    DUNGEON_XP_BASE + room_bonus + random_int(0, DUNGEON_XP_VARIANCE_MAX, rng)
}

/// Resolves a battle between `party` and `enemies`.
///
/// Fails with `EmptyEncounter` when either side is empty. Draw order is
/// fixed (luck factor, then per-participant draws in party order) so the
/// same random sequence always gives the same outcome.
pub fn resolve_battle(
    party: &Party,
    enemies: &[Enemy],
    context: BattleContext,
    rng: &mut impl RandomSource,
) -> Result<BattleOutcome> {
    if party.is_empty() {
        return Err(StraysError::empty("battle has no participants"));
    }
    if enemies.is_empty() {
        return Err(StraysError::empty("battle has no enemies"));
    }

    let aggregate = party.aggregate();
    let player_strength = aggregate.strength_score();
    let enemy_strength = enemy_strength(enemies);
    let random_factor = uniform(LUCK_FACTOR_MIN, LUCK_FACTOR_MAX, rng);
    let victory = player_strength as f64 * random_factor >= enemy_strength as f64;

    let mut outcome = BattleOutcome {
        state: if victory {
            EncounterState::Victory
        } else {
            EncounterState::Defeat
        },
        victory,
        player_strength,
        enemy_strength,
        random_factor,
        loot: Vec::new(),
        rewards: None,
        xp_awards: Vec::new(),
        damage_taken: Vec::new(),
        casualties: Vec::new(),
    };

    if victory {
        match context {
            BattleContext::DungeonRoom { is_boss_room, loot } => {
                outcome.loot = loot;
                for p in &party.participants {
                    outcome.xp_awards.push(XpAward {
                        participant_id: p.id,
                        xp: dungeon_room_xp(is_boss_room, rng),
                    });
                }
            }
            BattleContext::Standalone { rewards } => {
                let share = (rewards.xp / aggregate.count).max(1);
                outcome.rewards = Some(rewards);
                outcome.xp_awards = party
                    .participants
                    .iter()
                    .map(|p| XpAward {
                        participant_id: p.id,
                        xp: share,
                    })
                    .collect();
            }
        }
    } else {
        for p in &party.participants {
            let ratio = uniform(DEFEAT_DAMAGE_MIN_RATIO, DEFEAT_DAMAGE_MAX_RATIO, rng);
            let damage = (p.max_health as f64 * ratio).floor() as u32;
            let remaining_health = p
                .current_health
                .saturating_sub(damage)
                .max(MIN_HEALTH_AFTER_DEFEAT);

            outcome.damage_taken.push(DamageTaken {
                participant_id: p.id,
                damage,
                remaining_health,
            });

            if (remaining_health as f64) < p.max_health as f64 * CASUALTY_HEALTH_RATIO {
                outcome.casualties.push(Casualty {
                    participant_id: p.id,
                    remaining_health,
                    max_health: p.max_health,
                });
            }
        }
    }

    info!(
        victory,
        player_strength,
        enemy_strength,
        random_factor,
        casualties = outcome.casualties.len(),
        "resolved battle"
    );

    Ok(outcome)
}

/// Marks every enemy in a won fight as defeated.
fn defeat_all(enemies: &mut [Enemy]) {
    for enemy in enemies {
        enemy.attributes.current_health = 0;
    }
}

/// Fights a standalone battle, driving its state to Victory or Defeat.
pub fn fight_battle(
    battle: &mut Battle,
    party: &Party,
    rng: &mut impl RandomSource,
) -> Result<BattleOutcome> {
    let in_progress = battle.state.transition(EncounterState::InProgress)?;
    let context = BattleContext::Standalone {
        rewards: battle.rewards,
    };
    let outcome = resolve_battle(party, &battle.enemies, context, rng)?;

    battle.state = in_progress.transition(outcome.state)?;
    if outcome.victory {
        defeat_all(&mut battle.enemies);
    }
    Ok(outcome)
}

/// Fights the dungeon's current room.
///
/// A win completes the room, and the dungeon too when it was the boss
/// room. The caller moves on with `Dungeon::advance`.
pub fn resolve_room(
    dungeon: &mut Dungeon,
    party: &Party,
    rng: &mut impl RandomSource,
) -> Result<BattleOutcome> {
    if dungeon.completed {
        return Err(StraysError::input(format!(
            "dungeon '{}' is already completed",
            dungeon.name
        )));
    }
    let is_final = dungeon.is_final_room();
    let index = dungeon.current_room_index;
    let room = dungeon
        .current_room_mut()
        .ok_or_else(|| StraysError::input(format!("no room at index {index}")))?;
    if room.completed {
        return Err(StraysError::input(format!(
            "room '{}' is already completed",
            room.name
        )));
    }

    let context = BattleContext::DungeonRoom {
        is_boss_room: room.is_boss_room,
        loot: room.loot.clone(),
    };
    let outcome = resolve_battle(party, &room.enemies, context, rng)?;

    if outcome.victory {
        room.completed = true;
        defeat_all(&mut room.enemies);
        if is_final {
            dungeon.completed = true;
        }
    }

    Ok(outcome)
}
