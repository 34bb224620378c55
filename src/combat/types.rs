use crate::character::{DerivedAttributes, StatBlock, StatKind};
use crate::core::constants::{
    PLAYER_STRENGTH_PER_PARTICIPANT, REWARD_FOOD_PER_ENEMY, REWARD_MATERIALS_PER_ENEMY,
    REWARD_MEDICINE_PER_ENEMY, REWARD_XP_PER_LEVEL,
};
use crate::dungeon::LootItem;
use crate::enemies::Enemy;
use crate::error::{Result, StraysError};
use serde::{Deserialize, Serialize};

/// A cat taking part in a fight, as read from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    pub level: u32,
    pub strength: u32,
    pub vitality: u32,
    pub physical_attack: u32,
    pub current_health: u32,
    pub max_health: u32,
}

impl Participant {
    /// Snapshot of a cat from its stat block, at `current_health`.
    pub fn from_stats(
        id: u64,
        name: impl Into<String>,
        level: u32,
        stats: &StatBlock,
        current_health: u32,
    ) -> Self {
        let derived = DerivedAttributes::from_stats(stats);
        Self {
            id,
            name: name.into(),
            level,
            strength: stats.get(StatKind::Strength),
            vitality: stats.get(StatKind::Vitality),
            physical_attack: derived.physical_attack,
            current_health: current_health.min(derived.max_health),
            max_health: derived.max_health,
        }
    }
}

/// Summed party stats used as the player side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartyAggregate {
    pub strength: u32,
    pub vitality: u32,
    pub physical_attack: u32,
    pub count: u32,
}

impl PartyAggregate {
    pub fn strength_score(&self) -> u32 {
        self.strength
            .saturating_add(self.vitality)
            .saturating_add(self.physical_attack)
            .saturating_add(PLAYER_STRENGTH_PER_PARTICIPANT.saturating_mul(self.count))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Party {
    pub participants: Vec<Participant>,
}

impl Party {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn aggregate(&self) -> PartyAggregate {
        self.participants
            .iter()
            .fold(PartyAggregate::default(), |mut acc, p| {
                acc.strength = acc.strength.saturating_add(p.strength);
                acc.vitality = acc.vitality.saturating_add(p.vitality);
                acc.physical_attack = acc.physical_attack.saturating_add(p.physical_attack);
                acc.count = acc.count.saturating_add(1);
                acc
            })
    }

    pub fn levels(&self) -> Vec<u32> {
        self.participants.iter().map(|p| p.level).collect()
    }
}

/// Resources and XP a standalone battle pays out on victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleRewards {
    pub food: u32,
    pub materials: u32,
    pub medicine: u32,
    pub xp: u32,
}

impl BattleRewards {
    /// Sums the per-enemy reward formula over a group.
    pub fn for_enemies(enemies: &[Enemy]) -> Self {
        enemies.iter().fold(Self::default(), |mut acc, enemy| {
            let mult = enemy.rarity.reward_multiplier();
            acc.food = acc.food.saturating_add((REWARD_FOOD_PER_ENEMY * mult).floor() as u32);
            acc.materials = acc
                .materials
                .saturating_add((REWARD_MATERIALS_PER_ENEMY * mult).floor() as u32);
            acc.medicine = acc
                .medicine
                .saturating_add((REWARD_MEDICINE_PER_ENEMY * mult).floor() as u32);
            acc.xp = acc
                .xp
                .saturating_add((REWARD_XP_PER_LEVEL * enemy.level as f64 * mult).floor() as u32);
            acc
        })
    }
}

/// Lifecycle of one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterState {
    NotStarted,
    InProgress,
    Victory,
    Defeat,
}

impl EncounterState {
    pub fn is_finished(&self) -> bool {
        matches!(self, EncounterState::Victory | EncounterState::Defeat)
    }

    /// Moves to `next`, rejecting anything but
    /// NotStarted -> InProgress -> Victory | Defeat.
    pub fn transition(self, next: EncounterState) -> Result<EncounterState> {
        use EncounterState::*;
        match (self, next) {
            (NotStarted, InProgress) | (InProgress, Victory) | (InProgress, Defeat) => Ok(next),
            _ => Err(StraysError::input(format!(
                "cannot move encounter from {self:?} to {next:?}"
            ))),
        }
    }
}

/// A standalone (non-dungeon) fight and its precomputed payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub enemies: Vec<Enemy>,
    pub rewards: BattleRewards,
    pub state: EncounterState,
}

impl Battle {
    pub fn new(enemies: Vec<Enemy>) -> Self {
        let rewards = BattleRewards::for_enemies(&enemies);
        Self {
            enemies,
            rewards,
            state: EncounterState::NotStarted,
        }
    }
}

/// Where a battle is being fought. Decides loot and XP rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleContext {
    Standalone { rewards: BattleRewards },
    DungeonRoom { is_boss_room: bool, loot: Vec<LootItem> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    pub participant_id: u64,
    pub xp: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTaken {
    pub participant_id: u64,
    pub damage: u32,
    pub remaining_health: u32,
}

/// A participant left badly hurt by a defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casualty {
    pub participant_id: u64,
    pub remaining_health: u32,
    pub max_health: u32,
}

/// Everything the caller needs to apply a battle result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub state: EncounterState,
    pub victory: bool,
    pub player_strength: u32,
    pub enemy_strength: u32,
    pub random_factor: f64,
    pub loot: Vec<LootItem>,
    /// Standalone victories only.
    pub rewards: Option<BattleRewards>,
    pub xp_awards: Vec<XpAward>,
    pub damage_taken: Vec<DamageTaken>,
    pub casualties: Vec<Casualty>,
}

impl BattleOutcome {
    pub fn total_xp(&self) -> u32 {
        self.xp_awards.iter().map(|a| a.xp).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{Appearance, EnemyType, Rarity};

    fn enemy(level: u32, rarity: Rarity) -> Enemy {
        let stats = StatBlock::uniform(5);
        Enemy {
            id: 0,
            name: "Rat".to_string(),
            enemy_type: EnemyType::MutantRat,
            level,
            rarity,
            appearance: Appearance::default(),
            stats,
            attributes: DerivedAttributes::from_stats(&stats),
            abilities: Vec::new(),
            faction: None,
            phases: None,
            current_phase: None,
        }
    }

    fn cat(id: u64, str: u32, vit: u32, phys: u32) -> Participant {
        Participant {
            id,
            name: format!("Cat {id}"),
            level: 1,
            strength: str,
            vitality: vit,
            physical_attack: phys,
            current_health: 100,
            max_health: 100,
        }
    }

    #[test]
    fn test_party_aggregate() {
        let party = Party::new(vec![cat(1, 12, 8, 5), cat(2, 8, 7, 5)]);
        let agg = party.aggregate();
        assert_eq!(agg.strength, 20);
        assert_eq!(agg.vitality, 15);
        assert_eq!(agg.physical_attack, 10);
        assert_eq!(agg.count, 2);
        assert_eq!(agg.strength_score(), 65);
    }

    #[test]
    fn test_aggregate_saturates() {
        let party = Party::new(vec![cat(1, u32::MAX, 5, 5), cat(2, 10, 5, 5)]);
        let agg = party.aggregate();
        assert_eq!(agg.strength, u32::MAX);
        assert_eq!(agg.strength_score(), u32::MAX);

        let rewards = BattleRewards::for_enemies(&[
            enemy(u32::MAX, Rarity::Boss),
            enemy(u32::MAX, Rarity::Boss),
        ]);
        assert_eq!(rewards.xp, u32::MAX);
    }

    #[test]
    fn test_participant_from_stats() {
        let stats = StatBlock::uniform(10);
        let p = Participant::from_stats(7, "Whiskers", 3, &stats, 999);
        assert_eq!(p.strength, 10);
        assert_eq!(p.vitality, 10);
        assert_eq!(p.physical_attack, 15);
        assert_eq!(p.max_health, 150);
        assert_eq!(p.current_health, 150);
    }

    #[test]
    fn test_rewards_per_rarity() {
        let rewards = BattleRewards::for_enemies(&[enemy(2, Rarity::Common)]);
        assert_eq!(
            rewards,
            BattleRewards {
                food: 5,
                materials: 3,
                medicine: 1,
                xp: 20
            }
        );

        let rewards = BattleRewards::for_enemies(&[enemy(3, Rarity::Uncommon)]);
        // 7.5, 4.5, 1.5, 45
        assert_eq!(rewards.food, 7);
        assert_eq!(rewards.materials, 4);
        assert_eq!(rewards.medicine, 1);
        assert_eq!(rewards.xp, 45);
    }

    #[test]
    fn test_rewards_sum_over_group() {
        let rewards =
            BattleRewards::for_enemies(&[enemy(1, Rarity::Common), enemy(6, Rarity::Boss)]);
        assert_eq!(rewards.food, 5 + 25);
        assert_eq!(rewards.materials, 3 + 15);
        assert_eq!(rewards.medicine, 1 + 5);
        assert_eq!(rewards.xp, 10 + 300);
    }

    #[test]
    fn test_state_transitions() {
        let started = EncounterState::NotStarted
            .transition(EncounterState::InProgress)
            .unwrap();
        assert_eq!(
            started.transition(EncounterState::Victory).unwrap(),
            EncounterState::Victory
        );
        assert!(started.transition(EncounterState::Defeat).unwrap().is_finished());
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(EncounterState::NotStarted
            .transition(EncounterState::Victory)
            .is_err());
        assert!(EncounterState::Victory
            .transition(EncounterState::InProgress)
            .is_err());
        assert!(EncounterState::Defeat
            .transition(EncounterState::Victory)
            .is_err());
    }

    #[test]
    fn test_new_battle_precomputes_rewards() {
        let battle = Battle::new(vec![enemy(2, Rarity::Common), enemy(2, Rarity::Common)]);
        assert_eq!(battle.state, EncounterState::NotStarted);
        assert_eq!(battle.rewards.xp, 40);
        assert_eq!(battle.rewards.food, 10);
    }
}
