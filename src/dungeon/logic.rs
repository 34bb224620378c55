//! Dungeon progression and environment stat checks.

use super::types::{Dungeon, EnvironmentModifier};
use crate::character::StatKind;
use crate::core::constants::{STAT_CHECK_BASE, STAT_CHECK_PER_DEPTH, STAT_CHECK_VARIANCE_MAX};
use crate::core::random::{random_int, RandomSource};
use serde::{Deserialize, Serialize};

/// Level enemies are scaled to: the rounded-up mean of the selected
/// cats' levels, or 1 when nobody is selected.
pub fn average_party_level(levels: &[u32]) -> u32 {
    if levels.is_empty() {
        return 1;
    }
    let total: u64 = levels.iter().map(|&l| l as u64).sum();
    let count = levels.len() as u64;
    (total.div_ceil(count) as u32).max(1)
}

/// Result of testing one stat against a room hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCheck {
    pub stat: StatKind,
    pub value: u32,
    pub difficulty: u32,
    pub passed: bool,
}

/// Difficulty before the random component. `depth` is 1 for the first room.
pub fn stat_check_difficulty(depth: u32) -> u32 {
    STAT_CHECK_BASE.saturating_add(depth.saturating_mul(STAT_CHECK_PER_DEPTH))
}

/// Tests `value` (the participant's `modifier.affected_stat`) against the
/// hazard at `depth`.
pub fn stat_check(
    modifier: &EnvironmentModifier,
    value: u32,
    depth: u32,
    rng: &mut impl RandomSource,
) -> StatCheck {
    let difficulty =
        stat_check_difficulty(depth).saturating_add(random_int(0, STAT_CHECK_VARIANCE_MAX, rng));
    StatCheck {
        stat: modifier.affected_stat,
        value,
        difficulty,
        passed: value >= difficulty,
    }
}

impl Dungeon {
    /// Moves to the next room once the current one is completed.
    /// Returns whether the index moved.
    pub fn advance(&mut self) -> bool {
        let cleared = self.current_room().map(|r| r.completed).unwrap_or(false);
        if !cleared || self.is_final_room() {
            return false;
        }
        self.current_room_index += 1;
        true
    }

    /// Depth of the current room, starting at 1.
    pub fn current_depth(&self) -> u32 {
        (self.current_room_index as u32).saturating_add(1)
    }

    /// Runs the current room's hazard check, if it has one.
    pub fn check_current_room(&self, value: u32, rng: &mut impl RandomSource) -> Option<StatCheck> {
        let modifier = self.current_room()?.environment_modifier.as_ref()?;
        Some(stat_check(modifier, value, self.current_depth(), rng))
    }
}
