//! Strays - enemy, encounter and dungeon core for a stray-cat colony game.
//!
//! Generates enemies from rarity and type tables, groups them into
//! encounters, builds themed dungeons and resolves battles. Everything is
//! driven through [`core::random::RandomSource`] so a seeded RNG or a
//! scripted sequence reproduces any outcome.

pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod enemies;
pub mod error;

pub use error::{Result, StraysError};
