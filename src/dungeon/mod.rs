//! Themed multi-room dungeons ending in a boss.

#![allow(unused_imports)]

pub mod data;
pub mod generation;
pub mod logic;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use types::*;
