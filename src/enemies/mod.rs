//! Enemy types, rarity tables, generation and encounter groups.

#![allow(unused_imports)]

pub mod data;
pub mod generation;
pub mod groups;
pub mod names;
pub mod types;

pub use generation::*;
pub use groups::*;
pub use types::*;
