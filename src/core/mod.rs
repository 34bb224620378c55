//! Shared configuration, constants and random draws.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod random;

pub use config::*;
pub use constants::*;
pub use random::*;
