//! Core engine types: RNG and match configuration.

pub mod config;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
