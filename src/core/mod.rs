//! Core engine types: seats, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
