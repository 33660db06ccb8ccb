//! Game configuration.
//!
//! Everything a game needs to know before the first deal: the card
//! catalog, draw sizes, the reshuffle limit that ends the game, and the
//! RNG seed. Defaults reproduce the standard rules.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::cards::Catalog;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Card types and copy counts (default: the standard catalog).
    pub catalog: Catalog,

    /// Cards dealt to each player at setup (default: 5).
    pub hand_size: usize,

    /// Face-up cards drawn mid-turn (default: 2).
    pub face_up_draw: usize,

    /// Cards drawn into the hand at the end of a turn (default: 3).
    pub replenish: usize,

    /// Completed reshuffles after which an empty draw pile ends the game
    /// (default: 2, i.e. the third pass through the deck is the last).
    /// The deck refuses to reshuffle beyond this.
    pub reshuffle_limit: u32,

    /// Seed for the game's single RNG stream.
    /// Same seed and strategies produce an identical game.
    pub seed: u64,

    /// Run card-conservation validation after every turn phase.
    /// Off by default; test harnesses switch it on.
    pub validate_each_phase: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::standard(),
            hand_size: 5,
            face_up_draw: 2,
            replenish: 3,
            reshuffle_limit: 2,
            seed: 42,
            validate_each_phase: false,
        }
    }
}

impl GameConfig {
    /// Create a config with the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the initial hand size.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the face-up draw size.
    pub fn with_face_up_draw(mut self, count: usize) -> Self {
        self.face_up_draw = count;
        self
    }

    /// Set the replenish draw size.
    pub fn with_replenish(mut self, count: usize) -> Self {
        self.replenish = count;
        self
    }

    /// Set the reshuffle limit.
    pub fn with_reshuffle_limit(mut self, limit: u32) -> Self {
        self.reshuffle_limit = limit;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Toggle per-phase validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_each_phase = enabled;
        self
    }

    /// Reject configurations the turn loop cannot make progress with.
    pub fn validate(&self) -> Result<()> {
        if self.face_up_draw == 0 || self.replenish == 0 {
            return Err(GameError::InvalidConfig(
                "face-up and replenish draws must take at least one card".into(),
            ));
        }
        Ok(())
    }
}
