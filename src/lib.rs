//! # bean-sim
//!
//! A bean-trading card game engine for evaluating automated player
//! strategies over many simulated games.
//!
//! ## Design Principles
//!
//! 1. **Card Conservation**: Every card is in exactly one zone (draw pile,
//!    discard pile, a hand, a field, a scored pile) at all times, and the
//!    per-name totals always match the catalog. `Game::validate_state`
//!    checks this; `GameConfig::validate_each_phase` checks it after every
//!    turn phase.
//!
//! 2. **Pluggable Strategies**: Players delegate every decision to a
//!    `Strategy` trait object. The engine never names a concrete variant.
//!
//! 3. **Configuration Over Convention**: The catalog, draw sizes and the
//!    reshuffle limit come from `GameConfig`, so tests run on tiny
//!    synthetic catalogs.
//!
//! 4. **Deterministic**: One seeded ChaCha8 stream per game; same seed and
//!    strategies replay the same game.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Card values and the catalog
//! - `zones`: Deck (draw/discard) and fields
//! - `players`: Hands, planting, harvesting
//! - `strategy`: Strategy trait and the `Autarky` reference policy
//! - `game`: Turn loop, termination, validation

pub mod core;
pub mod cards;
pub mod zones;
pub mod players;
pub mod strategy;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, GameRngState, PlayerId, Result};

pub use crate::cards::{Card, Catalog, CatalogEntry};

pub use crate::zones::{Deck, DeckCheckpoint, Field, Harvest};

pub use crate::players::{HarvestReport, Player, FIELD_COUNT};

pub use crate::strategy::{Autarky, Planting, PlantingPlan, Strategy, TableView};

pub use crate::game::{Game, TurnOutcome, TurnPhase, TurnReport};
