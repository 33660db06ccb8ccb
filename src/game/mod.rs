//! Game driver.
//!
//! - `Game`: deck + seats, turn loop, termination predicate
//! - `TurnPhase` / `TurnReport`: the per-turn state machine and its result
//! - `validation`: card-conservation checks

#[allow(clippy::module_inception)]
mod game;
pub mod turn;
pub mod validation;

pub use game::Game;
pub use turn::{TurnOutcome, TurnPhase, TurnReport};
pub use validation::{card_counts, check_conservation};
