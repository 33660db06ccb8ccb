//! Engine error type.
//!
//! Deck exhaustion is not represented here: a short draw is the normal
//! end-of-supply signal and truncates the turn instead of failing it.

use thiserror::Error;

use super::player::PlayerId;

/// Errors surfaced by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card name outside the catalog.
    #[error("unknown card type: {0}")]
    UnknownCardType(String),

    /// A strategy asked for something the player cannot do.
    #[error("invalid strategy decision for {seat}: {reason}")]
    InvalidStrategyDecision {
        /// Seat whose strategy misbehaved.
        seat: PlayerId,
        /// What was wrong with the decision.
        reason: String,
    },

    /// Card conservation failed. Always an engine defect.
    #[error("invariant violation: {found} cards named {name}, expected {expected}")]
    InvariantViolation {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Malformed catalog or game configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, GameError>;
