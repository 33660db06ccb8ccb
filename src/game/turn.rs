//! Turn phases and per-turn results.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::players::HarvestReport;

/// Where the active player is within a turn.
///
/// A turn moves strictly forward through these; a truncated turn jumps
/// straight to `TurnComplete`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Step 1: plant from the hand.
    #[default]
    AwaitingPlantFromHand,
    /// Step 2: draw the face-up batch and offer it for trade.
    AwaitingFaceUpDraw,
    /// Step 3: plant the kept face-up cards.
    AwaitingPlantFromDraw,
    /// Step 4: draw replacement cards into the hand.
    AwaitingReplenish,
    TurnComplete,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// All phases ran; the next seat is up.
    Completed,
    /// The deck came up short. Normal end of the game, not an error.
    Truncated,
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub seat: PlayerId,
    pub round_number: u32,
    pub outcome: TurnOutcome,
    /// Harvests in the order they happened.
    pub harvests: Vec<HarvestReport>,
}

impl TurnReport {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.outcome == TurnOutcome::Truncated
    }

    /// Points the active player scored this turn.
    #[must_use]
    pub fn points(&self) -> usize {
        self.harvests.iter().map(|h| h.points).sum()
    }
}
