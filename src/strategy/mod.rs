//! Player strategies.
//!
//! A strategy is a pure decision policy: given a read-only view of its
//! player (and, for trading, of the table) it returns what to plant and
//! where. The engine depends only on the `Strategy` trait and never on
//! a concrete variant; games mix variants freely, one per seat.
//!
//! - `Autarky`: plants the oldest hand card, never trades

pub mod autarky;
pub mod view;

pub use autarky::Autarky;
pub use view::TableView;

use smallvec::SmallVec;

use crate::cards::Card;
use crate::players::Player;

/// Put `card` into field `field` (0 or 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planting {
    pub field: usize,
    pub card: Card,
}

impl Planting {
    #[must_use]
    pub fn new(field: usize, card: Card) -> Self {
        Self { field, card }
    }
}

/// Ordered plantings, applied first to last.
///
/// Most plans are one or two cards, so they stay inline.
pub type PlantingPlan = SmallVec<[Planting; 4]>;

/// Decision policy for one seat.
///
/// Implementations hold no per-player mutable state, so a single
/// instance can be shared (`Arc<dyn Strategy>`) between seats and games.
///
/// ## Contract
///
/// - `plant_from_hand` may only name cards in `player.hand()`, each copy
///   at most once. An empty plan is valid.
/// - `plant_from_trade` may only name cards in `cards`, same rules.
/// - Field indices must be 0 or 1.
///
/// A plan breaking these rules fails the game with
/// `GameError::InvalidStrategyDecision` before anything is planted.
pub trait Strategy: Send + Sync {
    /// Display name, used in logs.
    fn name(&self) -> &str;

    /// Which hand cards to plant this turn, in order.
    fn plant_from_hand(&self, player: &Player) -> PlantingPlan;

    /// Where to plant cards acquired outside the hand (the face-up draw).
    fn plant_from_trade(&self, player: &Player, cards: &[Card]) -> PlantingPlan;

    /// Trade the face-up cards with the table, returning the cards the
    /// player keeps. Must return a subset of `cards`; whatever is not
    /// kept is discarded.
    ///
    /// The default keeps everything: no trade happens.
    fn trade(&self, player: &Player, table: &TableView<'_>, cards: Vec<Card>) -> Vec<Card> {
        let _ = (player, table);
        cards
    }
}
