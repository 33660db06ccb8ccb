//! The shared draw and discard piles.
//!
//! Every card that is not held by a player lives in exactly one of the
//! two piles. Drawing from an empty draw pile shuffles the discard pile
//! into a fresh draw pile and counts a completed reshuffle; the game
//! ends on the reshuffle count, not on a card count.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, Catalog};
use crate::core::error::{GameError, Result};
use crate::core::rng::{GameRng, GameRngState};

/// Draw pile, discard pile and the game's RNG stream.
///
/// ## Usage
///
/// ```
/// use bean_sim::cards::Catalog;
/// use bean_sim::core::GameRng;
/// use bean_sim::zones::Deck;
///
/// let mut deck = Deck::new(&Catalog::standard(), GameRng::new(42));
/// assert_eq!(deck.draw_len(), 124);
///
/// let hand = deck.draw(5);
/// assert_eq!(hand.len(), 5);
///
/// deck.discard(hand);
/// assert_eq!(deck.discard_len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Front is the next card drawn.
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    reshuffles: u32,
    reshuffle_limit: u32,
    rng: GameRng,
}

impl Deck {
    /// Shuffle the catalog's full supply into a new draw pile.
    #[must_use]
    pub fn new(catalog: &Catalog, mut rng: GameRng) -> Self {
        let mut supply = catalog.build_supply();
        rng.shuffle(&mut supply);
        Self::from_piles(supply, Vec::new(), rng)
    }

    /// Build a deck from explicit piles, no shuffling.
    ///
    /// `draw_pile[0]` is drawn first.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw_pile: draw_pile.into(),
            discard_pile,
            reshuffles: 0,
            reshuffle_limit: u32::MAX,
            rng,
        }
    }

    /// Stop reshuffling once `limit` reshuffles have completed.
    #[must_use]
    pub fn with_reshuffle_limit(mut self, limit: u32) -> Self {
        self.reshuffle_limit = limit;
        self
    }

    /// Draw up to `n` cards from the front of the draw pile.
    ///
    /// Reshuffles the discard pile whenever the draw pile runs out.
    /// Returns fewer than `n` cards only when nothing is left outside
    /// play, or when the reshuffle limit has been reached.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);

        while drawn.len() < n {
            if self.draw_pile.is_empty() && !self.reshuffle() {
                break;
            }
            match self.draw_pile.pop_front() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }

        if drawn.len() < n {
            debug!(
                wanted = n,
                got = drawn.len(),
                reshuffles = self.reshuffles,
                "short draw"
            );
        } else {
            trace!(count = n, remaining = self.draw_pile.len(), "drew cards");
        }

        drawn
    }

    /// Put cards on the discard pile, in order.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard_pile.extend(cards);
    }

    /// Put a single card on the discard pile.
    pub fn discard_card(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    fn reshuffle(&mut self) -> bool {
        if !self.can_reshuffle() {
            return false;
        }

        let mut cards = std::mem::take(&mut self.discard_pile);
        self.rng.shuffle(&mut cards);
        self.draw_pile.extend(cards);
        self.reshuffles += 1;

        debug!(
            reshuffles = self.reshuffles,
            cards = self.draw_pile.len(),
            "reshuffled discard pile"
        );
        true
    }

    /// Whether an empty draw pile would be refilled on the next draw.
    #[must_use]
    pub fn can_reshuffle(&self) -> bool {
        !self.discard_pile.is_empty() && self.reshuffles < self.reshuffle_limit
    }

    /// Completed reshuffle cycles.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    #[must_use]
    pub fn reshuffle_limit(&self) -> u32 {
        self.reshuffle_limit
    }

    #[must_use]
    pub fn draw_pile(&self) -> &VecDeque<Card> {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot the piles, reshuffle count and RNG position.
    #[must_use]
    pub fn checkpoint(&self) -> DeckCheckpoint {
        DeckCheckpoint {
            draw_pile: self.draw_pile.iter().map(|c| c.name().to_string()).collect(),
            discard_pile: self.discard_pile.iter().map(|c| c.name().to_string()).collect(),
            reshuffles: self.reshuffles,
            reshuffle_limit: self.reshuffle_limit,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a deck from a checkpoint. Later draws and reshuffles match
    /// the deck the checkpoint was taken from.
    pub fn restore(checkpoint: &DeckCheckpoint, catalog: &Catalog) -> Result<Self> {
        if checkpoint.reshuffles > checkpoint.reshuffle_limit {
            return Err(GameError::InvalidConfig(format!(
                "checkpoint has {} reshuffles, limit {}",
                checkpoint.reshuffles, checkpoint.reshuffle_limit
            )));
        }

        let cards = |names: &[String]| -> Result<Vec<Card>> {
            names.iter().map(|n| catalog.card(n)).collect()
        };
        let mut deck = Self::from_piles(
            cards(&checkpoint.draw_pile)?,
            cards(&checkpoint.discard_pile)?,
            GameRng::from_state(&checkpoint.rng),
        )
        .with_reshuffle_limit(checkpoint.reshuffle_limit);
        deck.reshuffles = checkpoint.reshuffles;
        Ok(deck)
    }
}

/// Serializable deck state. Cards are stored by name and resolved
/// against a catalog on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCheckpoint {
    /// Front first.
    pub draw_pile: Vec<String>,
    pub discard_pile: Vec<String>,
    pub reshuffles: u32,
    pub reshuffle_limit: u32,
    pub rng: GameRngState,
}
