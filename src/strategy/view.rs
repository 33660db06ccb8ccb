//! Read-only view of the table handed to `Strategy::trade`.

use crate::core::player::PlayerId;
use crate::players::Player;
use crate::zones::Deck;

/// Game-level context visible to every seat.
///
/// Borrows the game, so it cannot outlive the decision it is built for.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    /// Round number (starts at 1).
    pub round_number: u32,
    /// Whose turn it is.
    pub active_seat: PlayerId,
    /// Every player, in seat order.
    pub players: &'a [Player],
    deck: &'a Deck,
}

impl<'a> TableView<'a> {
    pub(crate) fn new(
        round_number: u32,
        active_seat: PlayerId,
        players: &'a [Player],
        deck: &'a Deck,
    ) -> Self {
        Self {
            round_number,
            active_seat,
            players,
            deck,
        }
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.deck.draw_len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.deck.discard_len()
    }

    /// Completed reshuffle cycles.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.deck.reshuffles()
    }

    /// Players other than the active one.
    pub fn opponents(&self) -> impl Iterator<Item = &'a Player> {
        let active = self.active_seat;
        self.players.iter().filter(move |p| p.seat() != active)
    }
}
