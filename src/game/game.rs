//! The game driver: deal, turn loop, termination, validation.

use std::sync::Arc;

use tracing::{debug, debug_span, info};

use super::turn::{TurnOutcome, TurnPhase, TurnReport};
use super::validation::check_conservation;
use crate::cards::Card;
use crate::core::error::{GameError, Result};
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::players::{HarvestReport, Player};
use crate::strategy::{Strategy, TableView};
use crate::zones::Deck;

/// One simulated game.
///
/// Owns the deck and the players in seat order. Games share nothing, so
/// a batch driver can run many of them on separate threads.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use bean_sim::game::Game;
/// use bean_sim::strategy::{Autarky, Strategy};
///
/// let strategies = vec![Arc::new(Autarky) as Arc<dyn Strategy>; 3];
/// let mut game = Game::new(strategies, 42).unwrap();
///
/// let scores = game.run().unwrap();
/// assert_eq!(scores.len(), 3);
/// assert!(game.validate_state(&[]).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    deck: Deck,
    players: Vec<Player>,
    active: PlayerId,
    round_number: u32,
    turns_played: u32,
    phase: TurnPhase,
    truncated: bool,
}

impl Game {
    /// Standard rules, one seat per strategy, shuffled with `seed`.
    pub fn new(strategies: Vec<Arc<dyn Strategy>>, seed: u64) -> Result<Self> {
        Self::with_config(GameConfig::default().with_seed(seed), strategies)
    }

    /// Build a game and deal every player's opening hand.
    ///
    /// Hands are dealt seat by seat. A catalog too small to fill every
    /// hand deals short hands rather than failing.
    pub fn with_config(config: GameConfig, strategies: Vec<Arc<dyn Strategy>>) -> Result<Self> {
        config.validate()?;
        if strategies.is_empty() {
            return Err(GameError::InvalidConfig("a game needs at least one player".into()));
        }
        if strategies.len() > usize::from(u8::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "{} players, at most 255 supported",
                strategies.len()
            )));
        }

        let mut deck = Deck::new(&config.catalog, GameRng::new(config.seed))
            .with_reshuffle_limit(config.reshuffle_limit);

        let mut players: Vec<Player> = PlayerId::all(strategies.len())
            .zip(strategies)
            .map(|(seat, strategy)| Player::new(seat, strategy))
            .collect();

        for player in &mut players {
            player.take_into_hand(deck.draw(config.hand_size));
        }

        debug!(
            players = players.len(),
            seed = config.seed,
            draw_pile = deck.draw_len(),
            "dealt opening hands"
        );

        Ok(Self {
            config,
            deck,
            players,
            active: PlayerId::new(0),
            round_number: 1,
            turns_played: 0,
            phase: TurnPhase::default(),
            truncated: false,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Seat whose turn is next (or in progress).
    #[must_use]
    pub fn active_seat(&self) -> PlayerId {
        self.active
    }

    /// Starts at 1; increments each time turn order wraps.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True once a turn has been cut short by an exhausted deck.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Scores in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }

    /// Read-only table context as the active player sees it.
    #[must_use]
    pub fn table_view(&self) -> TableView<'_> {
        TableView::new(self.round_number, self.active, &self.players, &self.deck)
    }

    /// The draw pile is empty and the deck has been reshuffled as many
    /// times as the rules allow (twice by default).
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.deck.draw_len() == 0 && self.deck.reshuffles() >= self.config.reshuffle_limit
    }

    // === Play ===

    /// Play turns until the game is over or a turn is truncated.
    ///
    /// Returns final scores in seat order.
    pub fn run(&mut self) -> Result<Vec<u32>> {
        while !self.game_over() && !self.truncated {
            self.turn()?;
        }

        let scores = self.scores();
        info!(
            rounds = self.round_number,
            turns = self.turns_played,
            reshuffles = self.deck.reshuffles(),
            truncated = self.truncated,
            ?scores,
            "game finished"
        );
        Ok(scores)
    }

    /// Play one full turn for the active seat.
    pub fn turn(&mut self) -> Result<TurnReport> {
        let seat = self.active;
        let idx = seat.index();
        let _span = debug_span!("turn", round = self.round_number, seat = seat.0).entered();
        let mut harvests = Vec::new();

        // 1. Plant from hand
        self.phase = TurnPhase::AwaitingPlantFromHand;
        harvests.extend(self.players[idx].plant_from_hand(&mut self.deck)?);
        self.check_phase(&[])?;

        // 2. Face-up draw, offered for trade
        self.phase = TurnPhase::AwaitingFaceUpDraw;
        let face_up = self.deck.draw(self.config.face_up_draw);
        if face_up.len() < self.config.face_up_draw {
            return self.truncate(face_up, harvests);
        }
        let kept = self.offer_trade(idx, face_up)?;
        self.check_phase(&kept)?;

        // 3. Plant the kept face-up cards
        self.phase = TurnPhase::AwaitingPlantFromDraw;
        let (unplanted, reports) = self.players[idx].plant_from_draw(kept, &mut self.deck)?;
        harvests.extend(reports);
        if !unplanted.is_empty() {
            debug!(count = unplanted.len(), "discarding unplanted face-up cards");
            self.deck.discard(unplanted);
        }
        self.check_phase(&[])?;

        // 4. Replenish the hand
        self.phase = TurnPhase::AwaitingReplenish;
        let refill = self.deck.draw(self.config.replenish);
        if refill.len() < self.config.replenish {
            return self.truncate(refill, harvests);
        }
        self.players[idx].take_into_hand(refill);
        self.check_phase(&[])?;

        self.phase = TurnPhase::TurnComplete;
        let report = TurnReport {
            seat,
            round_number: self.round_number,
            outcome: TurnOutcome::Completed,
            harvests,
        };
        self.advance();
        Ok(report)
    }

    /// Check card conservation across the deck, every player, and any
    /// cards currently in transit between zones.
    pub fn validate_state(&self, in_transit: &[Card]) -> Result<()> {
        let cards = self
            .deck
            .draw_pile()
            .iter()
            .chain(self.deck.discard_pile())
            .chain(self.players.iter().flat_map(Player::cards))
            .chain(in_transit);
        check_conservation(&self.config.catalog, cards)
    }

    fn check_phase(&self, in_transit: &[Card]) -> Result<()> {
        if self.config.validate_each_phase {
            self.validate_state(in_transit)
        } else {
            Ok(())
        }
    }

    /// Let the active strategy trade the face-up cards. Cards it does not
    /// keep go to the discard pile.
    fn offer_trade(&mut self, idx: usize, offered: Vec<Card>) -> Result<Vec<Card>> {
        let kept = {
            let player = &self.players[idx];
            player
                .strategy()
                .trade(player, &self.table_view(), offered.clone())
        };

        let mut rest = offered.clone();
        for card in &kept {
            match rest.iter().position(|c| c == card) {
                Some(pos) => {
                    rest.swap_remove(pos);
                }
                None => {
                    self.deck.discard(offered);
                    return Err(GameError::InvalidStrategyDecision {
                        seat: self.active,
                        reason: format!("trade kept {card}, which was not offered"),
                    });
                }
            }
        }

        if !rest.is_empty() {
            debug!(count = rest.len(), "traded away face-up cards");
            self.deck.discard(rest);
        }
        Ok(kept)
    }

    fn truncate(&mut self, drawn: Vec<Card>, harvests: Vec<HarvestReport>) -> Result<TurnReport> {
        debug!(
            drawn = drawn.len(),
            reshuffles = self.deck.reshuffles(),
            "deck exhausted, truncating turn"
        );
        self.deck.discard(drawn);
        self.truncated = true;
        self.phase = TurnPhase::TurnComplete;
        self.check_phase(&[])?;

        Ok(TurnReport {
            seat: self.active,
            round_number: self.round_number,
            outcome: TurnOutcome::Truncated,
            harvests,
        })
    }

    fn advance(&mut self) {
        self.turns_played += 1;
        self.active = self.active.next(self.players.len());
        if self.active.index() == 0 {
            self.round_number += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Catalog, CatalogEntry};
    use crate::strategy::Autarky;

    fn autarkies(n: usize) -> Vec<Arc<dyn Strategy>> {
        (0..n).map(|_| Arc::new(Autarky) as Arc<dyn Strategy>).collect()
    }

    #[test]
    fn test_game_creation() {
        let game = Game::new(autarkies(4), 42).unwrap();

        assert_eq!(game.players().len(), 4);
        for (seat, player) in PlayerId::all(4).zip(game.players()) {
            assert_eq!(player.seat(), seat);
            assert_eq!(player.hand().len(), 5);
            assert_eq!(player.score(), 0);
        }
        assert_eq!(game.deck().draw_len(), 124 - 20);
        assert_eq!(game.round_number(), 1);
        assert_eq!(game.active_seat(), PlayerId::new(0));
        assert!(game.validate_state(&[]).is_ok());
    }

    #[test]
    fn test_rejects_no_players() {
        assert!(matches!(
            Game::new(Vec::new(), 1),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_single_turn() {
        let mut game = Game::with_config(GameConfig::new().with_validation(true), autarkies(2)).unwrap();
        let report = game.turn().unwrap();

        assert_eq!(report.seat, PlayerId::new(0));
        assert_eq!(report.outcome, TurnOutcome::Completed);
        // 5 - 1 planted + 3 drawn
        assert_eq!(game.players()[0].hand().len(), 7);
        assert_eq!(game.active_seat(), PlayerId::new(1));
        assert_eq!(game.phase(), TurnPhase::TurnComplete);
        assert_eq!(game.deck().draw_len(), 124 - 10 - 5);
    }

    #[test]
    fn test_round_wraps() {
        let mut game = Game::new(autarkies(3), 7).unwrap();
        for _ in 0..3 {
            game.turn().unwrap();
        }
        assert_eq!(game.round_number(), 2);
        assert_eq!(game.active_seat(), PlayerId::new(0));
        assert_eq!(game.turns_played(), 3);
    }

    #[test]
    fn test_run_to_completion() {
        let config = GameConfig::new().with_seed(3).with_validation(true);
        let mut game = Game::with_config(config, autarkies(3)).unwrap();

        let scores = game.run().unwrap();

        assert_eq!(scores.len(), 3);
        assert!(game.game_over() || game.is_truncated());
        assert!(game.deck().reshuffles() <= 2);
        assert!(game.validate_state(&[]).is_ok());
    }

    #[test]
    fn test_truncates_on_tiny_deck() {
        let catalog = Catalog::new(vec![CatalogEntry::new("wax", &[2, 4, 6], 6)]).unwrap();
        let config = GameConfig::new().with_catalog(catalog).with_validation(true);
        let mut game = Game::with_config(config, autarkies(1)).unwrap();
        assert_eq!(game.deck().draw_len(), 1);

        let report = game.turn().unwrap();

        assert!(report.is_truncated());
        assert!(game.is_truncated());
        assert_eq!(game.active_seat(), PlayerId::new(0));
        assert!(game.validate_state(&[]).is_ok());
    }

    #[test]
    fn test_validate_counts_in_transit() {
        let game = Game::new(autarkies(2), 1).unwrap();
        let extra = game.config().catalog.card("black").unwrap();

        assert!(matches!(
            game.validate_state(&[extra]),
            Err(GameError::InvariantViolation { expected: 12, found: 13, .. })
        ));
    }
}
