//! Player state: hand, two fields, score and scored pile.
//!
//! Planting and harvesting live here. A `Player` asks its strategy for
//! a plan, checks the whole plan against what it actually holds, and
//! only then mutates anything, so a bad plan leaves the game untouched.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::Card;
use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;
use crate::strategy::{Planting, Strategy};
use crate::zones::{Deck, Field};

/// Fields per player.
pub const FIELD_COUNT: usize = 2;

/// Summary of one harvest, for logging and callers that track scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestReport {
    pub seat: PlayerId,
    pub field: usize,
    pub name: String,
    pub field_size: usize,
    pub points: usize,
}

impl HarvestReport {
    /// Cards sent to the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.field_size - self.points
    }
}

/// One seat at the table.
#[derive(Clone)]
pub struct Player {
    seat: PlayerId,
    /// Oldest card first.
    hand: Vec<Card>,
    fields: [Field; FIELD_COUNT],
    score: u32,
    scored_cards: Vec<Card>,
    strategy: Arc<dyn Strategy>,
}

impl Player {
    /// Create a player with an empty hand and empty fields.
    pub fn new(seat: PlayerId, strategy: Arc<dyn Strategy>) -> Self {
        Self {
            seat,
            hand: Vec::new(),
            fields: Default::default(),
            score: 0,
            scored_cards: Vec::new(),
            strategy,
        }
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn fields(&self) -> &[Field; FIELD_COUNT] {
        &self.fields
    }

    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn scored_cards(&self) -> &[Card] {
        &self.scored_cards
    }

    #[must_use]
    pub fn strategy(&self) -> &Arc<dyn Strategy> {
        &self.strategy
    }

    /// Every card the player holds: hand, fields, scored pile.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .chain(self.fields.iter().flat_map(Field::cards))
            .chain(&self.scored_cards)
    }

    /// Add cards to the back of the hand.
    pub fn take_into_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Plant `card` into a field, harvesting it first if it holds a
    /// different name.
    pub fn plant(&mut self, field: usize, card: Card, deck: &mut Deck) -> Result<Option<HarvestReport>> {
        self.check_field(field)?;

        let report = if self.fields[field].accepts(&card) {
            None
        } else {
            self.harvest(field, deck)?
        };

        trace!(seat = %self.seat, field, card = %card, "plant");
        self.fields[field].push(card);
        Ok(report)
    }

    /// Harvest a field: award points, discard the bottom cards and keep
    /// the top `points` cards out of play. No-op on an empty field.
    pub fn harvest(&mut self, field: usize, deck: &mut Deck) -> Result<Option<HarvestReport>> {
        self.check_field(field)?;

        let Some(harvest) = self.fields[field].harvest() else {
            return Ok(None);
        };

        let report = HarvestReport {
            seat: self.seat,
            field,
            name: harvest
                .scored
                .first()
                .or_else(|| harvest.discarded.first())
                .map(|c| c.name().to_string())
                .unwrap_or_default(),
            field_size: harvest.field_size(),
            points: harvest.points(),
        };

        self.score += harvest.points() as u32;
        deck.discard(harvest.discarded);
        self.scored_cards.extend(harvest.scored);

        debug!(
            seat = %self.seat,
            field,
            name = %report.name,
            size = report.field_size,
            points = report.points,
            score = self.score,
            "harvest"
        );
        Ok(Some(report))
    }

    /// Ask the strategy which hand cards to plant, then plant them.
    ///
    /// Each planted card removes its first occurrence from the hand. The
    /// whole plan is checked before anything moves.
    pub fn plant_from_hand(&mut self, deck: &mut Deck) -> Result<Vec<HarvestReport>> {
        if self.hand.is_empty() {
            return Ok(Vec::new());
        }

        let plan = self.strategy.plant_from_hand(self);
        self.check_plan(&plan, &self.hand, "hand")?;

        let mut reports = Vec::new();
        for Planting { field, card } in plan {
            if let Some(pos) = self.hand.iter().position(|c| *c == card) {
                self.hand.remove(pos);
            }
            reports.extend(self.plant(field, card, deck)?);
        }
        Ok(reports)
    }

    /// Ask the strategy where to plant cards that did not come from the
    /// hand (the face-up draw), then plant them.
    ///
    /// The hand is not touched. Returns the cards the plan left unplanted
    /// along with the harvests it caused. A rejected plan sends every card
    /// in `cards` to the discard pile and leaves the player unchanged.
    pub fn plant_from_draw(
        &mut self,
        cards: Vec<Card>,
        deck: &mut Deck,
    ) -> Result<(Vec<Card>, Vec<HarvestReport>)> {
        if cards.is_empty() {
            return Ok((cards, Vec::new()));
        }

        let plan = self.strategy.plant_from_trade(self, &cards);
        if let Err(err) = self.check_plan(&plan, &cards, "face-up cards") {
            deck.discard(cards);
            return Err(err);
        }

        let mut remaining = cards;
        let mut reports = Vec::new();
        for Planting { field, card } in plan {
            if let Some(pos) = remaining.iter().position(|c| *c == card) {
                remaining.remove(pos);
            }
            reports.extend(self.plant(field, card, deck)?);
        }
        Ok((remaining, reports))
    }

    fn check_field(&self, field: usize) -> Result<()> {
        if field < FIELD_COUNT {
            Ok(())
        } else {
            Err(self.invalid(format!("field index {field} out of range")))
        }
    }

    /// Every planting must name a valid field and a card that `available`
    /// still holds once earlier plantings have used their copies.
    fn check_plan(&self, plan: &[Planting], available: &[Card], source: &str) -> Result<()> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for card in available {
            *counts.entry(card.name()).or_default() += 1;
        }

        for planting in plan {
            self.check_field(planting.field)?;
            match counts.get_mut(planting.card.name()) {
                Some(n) if *n > 0 => *n -= 1,
                _ => {
                    return Err(self.invalid(format!(
                        "{} is not available in {source}",
                        planting.card
                    )))
                }
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> GameError {
        GameError::InvalidStrategyDecision {
            seat: self.seat,
            reason,
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("seat", &self.seat)
            .field("strategy", &self.strategy.name())
            .field("hand", &self.hand)
            .field("fields", &self.fields)
            .field("score", &self.score)
            .field("scored_cards", &self.scored_cards.len())
            .finish()
    }
}
