//! The self-sufficient reference strategy.

use crate::cards::Card;
use crate::players::Player;

use super::{Planting, PlantingPlan, Strategy};

/// Never trades; plants one hand card per turn.
///
/// Field 1 is the "flexible" field: a card goes there when it is empty
/// or already holds that name, otherwise it goes to field 0 (harvesting
/// whatever is there if the names differ).
#[derive(Clone, Copy, Debug, Default)]
pub struct Autarky;

impl Autarky {
    fn field_for(player: &Player, card: &Card) -> usize {
        if player.field(1).accepts(card) {
            1
        } else {
            0
        }
    }
}

impl Strategy for Autarky {
    fn name(&self) -> &str {
        "Autarky"
    }

    /// The oldest hand card only.
    fn plant_from_hand(&self, player: &Player) -> PlantingPlan {
        player
            .hand()
            .first()
            .map(|card| Planting::new(Self::field_for(player, card), card.clone()))
            .into_iter()
            .collect()
    }

    /// Every card, each judged against the fields as they stand now.
    fn plant_from_trade(&self, player: &Player, cards: &[Card]) -> PlantingPlan {
        cards
            .iter()
            .map(|card| Planting::new(Self::field_for(player, card), card.clone()))
            .collect()
    }
}
