//! Fields: a player's single-type runs of planted cards.

use crate::cards::Card;

/// Ordered run of cards sharing one name.
///
/// Mixed fields are impossible through the public API: `Player::plant`
/// harvests a field before planting a different name into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    cards: Vec<Card>,
}

/// Cards released by harvesting one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Harvest {
    /// Bottom `field_size - points` cards, headed for the discard pile.
    pub discarded: Vec<Card>,
    /// Top `points` cards, removed from play.
    pub scored: Vec<Card>,
}

impl Harvest {
    /// Points earned, one per scored card.
    #[must_use]
    pub fn points(&self) -> usize {
        self.scored.len()
    }

    #[must_use]
    pub fn field_size(&self) -> usize {
        self.discarded.len() + self.scored.len()
    }
}

impl Field {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Name of the card type occupying the field.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.cards.first().map(Card::name)
    }

    /// True if `card` can be planted without harvesting first.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        self.cards.first().map_or(true, |c| c == card)
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.accepts(&card), "planting {card} on {:?}", self.name());
        self.cards.push(card);
    }

    /// Empty the field and split it by the threshold table.
    ///
    /// Returns `None` for an empty field. The field is taken whole before
    /// it is partitioned, so it is empty afterwards in every case.
    pub(crate) fn harvest(&mut self) -> Option<Harvest> {
        let mut cards = std::mem::take(&mut self.cards);
        let n = cards.len();
        let points = cards.first()?.points_for(n);

        let scored = cards.split_off(n - points);
        Some(Harvest {
            discarded: cards,
            scored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Catalog, CatalogEntry};

    fn wax() -> Card {
        Catalog::new(vec![CatalogEntry::new("wax", &[2, 4, 6], 6)])
            .unwrap()
            .card("wax")
            .unwrap()
    }

    fn field_of(n: usize) -> Field {
        let mut field = Field::new();
        for _ in 0..n {
            field.push(wax());
        }
        field
    }

    #[test]
    fn test_accepts() {
        let catalog = Catalog::standard();
        let chili = catalog.card("chili").unwrap();
        let pinto = catalog.card("pinto").unwrap();

        let mut field = Field::new();
        assert!(field.accepts(&chili));

        field.push(chili.clone());
        assert!(field.accepts(&chili));
        assert!(!field.accepts(&pinto));
        assert_eq!(field.name(), Some("chili"));
    }

    #[test]
    fn test_harvest_empty() {
        let mut field = Field::new();
        assert!(field.harvest().is_none());
    }

    #[test]
    fn test_harvest_partition() {
        for n in 1..=6 {
            let mut field = field_of(n);
            let harvest = field.harvest().unwrap();

            assert!(field.is_empty());
            assert_eq!(harvest.field_size(), n);
            assert_eq!(harvest.points(), wax().points_for(n));
        }
    }

    #[test]
    fn test_harvest_six_wax() {
        let mut field = field_of(6);
        let harvest = field.harvest().unwrap();

        assert_eq!(harvest.points(), 3);
        assert_eq!(harvest.discarded.len(), 3);
        assert_eq!(harvest.scored.len(), 3);
    }

    #[test]
    fn test_harvest_below_first_threshold() {
        let mut field = field_of(1);
        let harvest = field.harvest().unwrap();

        assert_eq!(harvest.points(), 0);
        assert_eq!(harvest.discarded.len(), 1);
        assert!(harvest.scored.is_empty());
    }

    #[test]
    fn test_harvest_single_card_tight_thresholds() {
        let catalog = Catalog::new(vec![CatalogEntry::new("mung", &[1, 2], 4)]).unwrap();
        let mut field = Field::new();
        field.push(catalog.card("mung").unwrap());

        let harvest = field.harvest().unwrap();
        assert_eq!(harvest.points(), 1);
        assert!(harvest.discarded.is_empty());
        assert!(field.is_empty());
    }
}
