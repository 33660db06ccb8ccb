//! Card catalog: the fixed set of card types in a game.
//!
//! The catalog maps every card name to its threshold table and to the
//! number of copies in the full supply. It is immutable configuration,
//! injected into deck construction, so tests can run with small
//! synthetic catalogs.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::error::{GameError, Result};

/// One card type in a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Card type name.
    pub name: String,

    /// Minimum field sizes for 1, 2, 3, ... points. Non-decreasing, and
    /// point `k` needs at least `k` cards.
    pub point_thresholds: Vec<u32>,

    /// Copies of this card in the full supply.
    pub count: usize,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, point_thresholds: &[u32], count: usize) -> Self {
        Self {
            name: name.into(),
            point_thresholds: point_thresholds.to_vec(),
            count,
        }
    }
}

/// Immutable, validated set of card types.
///
/// Serializes as its entry list; deserializing re-runs validation.
///
/// ## Example
///
/// ```
/// use bean_sim::cards::{Catalog, CatalogEntry};
///
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new("wax", &[2, 4, 6], 6),
/// ]).unwrap();
///
/// assert_eq!(catalog.total_cards(), 6);
/// assert_eq!(catalog.count("wax"), Some(6));
/// assert!(catalog.card("kidney").is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// One shared card per entry; copies clone these.
    prototypes: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GameError::InvalidConfig("catalog has no card types".into()));
        }

        let mut index = FxHashMap::default();
        let mut prototypes = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(GameError::InvalidConfig("card name is empty".into()));
            }
            if entry.count == 0 {
                return Err(GameError::InvalidConfig(format!(
                    "{} has no copies",
                    entry.name
                )));
            }
            if entry.point_thresholds.is_empty() {
                return Err(GameError::InvalidConfig(format!(
                    "{} has no point thresholds",
                    entry.name
                )));
            }
            if entry.point_thresholds.windows(2).any(|w| w[0] > w[1]) {
                return Err(GameError::InvalidConfig(format!(
                    "{} thresholds must be non-decreasing",
                    entry.name
                )));
            }
            // The k-th point needs at least k cards, so a harvest never
            // scores more cards than the field holds.
            if let Some((k, t)) = entry
                .point_thresholds
                .iter()
                .enumerate()
                .find(|&(k, &t)| (t as usize) <= k)
            {
                return Err(GameError::InvalidConfig(format!(
                    "{} needs {t} cards for point {}, at least {} required",
                    entry.name,
                    k + 1,
                    k + 1
                )));
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(GameError::InvalidConfig(format!(
                    "{} listed twice",
                    entry.name
                )));
            }

            let thresholds: Arc<[u32]> = entry.point_thresholds.as_slice().into();
            prototypes.push(Card::from_parts(entry.name.as_str().into(), thresholds));
        }

        Ok(Self {
            entries,
            prototypes,
            index,
        })
    }

    /// The stock three-bean catalog: 124 cards.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            CatalogEntry::new("black", &[2, 2, 3], 12),
            CatalogEntry::new("pinto", &[3, 6, 8], 64),
            CatalogEntry::new("chili", &[3, 5, 5, 8], 48),
        ])
        .unwrap_or_else(|e| unreachable!("standard catalog is valid: {e}"))
    }

    /// Create a card of the named type.
    pub fn card(&self, name: &str) -> Result<Card> {
        self.index
            .get(name)
            .map(|&i| self.prototypes[i].clone())
            .ok_or_else(|| GameError::UnknownCardType(name.to_string()))
    }

    /// Catalog count for a name, `None` if unknown.
    #[must_use]
    pub fn count(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&i| self.entries[i].count)
    }

    /// Iterate over card names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the full supply.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Upper bound on the sum of all scores in one game.
    ///
    /// Every point moves exactly one card to a scored pile for good,
    /// so the supply size bounds the total.
    #[must_use]
    pub fn max_theoretical_score(&self) -> usize {
        self.total_cards()
    }

    /// Every copy of every card, in catalog order (unshuffled).
    #[must_use]
    pub fn build_supply(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total_cards());
        for (entry, prototype) in self.entries.iter().zip(&self.prototypes) {
            cards.extend(std::iter::repeat(prototype).take(entry.count).cloned());
        }
        cards
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Catalog {}

impl TryFrom<Vec<CatalogEntry>> for Catalog {
    type Error = GameError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.total_cards(), 124);
        assert_eq!(catalog.count("black"), Some(12));
        assert_eq!(catalog.count("pinto"), Some(64));
        assert_eq!(catalog.count("chili"), Some(48));
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["black", "pinto", "chili"]);
    }

    #[test]
    fn test_unknown_card() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.card("garden"),
            Err(GameError::UnknownCardType("garden".into()))
        );
        assert_eq!(catalog.count("garden"), None);
    }

    #[test]
    fn test_build_supply() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("a", &[1], 2),
            CatalogEntry::new("b", &[2], 3),
        ])
        .unwrap();

        let supply = catalog.build_supply();
        let names: Vec<_> = supply.iter().map(Card::name).collect();
        assert_eq!(names, ["a", "a", "b", "b", "b"]);
    }

    #[test]
    fn test_rejects_malformed() {
        let bad = [
            vec![],
            vec![CatalogEntry::new("", &[1], 1)],
            vec![CatalogEntry::new("a", &[], 1)],
            vec![CatalogEntry::new("a", &[3, 2], 1)],
            vec![CatalogEntry::new("a", &[0, 2], 1)],
            vec![CatalogEntry::new("a", &[1, 1], 1)],
            vec![CatalogEntry::new("a", &[2, 2, 2], 1)],
            vec![CatalogEntry::new("a", &[1], 0)],
            vec![
                CatalogEntry::new("a", &[1], 1),
                CatalogEntry::new("a", &[2], 1),
            ],
        ];

        for entries in bad {
            assert!(matches!(
                Catalog::new(entries),
                Err(GameError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_accepts_tight_thresholds() {
        let catalog = Catalog::new(vec![CatalogEntry::new("a", &[1, 2, 3], 3)]).unwrap();
        let card = catalog.card("a").unwrap();

        for n in 1..=3 {
            assert_eq!(card.points_for(n), n);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let catalog = Catalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored: Catalog = serde_json::from_str(&json).unwrap();

        assert_eq!(catalog, restored);
        assert_eq!(restored.card("chili").unwrap().point_thresholds(), &[3, 5, 5, 8]);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[{"name":"a","point_thresholds":[],"count":1}]"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());

        let json = r#"[{"name":"a","point_thresholds":[1,1],"count":4}]"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }
}
