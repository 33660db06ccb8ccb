//! Card values.
//!
//! A `Card` is one copy of a bean type. Copies of the same name are
//! interchangeable: equality and hashing look at the name only, so a
//! hand can be searched for "a chili" without caring which chili.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::catalog::Catalog;
use crate::core::error::Result;

/// One card, carrying its type name and the threshold table for that type.
///
/// `point_thresholds[k]` is the minimum field size that earns `k + 1`
/// points. Cloning is two reference-count bumps.
///
/// ```
/// use bean_sim::cards::{Card, Catalog};
///
/// let catalog = Catalog::standard();
/// let chili = Card::new("chili", &catalog).unwrap();
///
/// assert_eq!(chili.point_thresholds(), &[3, 5, 5, 8]);
/// assert_eq!(chili.points_for(5), 3);
/// assert!(Card::new("garden", &catalog).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Card {
    name: Arc<str>,
    point_thresholds: Arc<[u32]>,
}

impl Card {
    /// Look up a card by name in `catalog`.
    ///
    /// Fails with `UnknownCardType` for names the catalog does not list.
    pub fn new(name: &str, catalog: &Catalog) -> Result<Self> {
        catalog.card(name)
    }

    pub(crate) fn from_parts(name: Arc<str>, point_thresholds: Arc<[u32]>) -> Self {
        Self {
            name,
            point_thresholds,
        }
    }

    /// Card type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn point_thresholds(&self) -> &[u32] {
        &self.point_thresholds
    }

    /// Points earned by harvesting a field of `field_size` copies:
    /// the number of thresholds that `field_size` meets.
    #[must_use]
    pub fn points_for(&self, field_size: usize) -> usize {
        self.point_thresholds
            .iter()
            .filter(|&&t| t as usize <= field_size)
            .count()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
