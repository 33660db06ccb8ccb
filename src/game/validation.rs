//! Card-conservation checking.
//!
//! For every catalog name, the copies found across all zones must equal
//! the catalog count. A mismatch is always an engine defect.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Catalog};
use crate::core::error::{GameError, Result};

/// Count cards by name.
pub fn card_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<&'a str, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.name()).or_default() += 1;
    }
    counts
}

/// Check that `cards` is exactly the catalog's full supply.
pub fn check_conservation<'a>(
    catalog: &Catalog,
    cards: impl IntoIterator<Item = &'a Card>,
) -> Result<()> {
    let counts = card_counts(cards);

    for entry in catalog.entries() {
        let found = counts.get(entry.name.as_str()).copied().unwrap_or(0);
        if found != entry.count {
            return Err(GameError::InvariantViolation {
                name: entry.name.clone(),
                expected: entry.count,
                found,
            });
        }
    }

    // A name the catalog never listed
    if let Some((name, &found)) = counts.iter().find(|(name, _)| catalog.count(name).is_none()) {
        return Err(GameError::InvariantViolation {
            name: (*name).to_string(),
            expected: 0,
            found,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CatalogEntry;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("a", &[1], 2),
            CatalogEntry::new("b", &[1], 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_full_supply_passes() {
        let catalog = catalog();
        let supply = catalog.build_supply();
        assert!(check_conservation(&catalog, &supply).is_ok());
    }

    #[test]
    fn test_missing_card_fails() {
        let catalog = catalog();
        let mut supply = catalog.build_supply();
        supply.pop();

        assert_eq!(
            check_conservation(&catalog, &supply),
            Err(GameError::InvariantViolation {
                name: "b".into(),
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn test_extra_card_fails() {
        let catalog = catalog();
        let mut supply = catalog.build_supply();
        supply.push(catalog.card("a").unwrap());

        assert!(matches!(
            check_conservation(&catalog, &supply),
            Err(GameError::InvariantViolation { expected: 2, found: 3, .. })
        ));
    }

    #[test]
    fn test_foreign_card_fails() {
        let catalog = catalog();
        let mut supply = catalog.build_supply();
        supply.push(Catalog::standard().card("chili").unwrap());

        assert!(matches!(
            check_conservation(&catalog, &supply),
            Err(GameError::InvariantViolation { expected: 0, found: 1, .. })
        ));
    }

    #[test]
    fn test_card_counts() {
        let catalog = catalog();
        let supply = catalog.build_supply();
        let counts = card_counts(&supply);
        assert_eq!(counts["a"], 2);
        assert_eq!(counts["b"], 1);
    }
}
