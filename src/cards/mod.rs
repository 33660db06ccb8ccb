//! Card types and the catalog that defines them.
//!
//! - `Card`: one interchangeable copy of a bean type
//! - `Catalog`: immutable name -> (thresholds, count) table

pub mod card;
pub mod catalog;

pub use card::Card;
pub use catalog::{Catalog, CatalogEntry};
