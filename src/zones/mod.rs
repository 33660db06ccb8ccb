//! Card zones outside the hand.
//!
//! - `Deck`: shared draw and discard piles with reshuffle counting
//! - `Field`: a player's single-type planting run

pub mod deck;
pub mod field;

pub use deck::{Deck, DeckCheckpoint};
pub use field::{Field, Harvest};
