//! Players: hands, fields, harvesting.

pub mod player;

pub use player::{HarvestReport, Player, FIELD_COUNT};
