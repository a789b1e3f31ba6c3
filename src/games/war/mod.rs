//! Two-player War.
//!
//! Each round both players turn over their top card; the higher rank takes
//! both cards to the bottom of its list. A tie starts a war: each side lays
//! face-down cards into the pot and compares again, and the eventual winner
//! takes the whole pot. A player who runs out of cards loses.

mod deck;
mod game;

pub use deck::{deal, standard_deck};
pub use game::{play, play_with_config, Round, WarGame};
