//! Game configuration.

use serde::{Deserialize, Serialize};

/// War rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Face-down cards each side adds to the pot per war (default: 1).
    /// A side holding a single card skips them and compares directly.
    pub face_down_cards: usize,

    /// Round cap (default: 100_000).
    /// Reaching it ends the game as a stalemate.
    pub max_rounds: u64,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            face_down_cards: 1,
            max_rounds: 100_000,
        }
    }
}

impl WarConfig {
    /// Create a config with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set face-down cards per war.
    pub fn with_face_down_cards(mut self, count: usize) -> Self {
        self.face_down_cards = count;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = rounds;
        self
    }
}
