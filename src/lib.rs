//! # war-sim
//!
//! A deterministic simulator for the two-player card game War.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: The runner borrows both card lists mutably for
//!    the whole game and hands back a `GameReport`. No ambient state.
//!
//! 2. **Deterministic**: The same hands and `WarConfig` always play out the
//!    same way. Seeded deals use ChaCha8.
//!
//! 3. **Always Terminates**: Depletion, forfeit, draw, or the round cap ends
//!    every game.
//!
//! ## Modules
//!
//! - `core`: Cards, card lists, seats, configuration, RNG, errors
//! - `rules`: Game results and reports
//! - `games`: The War runner and dealing
//! - `loader`: Reading hands from text files

pub mod core;
pub mod games;
pub mod loader;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    compare, Card, CardError, CardList, EmptyListError, GameRng, Rank, Seat, SeatMap, WarConfig,
};

pub use crate::games::war::{deal, play, play_with_config, standard_deck, Round, WarGame};

pub use crate::loader::{load_hand, read_hand, SetupError};

pub use crate::rules::{GameReport, GameResult, Victory};
