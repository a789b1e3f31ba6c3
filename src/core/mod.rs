//! Core types: cards, card lists, seats, configuration, RNG, errors.
//!
//! These are the building blocks the game runner plays with. Nothing here
//! knows the rules of War.

pub mod card;
pub mod config;
pub mod error;
pub mod list;
pub mod player;
pub mod rng;

pub use card::{compare, Card, Rank};
pub use config::WarConfig;
pub use error::{CardError, EmptyListError};
pub use list::CardList;
pub use player::{Seat, SeatMap};
pub use rng::GameRng;
