//! Core error types.

use thiserror::Error;

/// A line of input that does not describe a card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("card label is empty")]
    EmptyLabel,
    #[error("unknown card rank `{0}`")]
    UnknownRank(String),
}

/// Drawing from a list with no cards left.
///
/// The game runner checks emptiness before every draw, so seeing this
/// during play means the runner itself is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot draw from {player}'s empty card list")]
pub struct EmptyListError {
    pub player: String,
}
