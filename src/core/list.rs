//! Per-player card list.
//!
//! A `CardList` is one player's deck as a FIFO queue: the front is the next
//! card to play, winnings go to the back. Backed by `im::Vector` so a hand can
//! be snapshotted in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::{CardError, EmptyListError};

/// One player's ordered cards plus a display name.
///
/// ## Example
///
/// ```
/// use war_sim::core::CardList;
///
/// let mut list = CardList::new();
/// list.set_player("Alice");
/// list.append("h 9").unwrap();
/// list.append("c 2").unwrap();
///
/// assert_eq!(list.size(), 2);
/// assert_eq!(list.remove_front().unwrap().label(), "h 9");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardList {
    player: String,
    cards: Vector<Card>,
}

impl CardList {
    /// Create an empty, unnamed list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list for a named player.
    #[must_use]
    pub fn with_player(name: impl Into<String>) -> Self {
        Self {
            player: name.into(),
            cards: Vector::new(),
        }
    }

    /// Build a list from card labels.
    pub fn from_labels<S: AsRef<str>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, CardError> {
        let mut list = Self::with_player(name);
        for label in labels {
            list.append(label.as_ref())?;
        }
        Ok(list)
    }

    /// Parse `label` and add the card at the tail.
    pub fn append(&mut self, label: &str) -> Result<(), CardError> {
        let card = Card::parse(label)?;
        self.cards.push_back(card);
        Ok(())
    }

    /// Add an already-built card at the tail.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Set the display name. Later calls overwrite earlier ones.
    pub fn set_player(&mut self, name: impl Into<String>) {
        self.player = name.into();
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Remove and return the front card.
    pub fn remove_front(&mut self) -> Result<Card, EmptyListError> {
        self.cards.pop_front().ok_or_else(|| EmptyListError {
            player: self.player.clone(),
        })
    }

    /// Look at the front card without removing it.
    #[must_use]
    pub fn peek_front(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Extend<Card> for CardList {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.cards.push_back(card);
        }
    }
}
