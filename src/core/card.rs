//! Cards and ranks.
//!
//! A `Card` is parsed from one line of a hand file. The label is kept as
//! written (trimmed) for display; only the `Rank` takes part in play.
//!
//! ## Label Format
//!
//! The rank is the last whitespace-separated token of the label, so both a
//! bare rank (`"9"`, `"K"`) and a suit-prefixed card (`"h 9"`, `"s k"`) parse.
//!
//! | Token            | Rank  |
//! |------------------|-------|
//! | digits           | value |
//! | `j`, `jack`      | 11    |
//! | `q`, `queen`     | 12    |
//! | `k`, `king`      | 13    |
//! | `a`, `ace`       | 14    |

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CardError;

/// Comparable card rank. Higher beats lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u16);

impl Rank {
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// Create a rank from its raw value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = token.parse::<u16>() {
            return Ok(Rank(value));
        }

        match token.to_ascii_lowercase().as_str() {
            "j" | "jack" => Ok(Rank::JACK),
            "q" | "queen" => Ok(Rank::QUEEN),
            "k" | "king" => Ok(Rank::KING),
            "a" | "ace" => Ok(Rank::ACE),
            _ => Err(CardError::UnknownRank(token.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rank::JACK => write!(f, "J"),
            Rank::QUEEN => write!(f, "Q"),
            Rank::KING => write!(f, "K"),
            Rank::ACE => write!(f, "A"),
            Rank(n) => write!(f, "{}", n),
        }
    }
}

/// A single card. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    label: String,
    rank: Rank,
}

impl Card {
    /// Parse a card from a line of input.
    pub fn parse(label: &str) -> Result<Self, CardError> {
        let label = label.trim();
        let token = label.split_whitespace().last().ok_or(CardError::EmptyLabel)?;
        let rank = token.parse()?;

        Ok(Self {
            label: label.to_string(),
            rank,
        })
    }

    /// Create a card with an explicit rank, bypassing label parsing.
    #[must_use]
    pub fn with_rank(label: impl Into<String>, rank: Rank) -> Self {
        Self {
            label: label.into(),
            rank,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Compare two cards by rank. Labels never break ties.
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank)
}
