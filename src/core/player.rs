//! Seats at the table and per-seat storage.
//!
//! ## Seat
//!
//! War is strictly two-player; `Seat::First` is the list passed first to
//! the game runner.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats in table order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// 0 for the first seat, 1 for the second.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.index())
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use war_sim::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::new(0, 0);
/// wins[Seat::Second] += 1;
///
/// assert_eq!(wins[Seat::First], 0);
/// assert_eq!(wins[Seat::Second], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create from explicit values, first seat then second.
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SeatMap<U> {
        SeatMap::new(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
