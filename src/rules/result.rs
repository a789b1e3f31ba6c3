//! Game results and the end-of-game report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap};

/// How a winner got there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victory {
    /// Opponent's list ran dry between rounds.
    Depletion,
    /// Opponent ran out of cards during a war.
    Forfeit,
    /// Opponent had no cards before the first round.
    Walkover,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner { seat: Seat, victory: Victory },
    /// A final tie emptied both lists.
    Draw,
    /// Both lists were empty before play started.
    NoContest,
    /// Round cap reached with both lists still holding cards.
    Stalemate,
}

impl GameResult {
    /// The winning seat, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Winner { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}

/// Summary handed back by the game runner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub result: GameResult,
    /// Player names, first seat then second.
    pub players: SeatMap<String>,
    /// Rounds started, wars included.
    pub rounds: u64,
    /// Ties resolved (or abandoned) by war.
    pub wars: u64,
    /// Cards held by each side when play stopped.
    pub final_counts: SeatMap<usize>,
}

impl GameReport {
    /// Name of the winning player, if any.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.result.winner().map(|seat| self.players[seat].as_str())
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            GameResult::Winner { seat, victory } => {
                let winner = &self.players[seat];
                let loser = &self.players[seat.other()];
                match victory {
                    Victory::Depletion => write!(f, "{} wins! {} is out of cards", winner, loser)?,
                    Victory::Forfeit => write!(f, "{} wins! {} forfeits the war", winner, loser)?,
                    Victory::Walkover => write!(f, "{} wins! {} has no cards to play", winner, loser)?,
                }
            }
            GameResult::Draw => write!(f, "Draw! Both players ran out of cards")?,
            GameResult::NoContest => write!(f, "No contest: neither player has cards")?,
            GameResult::Stalemate => write!(f, "Stalemate after {} rounds", self.rounds)?,
        }

        write!(
            f,
            " ({} rounds, {} wars; {}: {}, {}: {})",
            self.rounds,
            self.wars,
            self.players[Seat::First],
            self.final_counts[Seat::First],
            self.players[Seat::Second],
            self.final_counts[Seat::Second],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(result: GameResult) -> GameReport {
        GameReport {
            result,
            players: SeatMap::new("Alice".to_string(), "Bob".to_string()),
            rounds: 3,
            wars: 1,
            final_counts: SeatMap::new(0, 8),
        }
    }

    #[test]
    fn test_game_result_winner() {
        let result = GameResult::Winner {
            seat: Seat::Second,
            victory: Victory::Depletion,
        };
        assert_eq!(result.winner(), Some(Seat::Second));

        assert_eq!(GameResult::Draw.winner(), None);
        assert_eq!(GameResult::Stalemate.winner(), None);
    }

    #[test]
    fn test_winner_name() {
        let r = report(GameResult::Winner {
            seat: Seat::Second,
            victory: Victory::Forfeit,
        });
        assert_eq!(r.winner_name(), Some("Bob"));
        assert_eq!(report(GameResult::Draw).winner_name(), None);
    }

    #[test]
    fn test_display() {
        let r = report(GameResult::Winner {
            seat: Seat::Second,
            victory: Victory::Depletion,
        });
        assert_eq!(
            r.to_string(),
            "Bob wins! Alice is out of cards (3 rounds, 1 wars; Alice: 0, Bob: 8)"
        );

        assert!(report(GameResult::Stalemate)
            .to_string()
            .starts_with("Stalemate after 3 rounds"));
    }

    #[test]
    fn test_serialization() {
        let r = report(GameResult::Winner {
            seat: Seat::First,
            victory: Victory::Walkover,
        });
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: GameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
