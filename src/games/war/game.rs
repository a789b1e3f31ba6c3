//! War game runner.

use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::{compare, Card, CardList, Seat, SeatMap, WarConfig};
use crate::rules::{GameReport, GameResult, Victory};

/// Cards on the table during one round, one entry per draw step.
///
/// A step holds at most one card per seat; a face-down step may hold only
/// one. The winner takes the steps in the order they were laid, and within
/// each step the loser's card goes before its own.
#[derive(Debug, Default)]
struct Pot {
    steps: SmallVec<[SeatMap<Option<Card>>; 4]>,
}

impl Pot {
    fn lay(&mut self, first: Option<Card>, second: Option<Card>) {
        self.steps.push(SeatMap::new(first, second));
    }

    fn len(&self) -> usize {
        self.steps
            .iter()
            .map(|step| Seat::BOTH.iter().filter(|&&seat| step[seat].is_some()).count())
            .sum()
    }

    /// Consume the pot in award order for `winner`.
    fn award(self, winner: Seat) -> impl Iterator<Item = Card> {
        let loser = winner.other();
        self.steps
            .into_iter()
            .flat_map(move |mut step| [step[loser].take(), step[winner].take()])
            .flatten()
    }
}

/// What happened in one call to `WarGame::play_round`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Round {
    /// A seat took the pot and play continues.
    Won {
        seat: Seat,
        /// Cards transferred to the winner's tail, including their own.
        cards: usize,
        /// Wars fought before the round was decided.
        wars: u64,
    },
    /// The game is over. Further calls keep returning the same result.
    Over(GameResult),
}

/// A game of War in progress.
///
/// Holds exclusive access to both lists for its whole lifetime; the lists
/// carry the final hands once play stops.
///
/// ## Usage
///
/// ```
/// use war_sim::core::CardList;
/// use war_sim::games::war::{Round, WarGame};
///
/// let mut alice = CardList::from_labels("Alice", ["9", "8"]).unwrap();
/// let mut bob = CardList::from_labels("Bob", ["3", "4"]).unwrap();
///
/// let mut game = WarGame::new(&mut alice, &mut bob);
/// while let Round::Won { .. } = game.play_round() {}
///
/// let report = game.report().unwrap();
/// assert_eq!(report.rounds, 2);
/// assert_eq!(report.winner_name(), Some("Alice"));
/// ```
pub struct WarGame<'a> {
    lists: SeatMap<&'a mut CardList>,
    config: WarConfig,
    rounds: u64,
    wars: u64,
    result: Option<GameResult>,
}

impl<'a> WarGame<'a> {
    /// Start a game with default rules.
    pub fn new(first: &'a mut CardList, second: &'a mut CardList) -> Self {
        Self::with_config(first, second, WarConfig::default())
    }

    /// Start a game with explicit rules.
    pub fn with_config(first: &'a mut CardList, second: &'a mut CardList, config: WarConfig) -> Self {
        Self {
            lists: SeatMap::new(first, second),
            config,
            rounds: 0,
            wars: 0,
            result: None,
        }
    }

    /// Get the list held by a seat.
    #[must_use]
    pub fn list(&self, seat: Seat) -> &CardList {
        &*self.lists[seat]
    }

    /// Rounds started so far.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Wars fought so far.
    #[must_use]
    pub fn wars(&self) -> u64 {
        self.wars
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Play one round: compare top cards, fight wars on ties, award the pot.
    pub fn play_round(&mut self) -> Round {
        if let Some(result) = self.result {
            return Round::Over(result);
        }

        if let Some(result) = self.depletion() {
            return self.finish(result);
        }

        if self.rounds >= self.config.max_rounds {
            return self.finish(GameResult::Stalemate);
        }

        self.rounds += 1;
        let mut pot = Pot::default();
        let mut wars = 0;

        loop {
            let first = self.draw(Seat::First);
            let second = self.draw(Seat::Second);
            let ordering = compare(&first, &second);

            trace!(
                round = self.rounds,
                first = %first,
                second = %second,
                "cards compared"
            );

            pot.lay(Some(first), Some(second));

            let winner = match ordering {
                Ordering::Greater => Seat::First,
                Ordering::Less => Seat::Second,
                Ordering::Equal => {
                    wars += 1;
                    self.wars += 1;
                    debug!(round = self.rounds, pot = pot.len(), "tie, going to war");

                    if let Some(result) = self.war_forfeit(&mut pot) {
                        return self.finish(result);
                    }

                    self.place_face_down(&mut pot);
                    continue;
                }
            };

            let cards = pot.len();
            self.lists[winner].extend(pot.award(winner));
            return Round::Won {
                seat: winner,
                cards,
                wars,
            };
        }
    }

    /// Play rounds until the game is over and report the outcome.
    pub fn run(&mut self) -> GameReport {
        loop {
            if let Round::Over(result) = self.play_round() {
                return self.build_report(result);
            }
        }
    }

    /// Report for a finished game; `None` while play continues.
    #[must_use]
    pub fn report(&self) -> Option<GameReport> {
        self.result.map(|result| self.build_report(result))
    }

    // === Internals ===

    /// Terminal state when a side has nothing left between rounds.
    fn depletion(&self) -> Option<GameResult> {
        let opening = self.rounds == 0;

        match (self.lists[Seat::First].is_empty(), self.lists[Seat::Second].is_empty()) {
            (false, false) => None,
            (true, true) if opening => Some(GameResult::NoContest),
            (true, true) => Some(GameResult::Draw),
            (first_empty, _) => {
                let seat = if first_empty { Seat::Second } else { Seat::First };
                let victory = if opening { Victory::Walkover } else { Victory::Depletion };
                Some(GameResult::Winner { seat, victory })
            }
        }
    }

    /// Settle a war when a side has no card left to continue it.
    ///
    /// The side still holding cards takes the pot. If neither does, the pot
    /// is discarded and the game is drawn.
    fn war_forfeit(&mut self, pot: &mut Pot) -> Option<GameResult> {
        let seat = match (self.lists[Seat::First].is_empty(), self.lists[Seat::Second].is_empty()) {
            (false, false) => return None,
            (true, true) => {
                debug!(discarded = pot.len(), "both sides exhausted during war");
                *pot = Pot::default();
                return Some(GameResult::Draw);
            }
            (true, false) => Seat::Second,
            (false, true) => Seat::First,
        };

        debug!(winner = %seat, pot = pot.len(), "war forfeited");
        self.lists[seat].extend(std::mem::take(pot).award(seat));
        Some(GameResult::Winner {
            seat,
            victory: Victory::Forfeit,
        })
    }

    /// Lay face-down cards, keeping one card per side for the next comparison.
    fn place_face_down(&mut self, pot: &mut Pot) {
        for _ in 0..self.config.face_down_cards {
            let first = self.draw_face_down(Seat::First);
            let second = self.draw_face_down(Seat::Second);
            if first.is_some() || second.is_some() {
                pot.lay(first, second);
            }
        }
    }

    fn draw_face_down(&mut self, seat: Seat) -> Option<Card> {
        if self.lists[seat].size() > 1 {
            Some(self.draw(seat))
        } else {
            None
        }
    }

    fn draw(&mut self, seat: Seat) -> Card {
        match self.lists[seat].remove_front() {
            Ok(card) => card,
            Err(err) => panic!("game runner skipped an emptiness check: {}", err),
        }
    }

    fn finish(&mut self, result: GameResult) -> Round {
        self.result = Some(result);
        info!(
            ?result,
            rounds = self.rounds,
            wars = self.wars,
            first = self.lists[Seat::First].size(),
            second = self.lists[Seat::Second].size(),
            "game over"
        );
        Round::Over(result)
    }

    fn build_report(&self, result: GameResult) -> GameReport {
        GameReport {
            result,
            players: self.lists.map(|list| list.player().to_string()),
            rounds: self.rounds,
            wars: self.wars,
            final_counts: self.lists.map(|list| list.size()),
        }
    }
}

/// Play a full game with default rules.
///
/// Both lists are mutated in place and hold the final hands afterwards.
pub fn play(first: &mut CardList, second: &mut CardList) -> GameReport {
    play_with_config(first, second, WarConfig::default())
}

/// Play a full game with explicit rules.
pub fn play_with_config(first: &mut CardList, second: &mut CardList, config: WarConfig) -> GameReport {
    WarGame::with_config(first, second, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(name: &str, labels: &[&str]) -> CardList {
        CardList::from_labels(name, labels.iter().copied()).unwrap()
    }

    fn labels(list: &CardList) -> Vec<&str> {
        list.iter().map(Card::label).collect()
    }

    #[test]
    fn test_higher_card_takes_both() {
        let mut a = hand("Alice", &["9", "2"]);
        let mut b = hand("Bob", &["3", "4"]);

        let mut game = WarGame::new(&mut a, &mut b);
        let round = game.play_round();

        assert_eq!(
            round,
            Round::Won {
                seat: Seat::First,
                cards: 2,
                wars: 0
            }
        );
        assert_eq!(labels(game.list(Seat::First)), vec!["2", "3", "9"]);
        assert_eq!(labels(game.list(Seat::Second)), vec!["4"]);
    }

    #[test]
    fn test_war_pot_loser_card_first() {
        let mut a = hand("Alice", &["5", "5", "3", "9"]);
        let mut b = hand("Bob", &["5", "5", "2", "7"]);

        let mut game = WarGame::new(&mut a, &mut b);
        let round = game.play_round();

        assert_eq!(
            round,
            Round::Won {
                seat: Seat::First,
                cards: 6,
                wars: 1
            }
        );
        drop(game);

        assert_eq!(labels(&a), vec!["9", "5", "5", "5", "5", "2", "3"]);
        assert_eq!(labels(&b), vec!["7"]);
    }

    #[test]
    fn test_single_card_skips_face_down() {
        // Bob ties with his second-to-last card, then fights with his last.
        let mut a = hand("Alice", &["8", "4", "6"]);
        let mut b = hand("Bob", &["8", "k"]);

        let mut game = WarGame::new(&mut a, &mut b);
        let round = game.play_round();

        // Alice lays "4" face down, Bob has one card left and compares it directly.
        assert_eq!(
            round,
            Round::Won {
                seat: Seat::Second,
                cards: 5,
                wars: 1
            }
        );
        drop(game);

        assert!(a.is_empty());
        assert_eq!(labels(&b), vec!["8", "8", "4", "6", "k"]);
    }

    #[test]
    fn test_forfeit_when_tie_empties_one_side() {
        let mut a = hand("Alice", &["7"]);
        let mut b = hand("Bob", &["7", "2", "3"]);

        let report = play(&mut a, &mut b);

        assert_eq!(
            report.result,
            GameResult::Winner {
                seat: Seat::Second,
                victory: Victory::Forfeit
            }
        );
        assert_eq!(report.wars, 1);
        assert!(a.is_empty());
        assert_eq!(labels(&b), vec!["2", "3", "7", "7"]);
    }

    #[test]
    fn test_draw_when_final_tie_empties_both() {
        let mut a = hand("Alice", &["q"]);
        let mut b = hand("Bob", &["q"]);

        let report = play(&mut a, &mut b);

        assert_eq!(report.result, GameResult::Draw);
        assert_eq!(report.winner_name(), None);
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn test_empty_start_is_walkover() {
        let mut a = CardList::with_player("Alice");
        let mut b = hand("Bob", &["5"]);

        let report = play(&mut a, &mut b);

        assert_eq!(
            report.result,
            GameResult::Winner {
                seat: Seat::Second,
                victory: Victory::Walkover
            }
        );
        assert_eq!(report.rounds, 0);
        assert_eq!(labels(&b), vec!["5"]);
    }

    #[test]
    fn test_both_empty_is_no_contest() {
        let mut a = CardList::with_player("Alice");
        let mut b = CardList::with_player("Bob");

        let report = play(&mut a, &mut b);
        assert_eq!(report.result, GameResult::NoContest);
        assert_eq!(report.rounds, 0);
    }

    #[test]
    fn test_stalemate_at_round_cap() {
        let mut a = hand("Alice", &["9", "2"]);
        let mut b = hand("Bob", &["3", "4"]);

        let config = WarConfig::default().with_max_rounds(1);
        let report = play_with_config(&mut a, &mut b, config);

        assert_eq!(report.result, GameResult::Stalemate);
        assert_eq!(report.rounds, 1);
        assert_eq!(a.size() + b.size(), 4);
    }

    #[test]
    fn test_mirrored_hands_do_not_cycle() {
        // Each side wins one 9-over-2 round, leaving both hands as [2, 9].
        // Two ties in a row then empty both lists.
        let mut a = hand("Alice", &["9", "2"]);
        let mut b = hand("Bob", &["2", "9"]);

        let report = play(&mut a, &mut b);

        assert_eq!(report.result, GameResult::Draw);
        assert_eq!(report.rounds, 3);
        assert_eq!(report.wars, 2);
    }

    #[test]
    fn test_chained_wars_award_order() {
        let mut a = hand("Alice", &["h 4", "h 1", "h 4", "h 2", "h 9"]);
        let mut b = hand("Bob", &["s 4", "s 1", "s 4", "s 3", "s 5"]);

        let mut game = WarGame::new(&mut a, &mut b);
        assert_eq!(
            game.play_round(),
            Round::Won {
                seat: Seat::First,
                cards: 10,
                wars: 2
            }
        );
        drop(game);

        assert_eq!(
            labels(&a),
            vec!["s 4", "h 4", "s 1", "h 1", "s 4", "h 4", "s 3", "h 2", "s 5", "h 9"]
        );
        assert!(b.is_empty());
    }

    #[test]
    fn test_extra_face_down_cards() {
        let mut a = hand("Alice", &["6", "1", "1", "9"]);
        let mut b = hand("Bob", &["6", "1", "1", "2"]);

        let config = WarConfig::default().with_face_down_cards(2);
        let mut game = WarGame::with_config(&mut a, &mut b, config);

        assert_eq!(
            game.play_round(),
            Round::Won {
                seat: Seat::First,
                cards: 8,
                wars: 1
            }
        );
    }

    #[test]
    fn test_play_round_after_game_over() {
        let mut a = hand("Alice", &["2"]);
        let mut b = hand("Bob", &["9"]);

        let mut game = WarGame::new(&mut a, &mut b);
        assert!(matches!(game.play_round(), Round::Won { seat: Seat::Second, .. }));

        let over = game.play_round();
        assert_eq!(over, game.play_round());
        assert_eq!(game.rounds(), 1);
        assert_eq!(game.report().unwrap().winner_name(), Some("Bob"));
    }
}
