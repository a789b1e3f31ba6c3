//! Standard 52-card deck and seeded dealing.

use crate::core::{Card, CardList, GameRng, Rank};

const SUITS: [char; 4] = ['c', 'd', 'h', 's'];

/// All 52 cards, labelled `"<suit> <rank>"` like the hand files.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    SUITS
        .iter()
        .flat_map(|&suit| {
            (2..=Rank::ACE.value()).map(move |value| {
                let rank = Rank::new(value);
                let token = match rank {
                    Rank::JACK => "j".to_string(),
                    Rank::QUEEN => "q".to_string(),
                    Rank::KING => "k".to_string(),
                    Rank::ACE => "a".to_string(),
                    _ => value.to_string(),
                };
                Card::with_rank(format!("{} {}", suit, token), rank)
            })
        })
        .collect()
}

/// Shuffle a standard deck with `seed` and deal it alternately, first seat first.
///
/// The same seed always produces the same two hands.
pub fn deal(seed: u64, first: &mut CardList, second: &mut CardList) {
    let mut deck = standard_deck();
    let mut rng = GameRng::new(seed);
    rng.shuffle(&mut deck);

    for (i, card) in deck.into_iter().enumerate() {
        if i % 2 == 0 {
            first.push_back(card);
        } else {
            second.push_back(card);
        }
    }
}
