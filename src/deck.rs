//! Deck construction, shuffling, and the opening deal.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::DealError;

/// Builds the 52 distinct (suit, rank) combinations in deterministic order,
/// with ids assigned `0..52`.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut id: u8 = 0;

    for suit in SUITS {
        for rank in 1..=13 {
            cards.push(Card::new(id, suit, rank));
            id += 1;
        }
    }

    cards
}

/// Shuffles the deck in place with a uniform Fisher-Yates permutation.
///
/// All randomness comes from the passed RNG, so a seeded RNG gives a
/// reproducible deal.
pub fn shuffle(cards: &mut [Card], rng: &mut ChaCha8Rng) {
    cards.shuffle(rng);
}

/// The four zones produced by the opening deal.
///
/// Cards are consumed from the front of the deck: `hand_size` to the human,
/// `hand_size` to the opponent, one card to seed the discard pile, and the
/// remainder becomes the draw stock. With the default hand size of 10 the
/// split is exactly 10 + 10 + 1 + 31 = 52.
#[derive(Debug, Clone)]
pub struct Deal {
    /// The human's starting hand.
    pub human: Vec<Card>,
    /// The opponent's starting hand.
    pub opponent: Vec<Card>,
    /// The discard pile, seeded with a single card.
    pub discard: Vec<Card>,
    /// The remaining draw stock, drawn from the front.
    pub stock: Vec<Card>,
}

impl Deal {
    /// Splits a (shuffled) deck into the four starting zones.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover two hands plus the seeded
    /// discard.
    pub fn deal(mut cards: Vec<Card>, hand_size: usize) -> Result<Self, DealError> {
        if cards.len() < 2 * hand_size + 1 {
            return Err(DealError::NotEnoughCards);
        }

        let human: Vec<Card> = cards.drain(..hand_size).collect();
        let opponent: Vec<Card> = cards.drain(..hand_size).collect();
        let discard: Vec<Card> = cards.drain(..1).collect();

        Ok(Self {
            human,
            opponent,
            discard,
            stock: cards,
        })
    }
}
