//! Card types and the playability rule.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// All four suits in enumeration order.
///
/// This order is the deck construction order and the tie-break order for the
/// opponent's wild-suit selection.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

impl Suit {
    /// Returns the index of this suit within [`SUITS`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }
}

/// The wild rank. Aces may be played on anything and let the player name the
/// next suit.
pub const WILD_RANK: u8 = 1;

/// A playing card.
///
/// `id` is unique within a single deck instance (`0..52`) and is the handle
/// used to select a card in the play intent. Suit and rank alone are not a
/// stable identity once cards move between zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Deck-unique identifier.
    pub id: u8,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but will never match the wild rank or a standard deck.
    #[must_use]
    pub const fn new(id: u8, suit: Suit, rank: u8) -> Self {
        Self { id, suit, rank }
    }

    /// Returns whether this card carries the wild rank.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.rank == WILD_RANK
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The legality rule: a card may be played if it is wild, its suit matches
/// the effective suit, or its rank matches the top discard's rank.
///
/// Both `top_discard` and `effective_suit` change after every play, so the
/// result is only meaningful against the current position.
///
/// # Example
///
/// ```
/// use czars::{Card, Suit, can_play};
///
/// let top = Card::new(0, Suit::Clubs, 7);
/// assert!(can_play(Card::new(1, Suit::Hearts, 7), top, Suit::Clubs));
/// assert!(can_play(Card::new(2, Suit::Clubs, 3), top, Suit::Clubs));
/// assert!(!can_play(Card::new(3, Suit::Hearts, 3), top, Suit::Clubs));
/// ```
#[must_use]
pub fn can_play(card: Card, top_discard: Card, effective_suit: Suit) -> bool {
    card.is_wild() || card.suit == effective_suit || card.rank == top_discard.rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wild_is_always_playable() {
        let top = Card::new(0, Suit::Clubs, 9);
        for suit in SUITS {
            let ace = Card::new(1, suit, WILD_RANK);
            for effective in SUITS {
                assert!(can_play(ace, top, effective));
            }
        }
    }

    #[test]
    fn suit_and_rank_matches() {
        let top = Card::new(0, Suit::Clubs, 7);
        assert!(can_play(Card::new(1, Suit::Clubs, 2), top, Suit::Clubs));
        assert!(can_play(Card::new(2, Suit::Hearts, 7), top, Suit::Clubs));
        assert!(!can_play(Card::new(3, Suit::Hearts, 2), top, Suit::Clubs));
    }

    #[test]
    fn rank_matches_top_discard_not_effective_suit_source() {
        // Effective suit may differ from the top discard's suit after a wild.
        let top = Card::new(0, Suit::Clubs, 7);
        assert!(can_play(Card::new(1, Suit::Spades, 7), top, Suit::Hearts));
        assert!(!can_play(Card::new(2, Suit::Clubs, 3), top, Suit::Hearts));
    }
}
