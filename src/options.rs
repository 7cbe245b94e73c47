//! Game configuration options.

use crate::card::Suit;

/// Configuration options for a crazy-ace game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use czars::{GameOptions, Suit};
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_fallback_suit(Suit::Hearts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player. The standard deal is 10, which splits the
    /// deck into 10 + 10 + 1 + 31.
    pub hand_size: usize,
    /// Suit the opponent names for a wild card when its remaining hand is
    /// empty.
    pub fallback_suit: Suit,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 10,
            fallback_suit: Suit::Spades,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use czars::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the opponent's fallback suit for a last-card wild.
    ///
    /// # Example
    ///
    /// ```
    /// use czars::{GameOptions, Suit};
    ///
    /// let options = GameOptions::default().with_fallback_suit(Suit::Diamonds);
    /// assert_eq!(options.fallback_suit, Suit::Diamonds);
    /// ```
    #[must_use]
    pub const fn with_fallback_suit(mut self, suit: Suit) -> Self {
        self.fallback_suit = suit;
        self
    }
}
