//! Intent outcome types.
//!
//! Every intent that can resolve in more than one legal way reports what it
//! did, so the presentation layer reacts to the outcome instead of diffing
//! game state.

use crate::card::{Card, Suit};

/// Result of a legal `play_card` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card reached the discard pile; the turn flipped unless the game
    /// ended.
    Played,
    /// The card is wild and is held back until a suit is chosen. The hand and
    /// discard pile are unchanged.
    SuitChoiceRequired,
}

/// Result of a legal `draw` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card moved from the stock into the human's hand.
    Drawn {
        /// The drawn card.
        card: Card,
        /// Whether the card was playable at the moment it was drawn. If so
        /// the turn stays with the human; it is never auto-played.
        playable: bool,
    },
    /// The stock was empty; the turn passed with both hands unchanged.
    StockEmpty,
}

/// What the opponent did during its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentAction {
    /// The opponent played a card.
    Played {
        /// The card it played.
        card: Card,
        /// The suit it named, when the card was wild.
        named_suit: Option<Suit>,
    },
    /// Nothing was playable; the opponent drew one card and passed. The
    /// drawn card is never played in the same step.
    Drew,
    /// Nothing was playable and the stock was empty; the opponent passed.
    Passed,
}
