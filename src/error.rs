//! Error types for game intents.
//!
//! Illegal intents leave the game untouched; a presentation layer that wants
//! the silent no-op behavior simply discards the `Err`. The variants exist so
//! rejections stay observable in tests.

use thiserror::Error;

/// Errors that can occur when dealing the opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot cover both hands plus the seeded discard.
    #[error("not enough cards for the opening deal")]
    NotEnoughCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// It is not the human's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// A wild card is awaiting a suit choice.
    #[error("a suit choice is pending")]
    SuitChoicePending,
    /// The card is not in the human's hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The card does not match the effective suit or top discard rank.
    #[error("card is not playable")]
    NotPlayable,
}

/// Errors that can occur when choosing a suit for a wild card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// No wild card is awaiting a suit choice.
    #[error("no wild card is pending")]
    NoPendingWild,
}

/// Errors that can occur when drawing from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// It is not the human's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// A wild card is awaiting a suit choice.
    #[error("a suit choice is pending")]
    SuitChoicePending,
}

/// Errors that can occur when running the opponent's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpponentError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// It is not the opponent's turn.
    #[error("not the opponent's turn")]
    NotOpponentTurn,
    /// The token belongs to a superseded game instance.
    #[error("stale game token")]
    Stale,
}
