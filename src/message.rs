//! User-facing narration lines.
//!
//! These are informational only. Rule rejections are reported through the
//! intent `Result`s, never through the narration.

use core::fmt;

/// The current one-line narration shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narration {
    /// No game has been started yet.
    PressStart,
    /// The human may play or draw.
    YourTurn,
    /// A wild card is waiting for a suit choice.
    ChooseSuit,
    /// The human drew a card they may play.
    DrewPlayable,
    /// The human drew a card that keeps nothing open; turn passed.
    DrewUnplayable,
    /// The stock was empty on the human's draw; turn skipped.
    StockEmptySkipped,
    /// The opponent's move is pending.
    OpponentThinking,
    /// The opponent played a card.
    OpponentPlayed,
    /// The opponent drew a card and passed.
    OpponentDrew,
    /// The stock was empty on the opponent's turn; it passed.
    OpponentSkipped,
    /// The opponent emptied its hand first.
    HumanWon,
    /// The human emptied their hand first.
    HumanLost,
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PressStart => "Press start to begin.",
            Self::YourTurn => "Your turn. Play a card or draw.",
            Self::ChooseSuit => "Choose a suit for your ace.",
            Self::DrewPlayable => "You drew a playable card.",
            Self::DrewUnplayable => "Nothing playable. Opponent's turn.",
            Self::StockEmptySkipped => "The deck is empty, your turn is skipped.",
            Self::OpponentThinking => "Opponent is thinking...",
            Self::OpponentPlayed => "Opponent played a card. Your turn.",
            Self::OpponentDrew => "Opponent drew a card. Your turn.",
            Self::OpponentSkipped => "The deck is empty, opponent skipped. Your turn.",
            Self::HumanWon => "The opponent ran out of cards. You win!",
            Self::HumanLost => "You ran out of cards. You lose.",
        };
        f.write_str(text)
    }
}
