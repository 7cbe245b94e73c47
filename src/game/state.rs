//! Game state types.

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No game has been dealt yet.
    NotStarted,
    /// A game is being played.
    InProgress,
    /// The opponent emptied its hand first; the human wins.
    HumanWon,
    /// The human emptied their hand first; the human loses.
    HumanLost,
}

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOwner {
    /// The human player.
    Human,
    /// The scripted opponent.
    Opponent,
}

/// Opaque handle tied to one game instance.
///
/// Capture a token with [`Game::token`](super::Game::token) when scheduling a
/// delayed opponent step. A restart invalidates all previously captured
/// tokens, so a late-arriving step can never mutate a superseded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameToken(pub(crate) u32);
