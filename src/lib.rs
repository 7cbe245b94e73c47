//! A crazy-ace game engine with optional `no_std` support.
//!
//! Crazy ace is a crazy-eights variant with an inverted win condition: the
//! first player to empty their hand *loses*. The crate provides a [`Game`]
//! type that manages the full flow for one human against a scripted
//! opponent, including dealing, legal-move validation, wild-card (ace) suit
//! selection, stock exhaustion, and win/lose detection. Rendering, input,
//! and the opponent's "thinking" delay belong to a presentation layer that
//! issues intents and observes [`GameView`] snapshots.
//!
//! # Example
//!
//! ```
//! use czars::{Game, GameOptions, GameStatus};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start()?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.human_hand().len(), 10);
//! # Ok::<(), czars::DealError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod message;
pub mod options;
pub mod outcome;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit, WILD_RANK, can_play};
pub use deck::{Deal, ordered_deck, shuffle};
pub use error::{DealError, DrawError, OpponentError, PlayError, SuitError};
pub use game::{
    Game, GameStatus, GameToken, GameView, TurnOwner, select_card, select_suit,
};
pub use message::Narration;
pub use options::GameOptions;
pub use outcome::{DrawOutcome, OpponentAction, PlayOutcome};
