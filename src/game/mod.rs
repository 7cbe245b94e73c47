//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::deck::{self, Deal};
use crate::error::DealError;
use crate::message::Narration;
use crate::options::GameOptions;

mod actions;
mod opponent;
pub mod state;

pub use opponent::{select_card, select_suit};
pub use state::{GameStatus, GameToken, TurnOwner};

/// A crazy-ace game engine: one human against a scripted opponent, first to
/// empty their hand loses.
///
/// The game owns the deck, both hands, the discard pile, and the turn state.
/// The presentation layer issues intents ([`play_card`](Game::play_card),
/// [`choose_suit`](Game::choose_suit), [`draw`](Game::draw),
/// [`start`](Game::start)) and observes state through [`view`](Game::view)
/// and the individual accessors.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Draw stock. The top of the stock is kept at the back so a draw is a
    /// `pop`.
    pub stock: Mutex<Vec<Card>>,
    /// Discard pile; only the last element is rules-relevant.
    pub discard: Mutex<Vec<Card>>,
    /// The human's hand. Order is irrelevant to the rules but stable for
    /// display.
    pub human_hand: Mutex<Vec<Card>>,
    /// The opponent's hand.
    pub opponent_hand: Mutex<Vec<Card>>,
    /// The suit that must be matched next; differs from the top discard's
    /// suit after a wild.
    pub effective_suit: Mutex<Option<Suit>>,
    /// Whose turn it is.
    pub turn: Mutex<TurnOwner>,
    /// Current game status.
    pub status: Mutex<GameStatus>,
    /// Wild card awaiting a suit choice. The card stays in the human's hand
    /// until the choice arrives.
    pending_wild: Mutex<Option<Card>>,
    /// Current narration line.
    narration: Mutex<Narration>,
    /// Latch set on the transition into `HumanWon`.
    celebration: Mutex<bool>,
    /// Bumped on every start; stale opponent steps are rejected against it.
    generation: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

/// One observable snapshot of the game, shaped for the presentation layer.
///
/// The opponent's hand is exposed only as a count.
#[derive(Debug, Clone)]
pub struct GameView {
    /// The human's hand.
    pub human_hand: Vec<Card>,
    /// Number of cards the opponent holds.
    pub opponent_hand_len: usize,
    /// Number of cards left in the draw stock.
    pub stock_len: usize,
    /// Top card of the discard pile.
    pub top_discard: Option<Card>,
    /// The suit that must be matched next.
    pub effective_suit: Option<Suit>,
    /// Whose turn it is.
    pub turn: TurnOwner,
    /// Current game status.
    pub status: GameStatus,
    /// Human-readable status line.
    pub message: String,
    /// Whether an opponent step is owed (turn = opponent, game running).
    pub opponent_deciding: bool,
}

impl Game {
    /// Creates a new game with the given seed. Nothing is dealt until
    /// [`start`](Game::start).
    ///
    /// # Example
    ///
    /// ```
    /// use czars::{Game, GameOptions, GameStatus};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), GameStatus::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            stock: Mutex::new(Vec::new()),
            discard: Mutex::new(Vec::new()),
            human_hand: Mutex::new(Vec::new()),
            opponent_hand: Mutex::new(Vec::new()),
            effective_suit: Mutex::new(None),
            turn: Mutex::new(TurnOwner::Human),
            status: Mutex::new(GameStatus::NotStarted),
            pending_wild: Mutex::new(None),
            narration: Mutex::new(Narration::PressStart),
            celebration: Mutex::new(false),
            generation: AtomicU32::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Starts a new game, serving both the start and restart intents.
    ///
    /// All prior state is discarded: a fresh deck is shuffled and dealt, the
    /// human takes the first turn, and every token captured before this call
    /// becomes stale.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.hand_size` cannot be covered by the deck.
    pub fn start(&self) -> Result<(), DealError> {
        let mut cards = deck::ordered_deck();
        deck::shuffle(&mut cards, &mut self.rng.lock());
        let deal = Deal::deal(cards, self.options.hand_size)?;

        // Invalidate any opponent step scheduled against the previous game.
        self.generation.fetch_add(1, Ordering::SeqCst);

        let seed_suit = deal.discard.last().map(|card| card.suit);

        let mut stock = deal.stock;
        stock.reverse();

        *self.stock.lock() = stock;
        *self.discard.lock() = deal.discard;
        *self.human_hand.lock() = deal.human;
        *self.opponent_hand.lock() = deal.opponent;
        *self.effective_suit.lock() = seed_suit;
        *self.turn.lock() = TurnOwner::Human;
        *self.status.lock() = GameStatus::InProgress;
        *self.pending_wild.lock() = None;
        *self.narration.lock() = Narration::YourTurn;
        *self.celebration.lock() = false;

        Ok(())
    }

    /// Returns a token tied to the current game instance.
    ///
    /// Pass it back through [`opponent_step`](Game::opponent_step); the step
    /// is rejected if a restart happened in between.
    #[must_use]
    pub fn token(&self) -> GameToken {
        GameToken(self.generation.load(Ordering::SeqCst))
    }

    /// Runs the terminal check after a hand-reducing move.
    ///
    /// The human's hand is checked first, always; this ordering is part of
    /// the engine's contract. Returns `true` if the game ended.
    fn check_terminal(&self) -> bool {
        if self.human_hand.lock().is_empty() {
            *self.status.lock() = GameStatus::HumanLost;
            *self.narration.lock() = Narration::HumanLost;
            return true;
        }

        if self.opponent_hand.lock().is_empty() {
            *self.status.lock() = GameStatus::HumanWon;
            *self.narration.lock() = Narration::HumanWon;
            *self.celebration.lock() = true;
            return true;
        }

        false
    }

    /// Returns a clone of the human's hand.
    #[must_use]
    pub fn human_hand(&self) -> Vec<Card> {
        self.human_hand.lock().clone()
    }

    /// Returns how many cards the opponent holds.
    #[must_use]
    pub fn opponent_hand_len(&self) -> usize {
        self.opponent_hand.lock().len()
    }

    /// Returns how many cards remain in the draw stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.lock().len()
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.lock().last().copied()
    }

    /// Returns the suit that must be matched next.
    ///
    /// Always `Some` while the game is in progress.
    #[must_use]
    pub fn effective_suit(&self) -> Option<Suit> {
        *self.effective_suit.lock()
    }

    /// Returns whose turn it is.
    #[must_use]
    pub fn turn(&self) -> TurnOwner {
        *self.turn.lock()
    }

    /// Returns the current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        *self.status.lock()
    }

    /// Returns the wild card awaiting a suit choice, if any.
    #[must_use]
    pub fn pending_wild(&self) -> Option<Card> {
        *self.pending_wild.lock()
    }

    /// Returns whether an opponent step is owed.
    ///
    /// While this is `true` the engine rejects human intents; the
    /// presentation layer typically shows a "thinking" indicator and
    /// schedules [`opponent_step`](Game::opponent_step) after its delay.
    #[must_use]
    pub fn is_opponent_deciding(&self) -> bool {
        *self.status.lock() == GameStatus::InProgress && *self.turn.lock() == TurnOwner::Opponent
    }

    /// Returns the current narration line.
    #[must_use]
    pub fn narration(&self) -> Narration {
        *self.narration.lock()
    }

    /// Returns the current narration line as text.
    #[must_use]
    pub fn message(&self) -> String {
        self.narration.lock().to_string()
    }

    /// Returns whether a win celebration is due, clearing the latch.
    ///
    /// The latch is set exactly once per transition into
    /// [`GameStatus::HumanWon`], so the effect fires once per won game.
    pub fn take_celebration(&self) -> bool {
        let mut celebration = self.celebration.lock();
        core::mem::replace(&mut *celebration, false)
    }

    /// Returns one consistent snapshot of everything the presentation layer
    /// may observe.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            human_hand: self.human_hand(),
            opponent_hand_len: self.opponent_hand_len(),
            stock_len: self.stock_len(),
            top_discard: self.top_discard(),
            effective_suit: self.effective_suit(),
            turn: self.turn(),
            status: self.status(),
            message: self.message(),
            opponent_deciding: self.is_opponent_deciding(),
        }
    }

    fn set_narration(&self, narration: Narration) {
        *self.narration.lock() = narration;
    }
}
