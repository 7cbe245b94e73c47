//! Opponent decision logic.
//!
//! Selection is a pure function of hand + top discard + effective suit, so it
//! stays testable without timers. [`Game::opponent_step`] is the
//! side-effecting wrapper that applies one selected move; a presentation
//! layer schedules it after its "thinking" delay and hands back the token it
//! captured when the turn flipped.

use crate::card::{Card, SUITS, Suit, can_play};
use crate::error::OpponentError;
use crate::message::Narration;
use crate::outcome::OpponentAction;

use super::{Game, GameStatus, GameToken, TurnOwner};

/// Picks the index of the card the opponent plays, if any.
///
/// Any non-wild playable card is preferred over a wild one; ties go to hand
/// order. Wilds are only played when nothing else is playable.
#[must_use]
pub fn select_card(hand: &[Card], top_discard: Card, effective_suit: Suit) -> Option<usize> {
    let mut wild = None;

    for (index, card) in hand.iter().enumerate() {
        if !can_play(*card, top_discard, effective_suit) {
            continue;
        }
        if card.is_wild() {
            wild.get_or_insert(index);
        } else {
            return Some(index);
        }
    }

    wild
}

/// Picks the suit the opponent names for a wild card.
///
/// The most-held suit of the remaining hand wins, ties broken by [`SUITS`]
/// order; an empty hand yields `fallback`.
#[must_use]
pub fn select_suit(remaining: &[Card], fallback: Suit) -> Suit {
    if remaining.is_empty() {
        return fallback;
    }

    let mut counts = [0usize; 4];
    for card in remaining {
        counts[card.suit.index()] += 1;
    }

    let mut best = SUITS[0];
    for suit in SUITS {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}

impl Game {
    /// Runs the opponent's turn as one atomic step.
    ///
    /// Plays the selected card (naming a suit when it is wild, chosen from
    /// the hand *after* removal), or draws one card and passes when nothing
    /// is playable, or passes outright on an empty stock. A drawn card is
    /// never played in the same step.
    ///
    /// # Errors
    ///
    /// Returns an error if the token belongs to a superseded game instance,
    /// the game is not in progress, or it is not the opponent's turn. A
    /// rejected step mutates nothing.
    pub fn opponent_step(&self, token: GameToken) -> Result<OpponentAction, OpponentError> {
        if token != self.token() {
            return Err(OpponentError::Stale);
        }
        if *self.status.lock() != GameStatus::InProgress {
            return Err(OpponentError::InvalidState);
        }
        if *self.turn.lock() != TurnOwner::Opponent {
            return Err(OpponentError::NotOpponentTurn);
        }

        let top = self.top_discard().ok_or(OpponentError::InvalidState)?;
        let suit = self.effective_suit().ok_or(OpponentError::InvalidState)?;

        let choice = {
            let hand = self.opponent_hand.lock();
            select_card(&hand, top, suit).map(|index| hand[index])
        };

        let Some(card) = choice else {
            return Ok(self.opponent_draw_and_pass());
        };

        self.opponent_hand.lock().retain(|c| c.id != card.id);
        self.discard.lock().push(card);

        let named_suit = if card.is_wild() {
            let named = {
                let remaining = self.opponent_hand.lock();
                select_suit(&remaining, self.options.fallback_suit)
            };
            *self.effective_suit.lock() = Some(named);
            Some(named)
        } else {
            *self.effective_suit.lock() = Some(card.suit);
            None
        };

        if !self.check_terminal() {
            *self.turn.lock() = TurnOwner::Human;
            self.set_narration(Narration::OpponentPlayed);
        }

        Ok(OpponentAction::Played { card, named_suit })
    }

    fn opponent_draw_and_pass(&self) -> OpponentAction {
        let drawn = self.stock.lock().pop();

        let action = match drawn {
            Some(card) => {
                self.opponent_hand.lock().push(card);
                self.set_narration(Narration::OpponentDrew);
                OpponentAction::Drew
            }
            None => {
                self.set_narration(Narration::OpponentSkipped);
                OpponentAction::Passed
            }
        };

        *self.turn.lock() = TurnOwner::Human;
        action
    }
}
