use crate::card::{Suit, can_play};
use crate::error::{DrawError, PlayError, SuitError};
use crate::message::Narration;
use crate::outcome::{DrawOutcome, PlayOutcome};

use super::{Game, GameStatus, TurnOwner};

impl Game {
    /// Human intent: play a card by its id.
    ///
    /// A non-wild card moves to the discard pile, the effective suit becomes
    /// the card's own suit, and the turn flips to the opponent unless the
    /// play ended the game. A wild card does not move yet: it is held as
    /// pending and [`PlayOutcome::SuitChoiceRequired`] is returned; complete
    /// it with [`choose_suit`](Game::choose_suit).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, it is not the
    /// human's turn, a suit choice is already pending, the card is not in
    /// the human's hand, or the card is not playable.
    pub fn play_card(&self, card_id: u8) -> Result<PlayOutcome, PlayError> {
        if *self.status.lock() != GameStatus::InProgress {
            return Err(PlayError::InvalidState);
        }
        if *self.turn.lock() != TurnOwner::Human {
            return Err(PlayError::NotYourTurn);
        }
        if self.pending_wild.lock().is_some() {
            return Err(PlayError::SuitChoicePending);
        }

        let card = self
            .human_hand
            .lock()
            .iter()
            .find(|card| card.id == card_id)
            .copied()
            .ok_or(PlayError::CardNotInHand)?;

        let top = self.top_discard().ok_or(PlayError::InvalidState)?;
        let suit = self.effective_suit().ok_or(PlayError::InvalidState)?;
        if !can_play(card, top, suit) {
            return Err(PlayError::NotPlayable);
        }

        if card.is_wild() {
            // Held back until a suit is chosen; hand and discard untouched.
            *self.pending_wild.lock() = Some(card);
            self.set_narration(Narration::ChooseSuit);
            return Ok(PlayOutcome::SuitChoiceRequired);
        }

        self.human_hand.lock().retain(|c| c.id != card.id);
        self.discard.lock().push(card);
        *self.effective_suit.lock() = Some(card.suit);

        if !self.check_terminal() {
            *self.turn.lock() = TurnOwner::Opponent;
            self.set_narration(Narration::OpponentThinking);
        }

        Ok(PlayOutcome::Played)
    }

    /// Human intent: name a suit for the pending wild card.
    ///
    /// Completes the deferred play: the wild card moves to the discard pile
    /// and the effective suit becomes the chosen suit, not the card's own.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or no wild card is
    /// pending.
    pub fn choose_suit(&self, suit: Suit) -> Result<(), SuitError> {
        if *self.status.lock() != GameStatus::InProgress {
            return Err(SuitError::InvalidState);
        }

        let card = self
            .pending_wild
            .lock()
            .take()
            .ok_or(SuitError::NoPendingWild)?;

        self.human_hand.lock().retain(|c| c.id != card.id);
        self.discard.lock().push(card);
        *self.effective_suit.lock() = Some(suit);

        if !self.check_terminal() {
            *self.turn.lock() = TurnOwner::Opponent;
            self.set_narration(Narration::OpponentThinking);
        }

        Ok(())
    }

    /// Human intent: draw the top card of the stock.
    ///
    /// An empty stock passes the turn with both hands unchanged. A drawn
    /// card that is playable keeps the turn with the human (it is never
    /// auto-played); an unplayable one passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, it is not the
    /// human's turn, or a suit choice is pending.
    pub fn draw(&self) -> Result<DrawOutcome, DrawError> {
        if *self.status.lock() != GameStatus::InProgress {
            return Err(DrawError::InvalidState);
        }
        if *self.turn.lock() != TurnOwner::Human {
            return Err(DrawError::NotYourTurn);
        }
        if self.pending_wild.lock().is_some() {
            return Err(DrawError::SuitChoicePending);
        }

        let Some(card) = self.stock.lock().pop() else {
            *self.turn.lock() = TurnOwner::Opponent;
            self.set_narration(Narration::StockEmptySkipped);
            return Ok(DrawOutcome::StockEmpty);
        };

        self.human_hand.lock().push(card);

        let playable = match (self.top_discard(), self.effective_suit()) {
            (Some(top), Some(suit)) => can_play(card, top, suit),
            _ => false,
        };

        if playable {
            self.set_narration(Narration::DrewPlayable);
        } else {
            *self.turn.lock() = TurnOwner::Opponent;
            self.set_narration(Narration::DrewUnplayable);
        }

        Ok(DrawOutcome::Drawn { card, playable })
    }
}
