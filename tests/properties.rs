//! Property tests over random seeds and positions.

use proptest::prelude::*;

use czars::{
    Card, DECK_SIZE, Game, GameOptions, GameStatus, PlayOutcome, SUITS, Suit, TurnOwner, WILD_RANK,
    can_play,
};

fn zone_ids(game: &Game) -> Vec<u8> {
    let mut ids: Vec<u8> = Vec::with_capacity(DECK_SIZE);
    ids.extend(game.stock.lock().iter().map(|c| c.id));
    ids.extend(game.human_hand.lock().iter().map(|c| c.id));
    ids.extend(game.opponent_hand.lock().iter().map(|c| c.id));
    ids.extend(game.discard.lock().iter().map(|c| c.id));
    ids
}

/// Plays one human step with a naive first-playable policy.
fn human_step(game: &Game) {
    let top = game.top_discard().expect("discard seeded in progress");
    let suit = game.effective_suit().expect("suit defined in progress");
    let playable = game
        .human_hand()
        .into_iter()
        .find(|c| can_play(*c, top, suit));

    match playable {
        Some(card) => {
            if game.play_card(card.id).expect("card was playable")
                == PlayOutcome::SuitChoiceRequired
            {
                game.choose_suit(Suit::Hearts).expect("wild was pending");
            }
        }
        None => {
            game.draw().expect("draw is legal on the human's turn");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_seeded_games_conserve_all_52_cards(seed in any::<u64>()) {
        let game = Game::new(GameOptions::default(), seed);
        game.start().expect("default split always fits");

        let mut steps = 0;
        while game.status() == GameStatus::InProgress && steps < 500 {
            steps += 1;
            match game.turn() {
                TurnOwner::Human => human_step(&game),
                TurnOwner::Opponent => {
                    game.opponent_step(game.token()).expect("step is legal");
                }
            }

            let mut ids = zone_ids(&game);
            prop_assert_eq!(ids.len(), DECK_SIZE);
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), DECK_SIZE, "duplicate ids across zones");

            if game.status() == GameStatus::InProgress {
                prop_assert!(game.effective_suit().is_some());
            }
        }

        // A finished game has exactly one empty hand, never both.
        match game.status() {
            GameStatus::HumanLost => {
                prop_assert!(game.human_hand().is_empty());
                prop_assert!(game.opponent_hand_len() > 0);
            }
            GameStatus::HumanWon => {
                prop_assert_eq!(game.opponent_hand_len(), 0);
                prop_assert!(!game.human_hand().is_empty());
            }
            GameStatus::InProgress => {} // stalled game, hit the step cap
            GameStatus::NotStarted => prop_assert!(false, "game was started"),
        }
    }

    #[test]
    fn wild_rank_is_playable_against_any_position(
        top_suit in 0usize..4,
        top_rank in 1u8..=13,
        wild_suit in 0usize..4,
        effective in 0usize..4,
    ) {
        let top = Card::new(0, SUITS[top_suit], top_rank);
        let wild = Card::new(1, SUITS[wild_suit], WILD_RANK);
        prop_assert!(can_play(wild, top, SUITS[effective]));
    }
}
