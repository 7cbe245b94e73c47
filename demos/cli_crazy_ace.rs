//! CLI crazy-ace example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use czars::{
    Card, DrawOutcome, Game, GameOptions, GameStatus, OpponentAction, PlayOutcome, Suit,
};

const THINKING_DELAY: Duration = Duration::from_millis(900);

fn main() {
    println!("Crazy Ace CLI example (first to empty their hand LOSES; type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    if let Err(err) = game.start() {
        println!("Deal error: {err:?}");
        return;
    }

    loop {
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::HumanWon | GameStatus::HumanLost => {
                print_table(&game);
                println!("{}", game.message());
                if game.take_celebration() {
                    celebrate();
                }
                if prompt_line("Play again? (y/n): ").starts_with('y') {
                    if let Err(err) = game.start() {
                        println!("Deal error: {err:?}");
                        return;
                    }
                    continue;
                }
                println!("Goodbye.");
                return;
            }
            GameStatus::NotStarted => return,
        }

        if game.is_opponent_deciding() {
            // The delay is pacing only; the token keeps a restart from being
            // overwritten by this step.
            let token = game.token();
            println!("{}", game.message());
            thread::sleep(THINKING_DELAY);

            match game.opponent_step(token) {
                Ok(OpponentAction::Played { card, named_suit }) => {
                    print!("Opponent played {}.", format_card(&card));
                    if let Some(suit) = named_suit {
                        print!(" It names {}.", suit_name(suit));
                    }
                    println!();
                }
                Ok(OpponentAction::Drew) => println!("Opponent drew a card."),
                Ok(OpponentAction::Passed) => println!("Deck is empty; opponent passed."),
                Err(err) => println!("Opponent step skipped: {err:?}"),
            }
            continue;
        }

        print_table(&game);
        println!("{}", game.message());

        if game.pending_wild().is_some() {
            let Some(suit) = prompt_suit() else { return };
            if let Err(err) = game.choose_suit(suit) {
                println!("Suit error: {err:?}");
            }
            continue;
        }

        let input = prompt_line("Card to play (e.g. 7h, ad), [d]raw, [r]estart, [q]uit: ");
        match input.as_str() {
            "q" | "quit" => return,
            "r" | "restart" => {
                if let Err(err) = game.start() {
                    println!("Deal error: {err:?}");
                    return;
                }
            }
            "d" | "draw" => match game.draw() {
                Ok(DrawOutcome::Drawn { card, playable }) => {
                    print!("You drew {}.", format_card(&card));
                    println!("{}", if playable { " You may play it." } else { "" });
                }
                Ok(DrawOutcome::StockEmpty) => {}
                Err(err) => println!("Draw error: {err:?}"),
            },
            label => match find_card(&game, label) {
                Some(card) => match game.play_card(card.id) {
                    Ok(PlayOutcome::Played | PlayOutcome::SuitChoiceRequired) => {}
                    Err(err) => println!("Play error: {err:?}"),
                },
                None => println!("No such card in your hand."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_suit() -> Option<Suit> {
    loop {
        let input = prompt_line("Name a suit ([h]earts, [d]iamonds, [c]lubs, [s]pades): ");
        match input.as_str() {
            "q" | "quit" => return None,
            "h" | "hearts" => return Some(Suit::Hearts),
            "d" | "diamonds" => return Some(Suit::Diamonds),
            "c" | "clubs" => return Some(Suit::Clubs),
            "s" | "spades" => return Some(Suit::Spades),
            _ => println!("Please name a suit."),
        }
    }
}

fn find_card(game: &Game, label: &str) -> Option<Card> {
    let (rank_text, suit_text) = label.split_at(label.len().checked_sub(1)?);

    let suit = match suit_text {
        "h" => Suit::Hearts,
        "d" => Suit::Diamonds,
        "c" => Suit::Clubs,
        "s" => Suit::Spades,
        _ => return None,
    };

    let rank: u8 = match rank_text {
        "a" => 1,
        "j" => 11,
        "q" => 12,
        "k" => 13,
        other => other.parse().ok()?,
    };

    game.human_hand()
        .into_iter()
        .find(|card| card.suit == suit && card.rank == rank)
}

fn print_table(game: &Game) {
    let view = game.view();

    println!("\nDeck: {} cards | Opponent holds {}", view.stock_len, view.opponent_hand_len);

    if let Some(top) = view.top_discard {
        print!("Discard: {}", format_card(&top));
        if let Some(suit) = view.effective_suit {
            print!(" | suit to match: {}", suit_name(suit));
        }
        println!();
    }

    let hand = view
        .human_hand
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Your hand: {hand}\n");
}

fn celebrate() {
    println!("{}", colorize("*** You win! ***", "33"));
}

const fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "hearts",
        Suit::Diamonds => "diamonds",
        Suit::Clubs => "clubs",
        Suit::Spades => "spades",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{}{}", colorize(&rank, color_code), colorize(suit, color_code))
}
