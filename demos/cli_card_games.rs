//! CLI card games example.
//!
//! Run with `RUST_LOG=cardgames=debug` to see engine events on stderr.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardgames::{
    Blackjack, BlackjackPhase, Card, Guess, GuessResult, HigherLower, HigherLowerOptions,
    RoundResult, Suit, SuitColor,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Card games CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut higher_lower = new_higher_lower(false, seed);
    let mut higher_lower_jokers = new_higher_lower(true, seed.wrapping_add(1));
    let mut blackjack = new_blackjack(seed.wrapping_add(2));

    loop {
        println!("\n[h] Higher/Lower  [j] Higher/Lower with Jokers  [b] Blackjack  [r] Rules  [q] Quit");
        match prompt_line("Choice: ").as_str() {
            "h" => play_higher_lower(&mut higher_lower),
            "j" => play_higher_lower(&mut higher_lower_jokers),
            "b" => play_blackjack(&mut blackjack),
            "r" => print_rules(),
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => println!("Unknown choice."),
        }
    }
}

fn new_higher_lower(include_jokers: bool, seed: u64) -> HigherLower {
    let options = HigherLowerOptions::default().with_jokers(include_jokers);
    let mut game = HigherLower::new(options, seed);
    game.subscribe(render_higher_lower);
    game
}

fn new_blackjack(seed: u64) -> Blackjack {
    let mut game = Blackjack::new(seed);
    game.subscribe(render_blackjack);
    game
}

fn play_higher_lower(game: &mut HigherLower) {
    game.start_new_game();

    loop {
        let prompt = if game.is_game_over() {
            "[n]ew game [m]enu: "
        } else {
            "[h]igher [l]ower [n]ew game [m]enu: "
        };

        match prompt_line(prompt).as_str() {
            "h" | "higher" => {
                game.make_guess(Guess::Higher);
            }
            "l" | "lower" => {
                game.make_guess(Guess::Lower);
            }
            "n" | "new" => game.start_new_game(),
            "m" | "menu" | "q" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn play_blackjack(game: &mut Blackjack) {
    game.start_new_game();

    loop {
        let prompt = if game.phase() == BlackjackPhase::PlayerTurn {
            "[h]it [s]tand [n]ew game [m]enu: "
        } else {
            "[n]ew game [m]enu: "
        };

        match prompt_line(prompt).as_str() {
            "h" | "hit" => {
                game.hit();
            }
            "s" | "stand" => {
                game.stand();
            }
            "n" | "new" => game.start_new_game(),
            "m" | "menu" | "q" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn render_higher_lower(game: &HigherLower) {
    println!();
    if let Some(previous) = game.previous_card() {
        println!("Previous: {}", format_card(&previous));
    }
    if let Some(current) = game.current_card() {
        println!("Current:  {}", format_card(&current));
    }
    println!(
        "Score {} | Streak {} | High score {} | {} cards left",
        game.score(),
        game.streak(),
        game.high_score(),
        game.remaining_cards()
    );

    let code = match game.last_result() {
        Some(GuessResult::Correct) => "32",
        Some(GuessResult::Wrong) => "31",
        Some(GuessResult::Push) => "33",
        None => "0",
    };
    println!("{}", colorize(game.last_message(), code));
}

fn render_blackjack(game: &Blackjack) {
    println!();
    let dealer = if game.is_hole_revealed() {
        format_cards(game.dealer_hand().cards())
    } else {
        let mut parts: Vec<String> = game.dealer_up_card().map(format_card).into_iter().collect();
        if game.dealer_hand().len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    };
    println!("Dealer: {dealer} (value {})", game.dealer_visible_value());
    println!(
        "You:    {} (value {})",
        format_cards(game.player_hand().cards()),
        game.player_value()
    );

    if game.is_game_over() {
        let code = match game.result() {
            RoundResult::Win => "32",
            RoundResult::Lose => "31",
            RoundResult::Push => "33",
            RoundResult::InProgress => "0",
        };
        println!("{}", colorize(game.result_message(), code));
    }
}

fn print_rules() {
    println!("\nHigher/Lower");
    println!("  Guess whether the next card is higher or lower. Aces are high.");
    println!("  Equal values are a push. One wrong guess ends the round.");
    println!("  With Jokers, a Joker beats every other card.");
    println!("\nBlackjack");
    println!("  Get closer to 21 than the dealer without going over.");
    println!("  Face cards count 10, Aces 11 or 1. The dealer stands on 17.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit().map(Suit::color) {
        Some(SuitColor::Red) => "31",
        Some(SuitColor::Black) => "34",
        None => "35",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
