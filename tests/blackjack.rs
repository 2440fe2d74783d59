//! Blackjack engine tests.

extern crate alloc;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use cardgames::{
    Blackjack, BlackjackPhase, Card, DEALER_STANDS_ON, Deck, DeckError, RoundResult,
};

fn card(notation: &str) -> Card {
    notation.parse().unwrap()
}

/// Builds a game whose deck deals `draws` in order: player, dealer, player,
/// dealer, then any hits and dealer draws.
fn stacked(draws: &[&str]) -> Blackjack {
    let deck = Deck::stacked(draws.iter().map(|c| card(c)).collect()).unwrap();
    Blackjack::with_deck(deck).unwrap()
}

fn count_notifications(game: &mut Blackjack) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    game.subscribe(move |_: &Blackjack| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut game = stacked(&["5H", "9C", "6S", "7D"]);
    assert_eq!(game.phase(), BlackjackPhase::NotStarted);

    game.start_new_game();

    assert_eq!(game.phase(), BlackjackPhase::PlayerTurn);
    assert_eq!(game.player_hand().cards(), &[card("5H"), card("6S")]);
    assert_eq!(game.dealer_hand().cards(), &[card("9C"), card("7D")]);
    assert_eq!(game.player_value(), 11);
    assert_eq!(game.dealer_value(), 16);
    assert_eq!(game.result(), RoundResult::InProgress);
    assert_eq!(game.result_message(), "");
}

#[test]
fn hole_card_hidden_until_stand() {
    let mut game = stacked(&["10H", "AC", "8D", "6S", "5C"]);
    game.start_new_game();

    assert!(!game.is_hole_revealed());
    assert_eq!(game.dealer_up_card(), Some(&card("AC")));
    assert_eq!(game.dealer_visible_value(), 11);

    game.stand();
    assert!(game.is_hole_revealed());
    assert_eq!(game.dealer_visible_value(), game.dealer_value());
}

#[test]
fn natural_resolves_immediately() {
    let mut game = stacked(&["AS", "9H", "KD", "7C", "5C"]);
    let notifications = count_notifications(&mut game);

    game.start_new_game();

    assert!(game.is_game_over());
    assert!(game.has_player_stood());
    assert!(game.player_hand().is_blackjack());
    assert_eq!(game.dealer_value(), 21);
    assert_eq!(game.result(), RoundResult::Push);
    assert_eq!(game.result_message(), "PUSH! It's a tie at 21.");
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn natural_beats_dealer_short_of_21() {
    let mut game = stacked(&["AS", "10H", "KD", "8C"]);
    game.start_new_game();

    assert!(game.is_game_over());
    assert_eq!(game.result(), RoundResult::Win);
    assert_eq!(game.result_message(), "YOU WIN! 21 beats 18!");
}

#[test]
fn hit_over_21_busts() {
    let mut game = stacked(&["10H", "9C", "6D", "8S", "KC"]);
    game.start_new_game();

    assert_eq!(game.hit(), Some(card("KC")));

    assert!(game.is_game_over());
    assert!(game.is_player_busted());
    assert!(!game.has_player_stood());
    assert_eq!(game.player_value(), 26);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.result(), RoundResult::Lose);
    assert_eq!(game.result_message(), "BUST! You went over 21!");
    assert_eq!(game.phase(), BlackjackPhase::RoundOver);
}

#[test]
fn hit_to_21_stands_with_one_notification() {
    let mut game = stacked(&["5H", "10C", "6D", "8S", "10D"]);
    game.start_new_game();
    let notifications = count_notifications(&mut game);

    assert_eq!(game.hit(), Some(card("10D")));

    assert_eq!(notifications.load(Ordering::SeqCst), 1);
    assert!(game.has_player_stood());
    assert!(game.is_game_over());
    assert_eq!(game.player_value(), 21);
    assert_eq!(game.result(), RoundResult::Win);
    assert_eq!(game.result_message(), "YOU WIN! 21 beats 18!");
}

#[test]
fn hit_below_21_continues() {
    let mut game = stacked(&["2H", "10C", "3D", "8S", "4C"]);
    game.start_new_game();
    let notifications = count_notifications(&mut game);

    assert_eq!(game.hit(), Some(card("4C")));

    assert_eq!(notifications.load(Ordering::SeqCst), 1);
    assert_eq!(game.player_value(), 9);
    assert!(!game.is_game_over());
    assert_eq!(game.phase(), BlackjackPhase::PlayerTurn);
}

#[test]
fn dealer_busts() {
    let mut game = stacked(&["10H", "6C", "8D", "10S", "9C"]);
    game.start_new_game();

    assert_eq!(game.stand(), Some(RoundResult::Win));

    assert!(game.is_dealer_busted());
    assert_eq!(game.dealer_value(), 25);
    assert_eq!(game.result_message(), "Dealer BUSTS! You win!");
}

#[test]
fn dealer_wins_on_higher_total() {
    let mut game = stacked(&["10H", "10C", "7D", "9S"]);
    game.start_new_game();

    assert_eq!(game.stand(), Some(RoundResult::Lose));
    assert_eq!(game.result_message(), "Dealer wins. 19 beats 17.");
    assert!(!game.is_dealer_busted());
}

#[test]
fn equal_totals_push() {
    let mut game = stacked(&["10H", "10C", "8D", "8S"]);
    game.start_new_game();

    assert_eq!(game.stand(), Some(RoundResult::Push));
    assert_eq!(game.result_message(), "PUSH! It's a tie at 18.");
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut game = stacked(&["10H", "AC", "8D", "6S", "5C"]);
    game.start_new_game();

    assert_eq!(game.stand(), Some(RoundResult::Win));
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.dealer_value(), DEALER_STANDS_ON);
    assert!(game.dealer_hand().is_soft());
}

#[test]
fn dealer_draws_until_17() {
    let mut game = stacked(&["10H", "2C", "9D", "3S", "4C", "5H", "KD"]);
    game.start_new_game();

    game.stand();

    assert_eq!(
        game.dealer_hand().cards(),
        &[card("2C"), card("3S"), card("4C"), card("5H"), card("KD")]
    );
    assert_eq!(game.dealer_value(), 24);
    assert!(game.is_dealer_busted());
}

#[test]
fn commands_after_round_over_are_ignored() {
    let mut game = stacked(&["10H", "10C", "7D", "9S", "2C"]);
    game.start_new_game();
    game.stand();

    let notifications = count_notifications(&mut game);
    let player = game.player_hand().clone();
    let dealer = game.dealer_hand().clone();
    let remaining = game.remaining_cards();

    assert_eq!(game.hit(), None);
    assert_eq!(game.stand(), None);

    assert_eq!(notifications.load(Ordering::SeqCst), 0);
    assert_eq!(game.player_hand(), &player);
    assert_eq!(game.dealer_hand(), &dealer);
    assert_eq!(game.remaining_cards(), remaining);
    assert_eq!(game.result(), RoundResult::Lose);
}

#[test]
fn commands_before_deal_are_ignored() {
    let mut game = Blackjack::new(3);
    let notifications = count_notifications(&mut game);

    assert_eq!(game.hit(), None);
    assert_eq!(game.stand(), None);

    assert_eq!(notifications.load(Ordering::SeqCst), 0);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.remaining_cards(), 52);
}

#[test]
fn new_game_resets_round() {
    let mut game = stacked(&["10H", "9C", "6D", "8S", "KC"]);
    game.start_new_game();
    game.hit();
    assert!(game.is_player_busted());

    game.start_new_game();

    assert!(!game.is_game_over());
    assert!(!game.is_player_busted());
    assert!(!game.has_player_stood());
    assert_eq!(game.result(), RoundResult::InProgress);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.remaining_cards(), 1);
}

#[test]
fn seeded_rounds_settle_consistently() {
    let mut game = Blackjack::new(2024);

    for _ in 0..200 {
        game.start_new_game();
        assert!(game.player_hand().cards().iter().all(|c| !c.is_joker()));

        while !game.is_game_over() && game.player_value() < 17 {
            game.hit();
        }
        game.stand();

        assert!(game.is_game_over());
        assert!(game.result() != RoundResult::InProgress);
        if game.is_player_busted() {
            assert_eq!(game.result(), RoundResult::Lose);
        } else {
            assert!(game.has_player_stood());
            assert!(game.dealer_value() >= DEALER_STANDS_ON);
        }
    }
}

#[test]
fn decks_with_jokers_are_rejected() {
    let deck = Deck::stacked(vec![card("10H"), Card::Joker, card("9S"), card("8D")]).unwrap();
    assert_eq!(Blackjack::with_deck(deck).err(), Some(DeckError::Jokers));

    let jokers = Deck::new(true, 1);
    assert_eq!(Blackjack::with_deck(jokers).err(), Some(DeckError::Jokers));

    assert!(Blackjack::with_deck(Deck::new(false, 1)).is_ok());
}

fn failing_render(_: &Blackjack) {
    panic!("render failed");
}

#[test]
fn panicking_observer_keeps_subscriptions() {
    let mut game = stacked(&["2H", "10C", "3D", "8S", "4C"]);
    let notifications = count_notifications(&mut game);
    game.subscribe(failing_render);

    let unwound = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
        game.start_new_game();
    }));
    assert!(unwound.is_err());
    assert_eq!(notifications.load(Ordering::SeqCst), 1);

    let _ = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| game.hit()));
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
    assert_eq!(game.player_value(), 9);
}
