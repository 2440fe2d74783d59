//! Deck tests.

use std::collections::HashMap;

use cardgames::{Card, DECK_SIZE, Deck, DeckError, JOKER_COUNT, Rank, Suit};

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn new_deck_is_ordered_suit_by_suit() {
    let deck = Deck::new(false, 1);
    assert_eq!(deck.total(), DECK_SIZE);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(!deck.has_jokers());

    let cards = deck.cards();
    assert_eq!(cards[0], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(cards[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));

    let counts = counts(cards);
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 1));
}

#[test]
fn jokers_are_appended() {
    let deck = Deck::new(true, 1);
    assert_eq!(deck.total(), DECK_SIZE + JOKER_COUNT);
    assert!(deck.has_jokers());
    assert_eq!(deck.cards()[52], Card::Joker);
    assert_eq!(deck.cards()[53], Card::Joker);
}

#[test]
fn shuffle_is_a_permutation() {
    for include_jokers in [false, true] {
        let mut deck = Deck::new(include_jokers, 99);
        let before = counts(deck.cards());
        let total = deck.total();

        deck.shuffle();

        assert_eq!(deck.remaining(), total);
        assert_eq!(counts(deck.cards()), before);
    }
}

#[test]
fn shuffle_resets_cursor() {
    let mut deck = Deck::new(false, 3);
    for _ in 0..5 {
        deck.draw();
    }
    assert_eq!(deck.remaining(), DECK_SIZE - 5);

    deck.shuffle();
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn drawing_exhausts_the_deck() {
    let mut deck = Deck::new(false, 5);
    deck.reset_and_shuffle();

    let mut drawn = Vec::new();
    while let Some(card) = deck.draw() {
        drawn.push(card);
    }

    assert_eq!(drawn.len(), DECK_SIZE);
    assert_eq!(counts(&drawn).len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.peek(), None);
}

#[test]
fn peek_does_not_advance() {
    let mut deck = Deck::new(false, 5);
    deck.shuffle();

    let top = deck.peek();
    assert_eq!(deck.peek(), top);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.draw(), top);
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
}

#[test]
fn seed_determines_shuffle() {
    let mut a = Deck::new(false, 42);
    let mut b = Deck::new(false, 42);
    let mut c = Deck::new(false, 43);
    a.reset_and_shuffle();
    b.reset_and_shuffle();
    c.reset_and_shuffle();

    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn reset_restores_initial_order() {
    let mut deck = Deck::new(false, 8);
    deck.shuffle();
    deck.draw();

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.cards(), Deck::new(false, 0).cards());
}

#[test]
fn stacked_deck_replays_its_order() {
    let order: Vec<Card> = ["7H", "9S", "JOKER"]
        .iter()
        .map(|c| c.parse().unwrap())
        .collect();
    let mut deck = Deck::stacked(order.clone()).unwrap();
    assert!(deck.is_stacked());
    assert!(deck.has_jokers());

    deck.draw();
    deck.reset_and_shuffle();
    assert_eq!(deck.cards(), order.as_slice());
    assert_eq!(deck.remaining(), 3);
}

#[test]
fn stacked_deck_needs_cards() {
    assert_eq!(Deck::stacked(Vec::new()).unwrap_err(), DeckError::Empty);
}
