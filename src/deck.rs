//! A consumable deck of cards with a draw cursor.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// Number of standard cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of Jokers added when a deck includes them.
pub const JOKER_COUNT: usize = 2;

/// A deck of 52 cards, optionally with two Jokers.
///
/// Cards are never removed. Drawing moves a cursor forward; everything before
/// the cursor has been dealt and cannot be drawn again until the deck is reset.
///
/// A deck built with [`Deck::stacked`] replays a fixed order: [`Deck::reset`]
/// restores that order and [`Deck::reset_and_shuffle`] leaves it unshuffled.
///
/// # Example
///
/// ```
/// use cardgames::Deck;
///
/// let mut deck = Deck::new(false, 7);
/// deck.shuffle();
/// assert_eq!(deck.remaining(), 52);
/// assert!(deck.draw().is_some());
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Index of the next card to draw.
    cursor: usize,
    /// Whether Jokers are part of the deck.
    include_jokers: bool,
    /// Fixed order for stacked decks.
    stacked: Option<Vec<Card>>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck in its initial (unshuffled) order.
    ///
    /// Cards are laid out suit by suit, Two to Ace within each suit, followed
    /// by the Jokers when requested.
    #[must_use]
    pub fn new(include_jokers: bool, seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE + JOKER_COUNT),
            cursor: 0,
            include_jokers,
            stacked: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a deck that always deals `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty.
    pub fn stacked(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Self {
            include_jokers: cards.iter().any(Card::is_joker),
            cards: cards.clone(),
            cursor: 0,
            stacked: Some(cards),
            rng: ChaCha8Rng::seed_from_u64(0),
        })
    }

    fn standard_cards(include_jokers: bool) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE + JOKER_COUNT);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        if include_jokers {
            cards.extend([Card::Joker; JOKER_COUNT]);
        }

        cards
    }

    /// Restores every card to the deck in its initial order.
    pub fn reset(&mut self) {
        self.cards = match &self.stacked {
            Some(order) => order.clone(),
            None => Self::standard_cards(self.include_jokers),
        };
        self.cursor = 0;
        trace!(cards = self.cards.len(), "deck reset");
    }

    /// Shuffles the whole deck and moves the cursor back to the top.
    ///
    /// Dealt cards are shuffled back in.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
        trace!(cards = self.cards.len(), "deck shuffled");
    }

    /// Resets the deck and shuffles it. Stacked decks are only reset.
    pub fn reset_and_shuffle(&mut self) {
        self.reset();
        if self.stacked.is_none() {
            self.shuffle();
        }
    }

    /// Draws the next card, or `None` when the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.peek()?;
        self.cursor += 1;
        Some(card)
    }

    /// Returns the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.get(self.cursor).copied()
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the number of cards in the deck, dealt or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// Returns whether the deck includes Jokers.
    #[must_use]
    pub const fn has_jokers(&self) -> bool {
        self.include_jokers
    }

    /// Returns whether the deck replays a fixed order.
    #[must_use]
    pub const fn is_stacked(&self) -> bool {
        self.stacked.is_some()
    }

    /// Returns every card in deal order, including those already drawn.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
