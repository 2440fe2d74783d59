//! Blackjack hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Target value of a Blackjack hand.
pub const BLACKJACK: u8 = 21;

const ACE_REDUCTION: u8 = 10;

/// Blackjack points of a single card. Jokers never appear in Blackjack and
/// count for nothing.
const fn card_points(card: &Card) -> u8 {
    match card.rank() {
        Some(rank) => rank.blackjack_points(),
        None => 0,
    }
}

/// Returns the best value of `cards` and whether an Ace still counts as 11.
///
/// Every Ace starts at 11; while the total is over 21 and an Ace is still
/// counted high, one Ace is reduced to 1.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank() == Some(Rank::Ace) {
            aces += 1;
        }
        value = value.saturating_add(card_points(card));
    }

    while value > BLACKJACK && aces > 0 {
        value -= ACE_REDUCTION;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// An ordered Blackjack hand. Used for both the player and the dealer.
///
/// # Example
///
/// ```
/// use cardgames::{Card, Hand, Rank, Suit};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
/// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(hand.value(), 12);
/// assert!(hand.is_soft());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the dealer's up card.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
