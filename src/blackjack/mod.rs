//! Blackjack engine and state management.
//!
//! One player against an automated dealer. The dealer draws to 17 and stands
//! on any 17, soft or hard. There is no betting, splitting or doubling.

use core::cell::RefCell;

use alloc::string::String;
use tracing::debug;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{BLACKJACK, Hand};
use crate::observer::{Observer, ObserverId, Observers};
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::BlackjackPhase;

/// A Blackjack session.
///
/// # Example
///
/// ```
/// use cardgames::{Blackjack, BlackjackPhase};
///
/// let mut game = Blackjack::new(42);
/// game.start_new_game();
/// assert_eq!(game.player_hand().len(), 2);
///
/// if game.phase() == BlackjackPhase::PlayerTurn {
///     game.stand();
/// }
/// assert!(game.is_game_over());
/// ```
pub struct Blackjack {
    /// Cards for the session. Never includes Jokers.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The second card is the hole card.
    dealer: Hand,
    /// Whether a round has been dealt.
    started: bool,
    /// Whether the round has ended.
    game_over: bool,
    /// Whether the player went over 21.
    player_busted: bool,
    /// Whether the dealer went over 21.
    dealer_busted: bool,
    /// Whether the player has stood.
    player_stood: bool,
    /// Result of the round.
    result: RoundResult,
    /// Message describing the result.
    message: String,
    /// Registered observers.
    observers: RefCell<Observers<Self>>,
}

impl Blackjack {
    /// Creates a new session with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_deck(Deck::new(false, seed))
    }

    /// Creates a new session that plays with the given deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck contains Jokers.
    pub fn with_deck(deck: Deck) -> Result<Self, DeckError> {
        if deck.has_jokers() {
            return Err(DeckError::Jokers);
        }
        Ok(Self::from_deck(deck))
    }

    const fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            started: false,
            game_over: false,
            player_busted: false,
            dealer_busted: false,
            player_stood: false,
            result: RoundResult::InProgress,
            message: String::new(),
            observers: RefCell::new(Observers::new()),
        }
    }

    /// Registers an observer notified after every state change.
    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: Observer<Self> + 'static,
    {
        self.observers.get_mut().subscribe(observer)
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.get_mut().unsubscribe(id)
    }

    fn notify(&self) {
        self.observers.borrow_mut().notify(self);
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Starts a new round: reshuffles, clears both hands and deals two cards
    /// each, player first.
    ///
    /// A natural 21 is stood immediately and the round is settled before this
    /// returns.
    pub fn start_new_game(&mut self) {
        self.deck.reset_and_shuffle();
        self.player.clear();
        self.dealer.clear();
        self.started = true;
        self.game_over = false;
        self.player_busted = false;
        self.dealer_busted = false;
        self.player_stood = false;
        self.result = RoundResult::InProgress;
        self.message.clear();

        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.player.add_card(card);
            }
            if let Some(card) = self.draw() {
                self.dealer.add_card(card);
            }
        }

        debug!(
            player = self.player.value(),
            up_card = ?self.dealer.first(),
            "blackjack round dealt"
        );

        if self.player.value() == BLACKJACK {
            debug!("player natural");
            self.resolve_stand();
        }

        self.notify();
    }

    /// Returns the current phase of the session.
    #[must_use]
    pub const fn phase(&self) -> BlackjackPhase {
        if self.game_over {
            BlackjackPhase::RoundOver
        } else if self.started {
            BlackjackPhase::PlayerTurn
        } else {
            BlackjackPhase::NotStarted
        }
    }

    /// Returns the player's cards.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's cards, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the value of the dealer's whole hand.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns whether the dealer's hole card may be shown.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.game_over || self.player_stood
    }

    /// Returns the dealer's up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.first()
    }

    /// Returns the dealer value the player is allowed to see.
    ///
    /// Only the up card counts until the hole card is revealed.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        if self.is_hole_revealed() {
            self.dealer.value()
        } else {
            self.dealer
                .first()
                .and_then(Card::rank)
                .map_or(0, Rank::blackjack_points)
        }
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns whether the round has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns whether the player went over 21.
    #[must_use]
    pub const fn is_player_busted(&self) -> bool {
        self.player_busted
    }

    /// Returns whether the dealer went over 21.
    #[must_use]
    pub const fn is_dealer_busted(&self) -> bool {
        self.dealer_busted
    }

    /// Returns whether the player has stood.
    #[must_use]
    pub const fn has_player_stood(&self) -> bool {
        self.player_stood
    }

    /// Returns the result of the round.
    #[must_use]
    pub const fn result(&self) -> RoundResult {
        self.result
    }

    /// Returns the message describing the result. Empty while in progress.
    #[must_use]
    pub fn result_message(&self) -> &str {
        &self.message
    }
}
