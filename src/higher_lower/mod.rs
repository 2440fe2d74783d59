//! Higher/Lower engine.
//!
//! The player sees one card and guesses whether the next card from the deck
//! is worth more or less. Every right guess scores a point; equal values are a
//! push and score nothing; the first wrong guess ends the round. Clearing the
//! whole deck also ends the round, as a win.

use core::cell::RefCell;
use core::cmp::Ordering;

use alloc::format;
use alloc::string::String;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::observer::{Observer, ObserverId, Observers};
use crate::options::HigherLowerOptions;
use crate::result::{Guess, GuessResult};

pub mod state;

pub use state::HigherLowerPhase;

const FIRST_GUESS: &str = "Make your first guess!";
const DECK_CLEARED: &str = "Amazing! You completed the entire deck!";
const PUSH: &str = "PUSH! Cards are equal. Continue without scoring.";
const WRONG: &str = "Wrong! Game Over!";

fn streak_message(streak: u32) -> String {
    match streak {
        10.. => format!("INCREDIBLE! {streak} in a row!"),
        7..=9 => format!("AMAZING! {streak} in a row!"),
        5..=6 => format!("Great streak! {streak} in a row!"),
        3..=4 => format!("Nice! {streak} in a row!"),
        _ => String::from("Correct! +1 point!"),
    }
}

/// A Higher/Lower session.
///
/// The high score lives as long as the session and survives new games.
///
/// # Example
///
/// ```
/// use cardgames::{Guess, HigherLower, HigherLowerOptions};
///
/// let mut game = HigherLower::new(HigherLowerOptions::default(), 42);
/// game.start_new_game();
/// assert!(game.current_card().is_some());
///
/// let result = game.make_guess(Guess::Higher);
/// assert!(result.is_some());
/// ```
pub struct HigherLower {
    /// Cards for the session.
    deck: Deck,
    /// Card the player is guessing against.
    current: Option<Card>,
    /// Card shown before the last draw.
    previous: Option<Card>,
    /// Points this round.
    score: u32,
    /// Consecutive correct guesses this round.
    streak: u32,
    /// Best score of the session.
    high_score: u32,
    /// Whether the round has ended.
    game_over: bool,
    /// Result of the last guess.
    last_result: Option<GuessResult>,
    /// Message describing the last transition.
    message: String,
    /// Registered observers.
    observers: RefCell<Observers<Self>>,
}

impl HigherLower {
    /// Creates a new session with the given options and shuffle seed.
    #[must_use]
    pub fn new(options: HigherLowerOptions, seed: u64) -> Self {
        Self::with_deck(Deck::new(options.include_jokers, seed))
    }

    /// Creates a new session that plays with the given deck.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            current: None,
            previous: None,
            score: 0,
            streak: 0,
            high_score: 0,
            game_over: false,
            last_result: None,
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

    /// Starts a new round: reshuffles the deck and turns up the first card.
    ///
    /// The high score is kept.
    pub fn start_new_game(&mut self) {
        self.deck.reset_and_shuffle();
        self.current = self.deck.draw();
        self.previous = None;
        self.score = 0;
        self.streak = 0;
        self.game_over = false;
        self.last_result = None;
        self.message = String::from(FIRST_GUESS);

        debug!(
            card = ?self.current,
            remaining = self.deck.remaining(),
            "higher/lower round started"
        );
        self.notify();
    }

    /// Guesses whether the next card is higher or lower than the current one.
    ///
    /// Returns `None` without changing anything if no round is in progress.
    pub fn make_guess(&mut self, guess: Guess) -> Option<GuessResult> {
        if self.game_over {
            return None;
        }
        let shown = self.current?;

        let result = match self.deck.draw() {
            None => self.clear_deck(),
            Some(next) => {
                self.previous = Some(shown);
                self.current = Some(next);
                self.settle_guess(guess, shown, next)
            }
        };

        self.notify();
        Some(result)
    }

    fn clear_deck(&mut self) -> GuessResult {
        self.end_round();
        self.message = String::from(DECK_CLEARED);
        self.last_result = Some(GuessResult::Correct);
        debug!(score = self.score, "deck cleared");
        GuessResult::Correct
    }

    fn settle_guess(&mut self, guess: Guess, shown: Card, next: Card) -> GuessResult {
        let result = match (next.compare_value(&shown), guess) {
            (Ordering::Equal, _) => GuessResult::Push,
            (Ordering::Greater, Guess::Higher) | (Ordering::Less, Guess::Lower) => {
                GuessResult::Correct
            }
            _ => GuessResult::Wrong,
        };

        match result {
            GuessResult::Push => {
                self.message = String::from(PUSH);
            }
            GuessResult::Correct => {
                self.score += 1;
                self.streak += 1;
                self.message = streak_message(self.streak);
            }
            GuessResult::Wrong => {
                self.end_round();
                self.message = String::from(WRONG);
            }
        }
        self.last_result = Some(result);

        debug!(
            ?guess,
            shown = %shown,
            next = %next,
            ?result,
            score = self.score,
            streak = self.streak,
            "guess settled"
        );
        result
    }

    fn end_round(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
    }

    /// Returns the current phase of the session.
    #[must_use]
    pub const fn phase(&self) -> HigherLowerPhase {
        if self.game_over {
            HigherLowerPhase::RoundOver
        } else if self.current.is_some() {
            HigherLowerPhase::InRound
        } else {
            HigherLowerPhase::NotStarted
        }
    }

    /// Returns the card the player is guessing against.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Returns the card shown before the last draw, if any guess was made.
    #[must_use]
    pub const fn previous_card(&self) -> Option<Card> {
        self.previous
    }

    /// Returns the score of the current round.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of consecutive correct guesses this round.
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Returns the best score of the session.
    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
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

    /// Returns whether the session plays with Jokers.
    #[must_use]
    pub const fn has_jokers(&self) -> bool {
        self.deck.has_jokers()
    }

    /// Returns the result of the last guess, if any.
    #[must_use]
    pub const fn last_result(&self) -> Option<GuessResult> {
        self.last_result
    }

    /// Returns the message describing the last transition.
    #[must_use]
    pub fn last_message(&self) -> &str {
        &self.message
    }
}
