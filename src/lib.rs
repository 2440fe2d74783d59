//! Rules engines for two card games, Higher/Lower and Blackjack, with
//! optional `no_std` support.
//!
//! Both engines play from a shared [`Deck`] of [`Card`]s and run every
//! command to completion before returning. A presentation layer observes them
//! by subscribing an [`Observer`], which is called once after each state
//! change and re-queries whatever it renders.
//!
//! # Example
//!
//! ```
//! use cardgames::{Guess, HigherLower, HigherLowerOptions};
//!
//! let mut game = HigherLower::new(HigherLowerOptions::default().with_jokers(true), 42);
//! game.subscribe(|game: &HigherLower| {
//!     let _ = (game.score(), game.last_message());
//! });
//! game.start_new_game();
//! while !game.is_game_over() {
//!     game.make_guess(Guess::Higher);
//! }
//! assert!(game.high_score() >= game.score());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod higher_lower;
pub mod observer;
pub mod options;
pub mod result;

// Re-export main types
pub use blackjack::{Blackjack, BlackjackPhase, DEALER_STANDS_ON};
pub use card::{Card, JOKER_VALUE, Rank, Suit, SuitColor};
pub use deck::{DECK_SIZE, Deck, JOKER_COUNT};
pub use error::{CardError, DeckError};
pub use hand::{BLACKJACK, Hand};
pub use higher_lower::{HigherLower, HigherLowerPhase};
pub use observer::{Observer, ObserverId, Observers};
pub use options::HigherLowerOptions;
pub use result::{Guess, GuessResult, RoundResult};
