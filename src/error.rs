//! Error types for card parsing and deck construction.
//!
//! Game commands do not return errors. Out-of-turn input is ignored and
//! reported as `None` by the command itself.

use thiserror::Error;

/// Errors that can occur when building or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Numeric rank outside 2..=14.
    #[error("invalid rank value {0}, expected 2..=14")]
    InvalidRank(u8),
    /// Empty card notation.
    #[error("empty card notation")]
    Empty,
    /// Rank part of the notation was not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit part of the notation was not recognized.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A stacked deck needs at least one card.
    #[error("a stacked deck needs at least one card")]
    Empty,
    /// Blackjack is played without Jokers.
    #[error("blackjack is played without jokers")]
    Jokers,
}
