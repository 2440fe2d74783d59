//! Round and guess outcome types.

/// Direction of a Higher/Lower guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Guess {
    /// The next card will be worth more.
    Higher,
    /// The next card will be worth less.
    Lower,
}

/// Result of a single Higher/Lower guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// The guess was right, or the whole deck was cleared.
    Correct,
    /// The guess was wrong. Ends the round.
    Wrong,
    /// Both cards had the same value. Nothing is scored.
    Push,
}

/// Result of a Blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundResult {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Round not settled yet.
    #[default]
    InProgress,
}

impl RoundResult {
    /// Returns whether the round has been settled.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
