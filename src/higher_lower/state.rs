//! Higher/Lower phase type.

/// Phase of a Higher/Lower session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HigherLowerPhase {
    /// No round has been started yet.
    NotStarted,
    /// A round is in progress and accepts guesses.
    InRound,
    /// The round has ended. Start a new game to play again.
    RoundOver,
}
