//! Blackjack phase type.

/// Phase of a Blackjack session.
///
/// The dealer's turn runs synchronously inside [`stand`](super::Blackjack::stand)
/// and is never observable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackPhase {
    /// No round has been dealt yet.
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Round has ended and the result is final.
    RoundOver,
}
