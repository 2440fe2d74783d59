//! Game configuration options.

/// Configuration options for a Higher/Lower session.
///
/// Options are fixed for the life of the session.
///
/// ```
/// use cardgames::HigherLowerOptions;
///
/// let options = HigherLowerOptions::default().with_jokers(true);
/// assert!(options.include_jokers);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HigherLowerOptions {
    /// Whether the deck includes two Jokers (54 cards instead of 52).
    pub include_jokers: bool,
}

impl HigherLowerOptions {
    /// Sets whether the deck includes Jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgames::HigherLowerOptions;
    ///
    /// let options = HigherLowerOptions::default().with_jokers(false);
    /// assert_eq!(options.include_jokers, false);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, include_jokers: bool) -> Self {
        self.include_jokers = include_jokers;
        self
    }
}
