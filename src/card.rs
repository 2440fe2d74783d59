//! Card types and value scales.
//!
//! Two games read the same cards through two different scales:
//!
//! - the Higher/Lower scale ([`Rank::ordinal`], [`Card::value`]): 2 through 10
//!   at face value, Jack 11, Queen 12, King 13, Ace 14, Joker 15;
//! - the Blackjack scale ([`Rank::blackjack_points`]): 2 through 10 at face
//!   value, Jack/Queen/King 10, Ace 11 (reduced to 1 by hand evaluation).
//!
//! The two are kept as separate functions and never derived from each other.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// Color classification of a suit. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SuitColor {
    /// Hearts and Diamonds.
    Red,
    /// Clubs and Spades.
    Black,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Self::Hearts | Self::Diamonds => SuitColor::Red,
            Self::Clubs | Self::Spades => SuitColor::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a suit from its symbol, its initial or its name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CardError::Empty),
            "♥" | "H" | "h" | "Hearts" | "hearts" => Ok(Self::Hearts),
            "♦" | "D" | "d" | "Diamonds" | "diamonds" => Ok(Self::Diamonds),
            "♣" | "C" | "c" | "Clubs" | "clubs" => Ok(Self::Clubs),
            "♠" | "S" | "s" | "Spades" | "spades" => Ok(Self::Spades),
            _ => Err(CardError::UnknownSuit),
        }
    }
}

/// Card rank, ordered from Two up to Ace.
///
/// The discriminant is the rank's Higher/Lower ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank's value on the Higher/Lower scale (2..=14, Ace high).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the rank's point value in Blackjack.
    ///
    /// Aces count 11 here; hand evaluation reduces them to 1 as needed.
    #[must_use]
    pub const fn blackjack_points(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns whether the rank is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns the display symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    /// Converts a Higher/Lower ordinal (2..=14) into a rank.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[usize::from(value - 2)]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CardError::Empty),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            "A" | "a" => Ok(Self::Ace),
            "T" | "t" => Ok(Self::Ten),
            _ => s
                .parse::<u8>()
                .ok()
                .filter(|n| (2..=10).contains(n))
                .and_then(|n| Self::try_from(n).ok())
                .ok_or(CardError::UnknownRank),
        }
    }
}

/// Value of a Joker on the Higher/Lower scale.
pub const JOKER_VALUE: u8 = 15;

/// A playing card: a standard rank and suit, or a Joker.
///
/// Equality is by value. Two Jokers are always equal to each other.
///
/// `Card` does not implement `Ord`: cards of the same rank in
/// different suits compare equal on the value scale but are distinct cards.
/// Use [`Card::compare_value`] to order cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    /// A standard card.
    Standard {
        /// The rank of the card.
        rank: Rank,
        /// The suit of the card.
        suit: Suit,
    },
    /// A Joker. Outranks every standard card in Higher/Lower.
    Joker,
}

impl Card {
    /// Creates a standard card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Standard { rank, suit }
    }

    /// Returns whether the card is a Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the rank, or `None` for a Joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(*rank),
            Self::Joker => None,
        }
    }

    /// Returns the suit, or `None` for a Joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(*suit),
            Self::Joker => None,
        }
    }

    /// Returns the card's value on the Higher/Lower scale (2..=15).
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Standard { rank, .. } => rank.ordinal(),
            Self::Joker => JOKER_VALUE,
        }
    }

    /// Compares two cards on the Higher/Lower scale, ignoring suit.
    #[must_use]
    pub fn compare_value(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// Returns whether this card is worth more than `other`.
    #[must_use]
    pub fn is_higher_than(&self, other: &Self) -> bool {
        self.compare_value(other) == Ordering::Greater
    }

    /// Returns whether this card is worth less than `other`.
    #[must_use]
    pub fn is_lower_than(&self, other: &Self) -> bool {
        self.compare_value(other) == Ordering::Less
    }

    /// Returns whether both cards have the same value.
    #[must_use]
    pub fn is_same_value_as(&self, other: &Self) -> bool {
        self.compare_value(other) == Ordering::Equal
    }

    /// Returns a long-form rendering such as `A of Spades` or `Joker`.
    #[must_use]
    pub const fn detailed(&self) -> Detailed<'_> {
        Detailed(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Self::Joker => f.write_str("JOKER"),
        }
    }
}

/// Long-form display adapter returned by [`Card::detailed`].
#[derive(Debug, Clone, Copy)]
pub struct Detailed<'a>(&'a Card);

impl fmt::Display for Detailed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Card::Standard { rank, suit } => write!(f, "{rank} of {}", suit.name()),
            Card::Joker => f.write_str("Joker"),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses short notation: `AS`, `10h`, `Q♦`, `JOKER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CardError::Empty);
        }
        if s.eq_ignore_ascii_case("joker") {
            return Ok(Self::Joker);
        }

        let (split, _) = s.char_indices().next_back().ok_or(CardError::Empty)?;
        let (rank, suit) = s.split_at(split);
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}
