//! Card identity and the tableau chaining rule.
//!
//! A card's identity (rank and suit) is fixed at construction; only its
//! face-down flag ever changes. Color is derived from suit on demand and is
//! never stored, so it cannot drift out of sync with the suit.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Card, Rank, Suit};
//!
//! let base = Card::face_up(Rank::QUEEN, Suit::Hearts);
//! let mover = Card::face_up(Rank::JACK, Suit::Spades);
//!
//! // Red queen accepts a black jack
//! assert!(base.is_valid_base_for(&mover));
//! assert!(!mover.is_valid_base_for(&base));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a face-down card renders as. The identity stays opaque.
pub const FACE_DOWN_GLYPH: &str = "###";

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// All suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// The color of this suit. Hearts and Diamonds are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Index of this suit's foundation, 0..4.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }
}

/// Card color, derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank. Panics if `value` is outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= 13, "rank out of range");
        Self(value)
    }

    /// The numeric value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            n => write!(f, "{n}"),
        }
    }
}

/// A playing card: immutable identity plus a mutable face-down flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_down: bool,
}

impl Card {
    /// Create a card with an explicit face-down flag.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, face_down: bool) -> Self {
        Self { rank, suit, face_down }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(rank: Rank, suit: Suit) -> Self {
        Self::new(rank, suit, false)
    }

    /// Create a face-down card.
    #[must_use]
    pub const fn face_down(rank: Rank, suit: Suit) -> Self {
        Self::new(rank, suit, true)
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Derived from suit, never cached.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        self.face_down
    }

    /// Turn the card face-up. Idempotent.
    pub fn reveal(&mut self) {
        self.face_down = false;
    }

    /// Turn the card face-down. Idempotent.
    pub fn hide(&mut self) {
        self.face_down = true;
    }

    /// The tableau chaining rule: can `other` be placed directly on `self`?
    ///
    /// True iff `self` is face-up, the colors differ, and `self` outranks
    /// `other` by exactly one.
    #[must_use]
    pub fn is_valid_base_for(&self, other: &Card) -> bool {
        !self.face_down
            && self.color() != other.color()
            && self.rank.value() == other.rank.value() + 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_down {
            f.write_str(FACE_DOWN_GLYPH)
        } else {
            write!(f, "{} of {}", self.rank, self.suit.name())
        }
    }
}

/// The 52-card deck, every card face-down, unshuffled.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for value in 1..=13 {
            deck.push(Card::face_down(Rank::new(value), suit));
        }
    }
    deck
}
