//! Foundations: the per-suit ascending build piles.
//!
//! A foundation accepts single cards of its own suit, in strictly ascending
//! rank from the Ace. `top_rank` returns 0 when the pile is empty, which
//! makes the acceptance rule uniform: the next card must be `top_rank + 1`.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::card::{Card, Suit};
use crate::core::error::InvalidMove;

use super::stack::{CardRun, CardStack};
use super::Pile;

/// The ascending build pile for one suit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    stack: CardStack,
}

impl Foundation {
    /// Create an empty foundation for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            stack: CardStack::new(),
        }
    }

    /// The suit this foundation builds.
    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the top card, or 0 if nothing has been placed yet.
    #[must_use]
    pub fn top_rank(&self) -> u8 {
        self.stack.top().map_or(0, |card| card.rank().value())
    }

    /// Place a single card, if it is the suit's next ascending rank.
    pub fn add_card(&mut self, card: Card) -> Result<(), InvalidMove> {
        let run: CardRun = smallvec![card];
        self.check_accept(&run)?;
        self.stack.push_run(run);
        Ok(())
    }

    /// Remove and return the top card. Always legal when non-empty.
    pub fn take_top_card(&mut self) -> Option<Card> {
        self.stack.pop()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.stack.top()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.stack.cards()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Pile for Foundation {
    fn check_accept(&self, run: &[Card]) -> Result<(), InvalidMove> {
        let [card] = run else {
            return Err(InvalidMove::new("a foundation accepts one card at a time"));
        };
        if card.suit() != self.suit {
            return Err(InvalidMove::new("card does not match the foundation's suit"));
        }
        if card.rank().value() != self.top_rank() + 1 {
            return Err(InvalidMove::new("foundation builds up by exactly one rank"));
        }
        Ok(())
    }

    fn push_run(&mut self, run: CardRun) {
        self.stack.push_run(run);
    }

    fn take_run(&mut self, position: usize) -> Result<CardRun, InvalidMove> {
        if self.stack.is_empty() || position != self.stack.len() - 1 {
            return Err(InvalidMove::new("only the foundation's top card may be taken"));
        }
        Ok(self.stack.split_off_run(position))
    }
}
