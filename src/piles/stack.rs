//! The base pile: an ordered sequence of cards with rule-free primitives.
//!
//! `CardStack` knows nothing about legality. It appends runs and detaches
//! suffixes; which runs may land where is decided by the pile variants built
//! on top of it (`Column`, `Foundation`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// An owned run of cards in transit between piles.
///
/// A run is never longer than 13 cards (a full King-to-Ace chain), so it
/// stays inline and moving it never allocates.
pub type CardRun = SmallVec<[Card; 13]>;

/// An ordered pile of cards. The top of the pile is the last element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from bottom-to-top cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Append a single card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a run on top, preserving its internal order.
    ///
    /// Unconditional: no rule check happens here. This is both the place
    /// step after a successful acceptance check and the rollback step that
    /// restores a run exactly as it was taken.
    pub fn push_run(&mut self, run: CardRun) {
        self.cards.extend(run);
    }

    /// Detach every card from `position` to the top as one ordered run.
    ///
    /// Callers validate `position` first; this is the mechanical split only.
    pub fn split_off_run(&mut self, position: usize) -> CardRun {
        debug_assert!(position < self.cards.len());
        self.cards.drain(position..).collect()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable access to the top card, if any.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The card at `index` (0 = bottom), if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn card(value: u8) -> Card {
        Card::face_up(Rank::new(value), Suit::Spades)
    }

    #[test]
    fn test_push_run_preserves_order() {
        let mut pile = CardStack::new();
        pile.push(card(13));

        let run: CardRun = [card(12), card(11)].into_iter().collect();
        pile.push_run(run);

        let values: Vec<_> = pile.cards().iter().map(|c| c.rank().value()).collect();
        assert_eq!(values, vec![13, 12, 11]);
        assert_eq!(pile.top().unwrap().rank().value(), 11);
    }

    #[test]
    fn test_split_off_run_detaches_suffix() {
        let mut pile = CardStack::from_cards(vec![card(13), card(12), card(11), card(10)]);

        let run = pile.split_off_run(2);

        let taken: Vec<_> = run.iter().map(|c| c.rank().value()).collect();
        assert_eq!(taken, vec![11, 10]);

        let kept: Vec<_> = pile.cards().iter().map(|c| c.rank().value()).collect();
        assert_eq!(kept, vec![13, 12]);
    }

    #[test]
    fn test_split_off_run_at_bottom_empties_pile() {
        let mut pile = CardStack::from_cards(vec![card(5), card(4)]);

        let run = pile.split_off_run(0);

        assert_eq!(run.len(), 2);
        assert!(pile.is_empty());
        assert!(pile.top().is_none());
    }
}
