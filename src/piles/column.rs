//! Tableau columns.
//!
//! A column accepts runs that continue its top card downward in alternating
//! colors, or a King-led run when it is empty. Every card except possibly
//! the topmost may be face-down, and a face-down card is never a legal take
//! position.
//!
//! Taking a run does not reveal the card left on top: the original top may
//! come back in a rollback, so exposing it is the table's follow-up after a
//! placement actually succeeds.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank};
use crate::core::error::InvalidMove;

use super::stack::{CardRun, CardStack};
use super::Pile;

/// One of the seven tableau piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    stack: CardStack,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column from bottom-to-top cards with their face flags set.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            stack: CardStack::from_cards(cards),
        }
    }

    /// Flip the top card face-up. No-op on an empty column.
    pub fn reveal_top(&mut self) {
        if let Some(card) = self.stack.top_mut() {
            card.reveal();
        }
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

impl Pile for Column {
    fn check_accept(&self, run: &[Card]) -> Result<(), InvalidMove> {
        // The run's internal ordering is the dealer's/taker's responsibility;
        // only the joint against this column is checked here.
        let Some(first) = run.first() else {
            return Err(InvalidMove::new("cannot place an empty run"));
        };
        match self.stack.top() {
            None if first.rank() == Rank::KING => Ok(()),
            None => Err(InvalidMove::new("an empty column only accepts a King")),
            Some(top) if top.is_valid_base_for(first) => Ok(()),
            Some(_) => Err(InvalidMove::new("run does not continue the column's top card")),
        }
    }

    fn push_run(&mut self, run: CardRun) {
        self.stack.push_run(run);
    }

    fn take_run(&mut self, position: usize) -> Result<CardRun, InvalidMove> {
        match self.stack.get(position) {
            Some(card) if !card.is_face_down() => Ok(self.stack.split_off_run(position)),
            Some(_) => Err(InvalidMove::new("cannot take a face-down card")),
            None => Err(InvalidMove::new("no card at that position")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    #[test]
    fn test_king_starts_empty_column() {
        let mut column = Column::new();
        let run: CardRun = [Card::face_up(Rank::KING, Suit::Spades)].into_iter().collect();

        column.check_accept(&run).unwrap();
        column.push_run(run);

        assert_eq!(column.len(), 1);
    }

    #[test]
    fn test_non_king_rejected_on_empty_column() {
        let column = Column::new();
        let run: CardRun = [Card::face_up(Rank::QUEEN, Suit::Spades)].into_iter().collect();

        let err = column.check_accept(&run).unwrap_err();
        assert_eq!(err.reason(), "an empty column only accepts a King");
    }

    #[test]
    fn test_accepts_chaining_run() {
        let column = Column::from_cards(vec![Card::face_up(Rank::new(10), Suit::Hearts)]);
        let run: CardRun = [
            Card::face_up(Rank::new(9), Suit::Clubs),
            Card::face_up(Rank::new(8), Suit::Diamonds),
        ]
        .into_iter()
        .collect();

        assert!(column.check_accept(&run).is_ok());
    }

    #[test]
    fn test_rejection_leaves_column_unmodified() {
        let column = Column::from_cards(vec![
            Card::face_down(Rank::new(2), Suit::Clubs),
            Card::face_up(Rank::new(10), Suit::Hearts),
        ]);
        let snapshot = column.clone();
        let run: CardRun = [Card::face_up(Rank::new(5), Suit::Spades)].into_iter().collect();

        assert!(column.check_accept(&run).is_err());
        assert_eq!(column, snapshot);
    }

    #[test]
    fn test_take_requires_face_up() {
        let mut column = Column::from_cards(vec![
            Card::face_down(Rank::new(2), Suit::Clubs),
            Card::face_up(Rank::new(10), Suit::Hearts),
        ]);
        let snapshot = column.clone();

        assert!(column.take_run(0).is_err());
        assert_eq!(column, snapshot);
    }

    #[test]
    fn test_take_out_of_range_rejected() {
        let mut column = Column::from_cards(vec![Card::face_up(Rank::new(10), Suit::Hearts)]);

        assert!(column.take_run(1).is_err());
        assert!(Column::new().take_run(0).is_err());
    }

    #[test]
    fn test_take_detaches_suffix_without_revealing() {
        let mut column = Column::from_cards(vec![
            Card::face_down(Rank::new(2), Suit::Clubs),
            Card::face_up(Rank::new(10), Suit::Hearts),
            Card::face_up(Rank::new(9), Suit::Spades),
        ]);

        let run = column.take_run(1).unwrap();

        assert_eq!(run.len(), 2);
        assert_eq!(run[0].rank(), Rank::new(10));
        assert_eq!(column.len(), 1);
        // No auto-reveal: the run may yet come back in a rollback.
        assert!(column.top().unwrap().is_face_down());
    }

    #[test]
    fn test_reveal_top_noop_on_empty() {
        let mut column = Column::new();
        column.reveal_top();
        assert!(column.is_empty());
    }
}
