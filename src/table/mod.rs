//! The table: columns, foundations, stock, and move orchestration.
//!
//! A move is an atomic Idle → Taken → Idle transition. The detached run
//! lives as an owned value inside `transfer`'s frame for the Taken state, so
//! the table itself never holds a run between calls: on every return path
//! the run has either been placed on the destination or restored to the
//! source.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::DeckRng;
//! use klondike_engine::table::Table;
//!
//! let mut rng = DeckRng::new(42);
//! let mut table = Table::deal(&mut rng);
//!
//! // Column 6 exposes one card at position 6.
//! if let Err(err) = table.move_between_columns(6, 0, 6) {
//!     println!("{err}");
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::card::{standard_deck, Card, Suit};
use crate::core::error::InvalidMove;
use crate::core::rng::DeckRng;
use crate::piles::{transfer, CardStack, Column, Foundation};

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 7;

/// The full game state: 7 columns, 4 foundations, and the stock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    foundations: [Foundation; 4],
    stock: CardStack,
}

impl Table {
    /// Deal a fresh table from a shuffled 52-card deck.
    ///
    /// Triangular layout: column `i` receives `i + 1` cards off the top of
    /// the deck, all face-down except the last. The 24 remaining cards form
    /// the face-down stock.
    #[must_use]
    pub fn deal(rng: &mut DeckRng) -> Self {
        let mut deck = standard_deck();
        rng.shuffle(&mut deck);

        let mut columns = Vec::with_capacity(COLUMN_COUNT);
        for i in 0..COLUMN_COUNT {
            let cards = deck.split_off(deck.len() - (i + 1));
            let mut column = Column::from_cards(cards);
            column.reveal_top();
            columns.push(column);
        }

        debug!("dealt table from seed {}", rng.seed());
        Self {
            columns,
            foundations: Suit::ALL.map(Foundation::new),
            stock: CardStack::from_cards(deck),
        }
    }

    /// Build a table from pre-arranged columns and stock, with empty
    /// foundations. Panics unless exactly [`COLUMN_COUNT`] columns are given.
    #[must_use]
    pub fn from_parts(columns: Vec<Column>, stock: CardStack) -> Self {
        assert_eq!(columns.len(), COLUMN_COUNT, "a table has {COLUMN_COUNT} columns");
        Self {
            columns,
            foundations: Suit::ALL.map(Foundation::new),
            stock,
        }
    }

    /// Move the run starting at `position` from one column to another.
    ///
    /// On success the source's new top card is revealed. On rejection —
    /// whether at the take or the place phase — every pile is exactly as it
    /// was before the call, face flags included.
    pub fn move_between_columns(
        &mut self,
        from: usize,
        to: usize,
        position: usize,
    ) -> Result<(), InvalidMove> {
        self.check_column_index(from)?;
        self.check_column_index(to)?;
        if from == to {
            return Err(InvalidMove::new("source and destination are the same column"));
        }

        let (source, dest) = pair_mut(&mut self.columns, from, to);
        transfer(source, dest, position)?;

        self.columns[from].reveal_top();
        debug!("moved run at {position} from column {from} to column {to}");
        Ok(())
    }

    /// Move a column's top card onto its suit's foundation.
    ///
    /// Same atomicity as [`move_between_columns`](Self::move_between_columns):
    /// the source is revealed only after a successful placement.
    pub fn move_to_foundation(&mut self, from: usize) -> Result<(), InvalidMove> {
        self.check_column_index(from)?;

        let column = &mut self.columns[from];
        let top_position = column
            .len()
            .checked_sub(1)
            .ok_or(InvalidMove::new("cannot take from an empty column"))?;
        let suit = column.cards()[top_position].suit();

        let foundation = &mut self.foundations[suit.index()];
        transfer(column, foundation, top_position)?;

        self.columns[from].reveal_top();
        debug!("moved top of column {from} to the {} foundation", suit.name());
        Ok(())
    }

    /// Reveal the top card of the stock in place. No-op on an empty stock.
    ///
    /// Stock interaction is intentionally minimal: drawn cards stay on the
    /// stock, there is no waste pile.
    pub fn draw(&mut self) {
        if let Some(card) = self.stock.top_mut() {
            card.reveal();
        }
    }

    /// All columns, in table order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column at `index`, if in range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// All foundations, in [`Suit::ALL`] order.
    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    /// The foundation for `suit`.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    /// The stock pile.
    #[must_use]
    pub fn stock(&self) -> &CardStack {
        &self.stock
    }

    /// Every card on the table, in pile order. 52 at every quiescent point.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.columns
            .iter()
            .flat_map(|column| column.cards())
            .chain(self.foundations.iter().flat_map(|f| f.cards()))
            .chain(self.stock.cards())
    }

    fn check_column_index(&self, index: usize) -> Result<(), InvalidMove> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(InvalidMove::new("no such column"))
        }
    }
}

/// Disjoint mutable borrows of two columns.
fn pair_mut(columns: &mut [Column], a: usize, b: usize) -> (&mut Column, &mut Column) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = columns.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = columns.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
