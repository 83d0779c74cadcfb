//! # klondike-engine
//!
//! A Klondike solitaire rules engine: columns, foundations, stock, and the
//! validated, atomic transfer of card runs between them.
//!
//! ## Design Principles
//!
//! 1. **One error kind**: every rule violation is an [`InvalidMove`] with a
//!    human-readable reason. Rejected moves are always fully recoverable.
//!
//! 2. **Atomic moves**: a move either places its run or rolls it back onto
//!    the source exactly as taken. The run in transit is an owned value, so
//!    "nothing is left in flight" is guaranteed by ownership, not by
//!    convention.
//!
//! 3. **Rules live in the pile variants**: the base [`piles::CardStack`] is
//!    rule-free; [`Column`] and [`Foundation`] implement divergent
//!    acceptance policies behind the shared [`Pile`] trait.
//!
//! 4. **Reproducible deals**: shuffling goes through the seeded
//!    [`DeckRng`], never a process-wide random source.
//!
//! ## Modules
//!
//! - `core`: card identity, deterministic RNG, the error kind
//! - `piles`: the pile variants and the atomic transfer pipeline
//! - `table`: dealing and move orchestration
//! - `render`: plain-text rendering for front ends

pub mod core;
pub mod piles;
pub mod render;
pub mod table;

pub use crate::core::{standard_deck, Card, Color, DeckRng, InvalidMove, Rank, Suit};
pub use crate::piles::{transfer, CardRun, CardStack, Column, Foundation, Pile};
pub use crate::render::{render_pile, render_table};
pub use crate::table::{Table, COLUMN_COUNT};
