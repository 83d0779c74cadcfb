//! Core engine types: card identity, deterministic RNG, the error kind.
//!
//! These are the rule-free building blocks; pile acceptance policies live in
//! `piles` and orchestration in `table`.

pub mod card;
pub mod error;
pub mod rng;

pub use card::{standard_deck, Card, Color, Rank, Suit, FACE_DOWN_GLYPH};
pub use error::InvalidMove;
pub use rng::DeckRng;
