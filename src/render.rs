//! Plain-text rendering of a table.
//!
//! Pure string building for the interactive front end; the library does no
//! I/O. Face-down cards render as the opaque placeholder, face-up cards as
//! `<rank> of <suit>`.

use std::fmt::Write;

use crate::core::Card;
use crate::piles::Foundation;
use crate::table::Table;

/// Render one pile of cards as a comma-separated line.
#[must_use]
pub fn render_pile(cards: &[Card]) -> String {
    let rendered: Vec<String> = cards.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

/// Render the whole table: columns, foundations, and the stock.
#[must_use]
pub fn render_table(table: &Table) -> String {
    let mut out = String::new();

    for (i, column) in table.columns().iter().enumerate() {
        if column.is_empty() {
            let _ = writeln!(out, "column {i}: (empty)");
        } else {
            let _ = writeln!(out, "column {i}: {}", render_pile(column.cards()));
        }
    }

    let tops: Vec<String> = table.foundations().iter().map(render_foundation).collect();
    let _ = writeln!(out, "foundations: {}", tops.join(" | "));

    match table.stock().top() {
        Some(top) => {
            let _ = writeln!(out, "stock: {} cards, top {}", table.stock().len(), top);
        }
        None => {
            let _ = writeln!(out, "stock: empty");
        }
    }

    out
}

fn render_foundation(foundation: &Foundation) -> String {
    match foundation.top() {
        Some(top) => top.to_string(),
        None => format!("{} -", foundation.suit().name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, DeckRng, Rank, Suit, FACE_DOWN_GLYPH};

    #[test]
    fn test_render_pile_mixes_hidden_and_shown() {
        let cards = vec![
            Card::face_down(Rank::ACE, Suit::Spades),
            Card::face_up(Rank::new(10), Suit::Diamonds),
        ];
        assert_eq!(render_pile(&cards), format!("{FACE_DOWN_GLYPH}, 10 of Diamonds"));
    }

    #[test]
    fn test_render_table_covers_all_piles() {
        let table = Table::deal(&mut DeckRng::new(42));
        let text = render_table(&table);

        assert!(text.contains("column 0:"));
        assert!(text.contains("column 6:"));
        assert!(text.contains("foundations: Spades -"));
        assert!(text.contains("stock: 24 cards"));
        assert!(text.contains(FACE_DOWN_GLYPH));
    }
}
