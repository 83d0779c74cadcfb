//! Interactive front end: deal a table and interpret moves from stdin.
//!
//! Commands:
//! - `<from> <to> <position>` — move the run starting at `position` from
//!   one column to another
//! - `foundation <from>` — move a column's top card to its foundation
//! - `draw` — reveal the top of the stock
//! - `quit` — end the session
//!
//! All rule knowledge stays in the library; this layer only parses tokens,
//! renders the table, and prints rejection reasons.

use std::io::{self, BufRead, Write};

use klondike_engine::{render_table, DeckRng, Table};

fn main() -> io::Result<()> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random);

    let mut rng = DeckRng::new(seed);
    let mut table = Table::deal(&mut rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("klondike (seed {seed})");
    print!("{}", render_table(&table));

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            ["quit"] => break,
            ["draw"] => table.draw(),
            ["foundation", from] => match parse_index(from) {
                Some(from) => {
                    if let Err(err) = table.move_to_foundation(from) {
                        println!("{err}");
                    }
                }
                None => print_usage(),
            },
            [from, to, position] => {
                match (parse_index(from), parse_index(to), parse_index(position)) {
                    (Some(from), Some(to), Some(position)) => {
                        if let Err(err) = table.move_between_columns(from, to, position) {
                            println!("{err}");
                        }
                    }
                    _ => print_usage(),
                }
            }
            _ => print_usage(),
        }

        print!("{}", render_table(&table));
    }

    Ok(())
}

fn parse_index(token: &str) -> Option<usize> {
    token.parse().ok()
}

fn print_usage() {
    println!("commands: <from> <to> <position> | foundation <from> | draw | quit");
}
