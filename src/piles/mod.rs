//! Pile variants and the atomic transfer pipeline.
//!
//! The pile variants (`Column`, `Foundation`) share one capability
//! interface: a pure acceptance check, a rule-free append, and a validated
//! take. `transfer` composes those into the one move primitive the table
//! needs — take, check, then place or roll back — with the detached run held
//! as an owned value for the whole transition, so it can neither leak nor
//! linger once the call returns.

pub mod column;
pub mod foundation;
pub mod stack;

pub use column::Column;
pub use foundation::Foundation;
pub use stack::{CardRun, CardStack};

use log::debug;

use crate::core::card::Card;
use crate::core::error::InvalidMove;

/// The capability interface shared by every pile variant.
///
/// Acceptance policies diverge per variant (a column chains alternating
/// colors downward, a foundation builds one suit upward), but the take/add
/// contract is common, which is what lets the table orchestrate any
/// pile-to-pile transfer through one pipeline.
pub trait Pile {
    /// Check whether this pile would accept `run` on top. Pure, no mutation.
    fn check_accept(&self, run: &[Card]) -> Result<(), InvalidMove>;

    /// Append `run` on top without any rule check.
    ///
    /// Only call after `check_accept`, or to roll a taken run back onto its
    /// source, where re-validation would wrongly reject the restore.
    fn push_run(&mut self, run: CardRun);

    /// Detach the run starting at `position` (0 = bottom) through the top.
    ///
    /// On rejection the pile is unmodified.
    fn take_run(&mut self, position: usize) -> Result<CardRun, InvalidMove>;
}

/// Move the run starting at `position` from one pile to another, atomically.
///
/// Either the run ends up appended to `to`, or the transfer is rejected and
/// the run is restored to `from` exactly as taken — content, order, and face
/// flags. The run in transit is owned by this function's frame; there is no
/// in-between state observable from outside.
///
/// Does not reveal anything: exposing the source's new top card after a
/// successful transfer is the caller's follow-up.
pub fn transfer(from: &mut dyn Pile, to: &mut dyn Pile, position: usize) -> Result<(), InvalidMove> {
    let run = from.take_run(position)?;
    match to.check_accept(&run) {
        Ok(()) => {
            debug!("transfer: placed {} card(s)", run.len());
            to.push_run(run);
            Ok(())
        }
        Err(err) => {
            debug!("transfer: {err}, rolling back {} card(s)", run.len());
            from.push_run(run);
            Err(err)
        }
    }
}
