//! The engine's single error kind.
//!
//! Every rejected move is recoverable: the pile that raised it is left
//! untouched, and the table rolls back any partial transfer before the
//! orchestrating call returns. There is no fatal error class in the core.

use thiserror::Error;

/// A move that violates a pile's acceptance or take rules.
///
/// The reason is human-readable and intended for the player; callers that
/// need to distinguish causes should not — the engine deliberately folds
/// every rule violation into this one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid move: {reason}")]
pub struct InvalidMove {
    reason: &'static str,
}

impl InvalidMove {
    #[must_use]
    pub(crate) const fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// The human-readable reason the move was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = InvalidMove::new("cannot place run");
        assert_eq!(err.to_string(), "invalid move: cannot place run");
        assert_eq!(err.reason(), "cannot place run");
    }
}
