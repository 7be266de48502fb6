//! Errors raised when a tape operation's precondition does not hold.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TapeError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapeError {
    /// The operation needs at least one slot.
    #[error("tape is empty")]
    EmptyTape,

    /// The cursor sits one past the last slot, where there is nothing to
    /// read, erase, or insert to the right of.
    #[error("cursor is at the stop position")]
    CursorAtStop,

    /// The representation check failed. Only an internal bug can cause this.
    #[error("tape invariant violated: {0}")]
    InvariantViolated(&'static str),
}

impl TapeError {
    /// True for errors caused by the caller rather than by tape internals.
    pub fn is_contract_violation(&self) -> bool {
        return matches!(self, TapeError::EmptyTape | TapeError::CursorAtStop);
    }
}
