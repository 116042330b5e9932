//! The 3x3 board and pure terminal-state evaluation.
//!
//! A [`Board`] is a `Copy` value; placing a mark returns a new board
//! rather than mutating in place, so callers can keep prior snapshots
//! around (the strategist leans on this for hypothetical placements).

mod grid;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Mark;

pub use grid::{Board, CELL_COUNT, WINNING_LINES};

/// Outcome of a round, derived purely from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Empty cells remain and no line is complete.
    InProgress,
    /// Three in a row for this mark.
    Win(Mark),
    /// Full board, no complete line.
    Draw,
}

impl RoundOutcome {
    /// Check whether the round has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Get the winning mark, if any.
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            RoundOutcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// A rejected placement.
///
/// The match machine's guards keep these from ever occurring in normal
/// operation; they exist for hosts driving a [`Board`] directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// Index outside 0..=8.
    #[error("cell index {0} out of range")]
    OutOfRange(usize),
    /// Target cell already holds a mark.
    #[error("cell {0} is already occupied")]
    Occupied(usize),
}
