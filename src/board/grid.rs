//! The 9-cell grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{PlaceError, RoundOutcome};
use crate::core::{Cell, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// All 8 winning lines: three rows, three columns, two diagonals.
///
/// Checked in this fixed order; the first complete line decides the
/// round. Under legal play a board can never hold complete lines for
/// both marks, so no arbitration is needed.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board, row-major: cells 0,1,2 / 3,4,5 / 6,7,8.
///
/// ## Example
///
/// ```
/// use ttt_engine::{Board, Mark, RoundOutcome};
///
/// let board = Board::empty()
///     .place(0, Mark::X).unwrap()
///     .place(1, Mark::X).unwrap()
///     .place(2, Mark::X).unwrap();
///
/// assert_eq!(board.evaluate(), RoundOutcome::Win(Mark::X));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a board from raw cells (useful for hosts and tests).
    #[must_use]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get a cell's content, or `None` for an out-of-range index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Get all cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check whether a cell is in range and empty.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Check whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_some)
    }

    /// Indices of empty cells, in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[usize; CELL_COUNT]> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }

    /// Place a mark, returning the resulting board.
    ///
    /// Never mutates `self`; callers operate on the returned copy.
    pub fn place(&self, index: usize, mark: Mark) -> Result<Board, PlaceError> {
        if index >= CELL_COUNT {
            return Err(PlaceError::OutOfRange(index));
        }
        if self.cells[index].is_some() {
            return Err(PlaceError::Occupied(index));
        }

        let mut next = *self;
        next.cells[index] = Some(mark);
        Ok(next)
    }

    /// Evaluate the board's terminal state.
    ///
    /// First complete line in [`WINNING_LINES`] order wins; a full board
    /// with no line is a draw; anything else is in progress.
    #[must_use]
    pub fn evaluate(&self) -> RoundOutcome {
        for [a, b, c] in WINNING_LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return RoundOutcome::Win(mark);
                }
            }
        }

        if self.is_full() {
            RoundOutcome::Draw
        } else {
            RoundOutcome::InProgress
        }
    }
}
