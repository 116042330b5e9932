//! Win/block/random move selection.

use crate::board::{Board, RoundOutcome};
use crate::core::{Mark, MatchRng};

/// Chooses moves for a computer-controlled mark.
///
/// Selection is deterministic whenever a winning or blocking cell
/// exists (ascending scan, first hit taken); only the final fallback
/// consults the injected RNG.
///
/// ## Example
///
/// ```
/// use ttt_engine::{Board, Mark, MatchRng, Strategist};
///
/// // O,O,_ on the top row: O to move must complete it.
/// let board = Board::empty()
///     .place(0, Mark::O).unwrap()
///     .place(1, Mark::O).unwrap();
///
/// let strategist = Strategist::new(Mark::O);
/// let mut rng = MatchRng::new(42);
/// assert_eq!(strategist.choose_move(&board, &mut rng), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Strategist {
    mark: Mark,
}

impl Strategist {
    /// Create a strategist playing the given mark.
    #[must_use]
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// The mark this strategist plays.
    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Pick a cell index for the current board.
    ///
    /// Input contract: the board must have at least one empty cell.
    /// A terminal board never reaches the strategist because the match
    /// machine re-validates before invoking it.
    #[must_use]
    pub fn choose_move(&self, board: &Board, rng: &mut MatchRng) -> usize {
        debug_assert!(!board.is_full(), "strategist invoked on a full board");

        // 1. Take any immediate win.
        if let Some(idx) = Self::completing_cell(board, self.mark) {
            return idx;
        }

        // 2. Block the opponent's immediate win.
        if let Some(idx) = Self::completing_cell(board, self.mark.opponent()) {
            return idx;
        }

        // 3. Otherwise pick a random empty cell.
        let open = board.empty_cells();
        open[rng.gen_range_usize(0..open.len())]
    }

    /// First empty cell (ascending) that would complete a line for `mark`.
    fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
        board.empty_cells().into_iter().find(|&idx| {
            board
                .place(idx, mark)
                .map_or(false, |b| b.evaluate() == RoundOutcome::Win(mark))
        })
    }
}
