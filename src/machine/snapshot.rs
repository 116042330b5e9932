//! Read-only state projection and host notifications.

use serde::{Deserialize, Serialize};

use super::phase::{GameMode, SessionPhase};
use crate::board::{RoundOutcome, CELL_COUNT};
use crate::core::{Cell, Mark, MarkMap};

/// The read-only projection of current match state, re-emitted after
/// every accepted transition for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current session phase.
    pub phase: SessionPhase,

    /// Selected game mode; `None` while in the menu.
    pub mode: Option<GameMode>,

    /// Board cells, row-major.
    pub board: [Cell; CELL_COUNT],

    /// Mark to move next. Meaningless once the round is terminal.
    pub turn: Mark,

    /// Round outcome derived from the board.
    pub outcome: RoundOutcome,

    /// Cumulative round wins per mark.
    pub score: MarkMap<u32>,

    /// Whether some mark has taken the match.
    pub match_over: bool,

    /// Display names per mark.
    pub names: MarkMap<String>,

    /// Whether the match-winner celebration overlay is up.
    pub celebrating: bool,
}

/// Side-effect cues for the host, drained via
/// [`MatchMachine::drain_notifications`](super::MatchMachine::drain_notifications).
///
/// Queued synchronously with the state update that caused them; exactly
/// one `MoveAccepted` per accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A human or computer move was applied (hosts play a click sound).
    MoveAccepted {
        /// Mark that moved.
        mark: Mark,
        /// Cell the mark landed on.
        cell: usize,
    },
    /// The match-win threshold was reached (hosts show a celebration
    /// for the configured celebration duration).
    MatchCompleted {
        /// Mark that took the match.
        winner: Mark,
    },
}
