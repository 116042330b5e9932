//! The match machine: turn order, scoring, and timed transitions.
//!
//! ## Guards
//!
//! Invalid intents (occupied cell, move out of turn, blank names) are
//! silently ignored - the machine simply keeps its state and the host
//! re-renders the same snapshot. This is a deliberate idempotent-no-op
//! policy, not swallowed failure; rejections are logged at debug level.
//!
//! ## Time
//!
//! Hosts call [`MatchMachine::tick`] with elapsed logical time. Fired
//! timers re-validate their preconditions before mutating anything, so
//! a timer that outlived its state (round reset, match abandoned) is a
//! no-op.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::{GameMode, SessionPhase};
use super::snapshot::{Notification, Snapshot};
use crate::board::Board;
use crate::core::{Mark, MarkMap, MatchConfig, MatchRng};
use crate::scheduler::{Scheduler, TimerKind};
use crate::strategist::Strategist;

/// Name shown for the computer-controlled second player.
pub const COMPUTER_NAME: &str = "CPU";

/// One accepted move, for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Mark that moved.
    pub mark: Mark,
    /// Cell the mark landed on.
    pub cell: usize,
    /// Round number within the match (starts at 1).
    pub round: u32,
}

/// An external request to change state.
///
/// Every variant has a matching method on [`MatchMachine`]; the enum
/// exists for hosts that route events through a single channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Pick a mode from the menu.
    SelectMode(GameMode),
    /// Submit display names from the name-entry form.
    SubmitNames {
        /// First player's name.
        first: String,
        /// Second player's name (ignored vs computer).
        second: String,
    },
    /// Leave name entry for the menu.
    BackToMenu,
    /// Claim a cell for the mark whose turn it is.
    Move(usize),
    /// Restart the match, keeping mode and names.
    Reset,
    /// Abandon the session for the menu, clearing everything.
    ReturnToMenu,
}

/// Owns and advances all match state.
#[derive(Clone, Debug)]
pub struct MatchMachine {
    config: MatchConfig,
    phase: SessionPhase,
    mode: Option<GameMode>,
    board: Board,
    turn: Mark,
    score: MarkMap<u32>,
    names: MarkMap<String>,
    match_over: bool,
    celebrating: bool,
    round: u32,
    history: Vector<MoveRecord>,
    strategist: Strategist,
    rng: MatchRng,
    scheduler: Scheduler,
    notifications: Vec<Notification>,
}

impl MatchMachine {
    /// Create a machine in the menu phase.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let rng = MatchRng::new(config.seed);
        Self {
            config,
            phase: SessionPhase::Menu,
            mode: None,
            board: Board::empty(),
            turn: Mark::FIRST,
            score: MarkMap::with_value(0),
            names: MarkMap::with_value(String::new()),
            match_over: false,
            celebrating: false,
            round: 1,
            history: Vector::new(),
            strategist: Strategist::new(Mark::O),
            rng,
            scheduler: Scheduler::new(),
            notifications: Vec::new(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Accepted moves so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Project the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            mode: self.mode,
            board: *self.board.cells(),
            turn: self.turn,
            outcome: self.board.evaluate(),
            score: self.score.clone(),
            match_over: self.match_over,
            names: self.names.clone(),
            celebrating: self.celebrating,
        }
    }

    /// Drain queued side-effect cues, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Route an [`Intent`] to its handler.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SelectMode(mode) => self.select_mode(mode),
            Intent::SubmitNames { first, second } => self.submit_names(&first, &second),
            Intent::BackToMenu => self.back_to_menu(),
            Intent::Move(cell) => self.play_move(cell),
            Intent::Reset => self.reset(),
            Intent::ReturnToMenu => self.return_to_menu(),
        }
    }

    // === Menu / Name Entry ===

    /// Menu -> NameEntry: pick a mode and start a fresh match shell.
    pub fn select_mode(&mut self, mode: GameMode) {
        if self.phase != SessionPhase::Menu {
            tracing::debug!(?mode, phase = ?self.phase, "select_mode rejected");
            return;
        }

        self.clear_match_state();
        self.mode = Some(mode);
        self.names[Mark::X] = String::new();
        self.names[Mark::O] = match mode {
            GameMode::VsComputer => COMPUTER_NAME.to_string(),
            GameMode::LocalTwoPlayer => String::new(),
        };
        self.phase = SessionPhase::NameEntry;
    }

    /// NameEntry -> Playing, guarded on non-blank names.
    ///
    /// Vs the computer only the first name is required; the second is
    /// pinned to [`COMPUTER_NAME`]. An invalid submission changes
    /// nothing.
    pub fn submit_names(&mut self, first: &str, second: &str) {
        if self.phase != SessionPhase::NameEntry {
            tracing::debug!(phase = ?self.phase, "submit_names rejected");
            return;
        }

        let first = first.trim();
        let second = second.trim();

        match self.mode {
            Some(GameMode::VsComputer) => {
                if first.is_empty() {
                    tracing::debug!("submit_names rejected: blank name");
                    return;
                }
                self.names[Mark::X] = first.to_string();
                self.names[Mark::O] = COMPUTER_NAME.to_string();
            }
            Some(GameMode::LocalTwoPlayer) => {
                if first.is_empty() || second.is_empty() {
                    tracing::debug!("submit_names rejected: blank name");
                    return;
                }
                self.names[Mark::X] = first.to_string();
                self.names[Mark::O] = second.to_string();
            }
            None => return,
        }

        self.phase = SessionPhase::Playing;
        self.sync_computer_timer();
    }

    /// NameEntry -> Menu: discard the chosen mode and any entered names.
    pub fn back_to_menu(&mut self) {
        if self.phase != SessionPhase::NameEntry {
            tracing::debug!(phase = ?self.phase, "back_to_menu rejected");
            return;
        }
        self.clear_session();
    }

    // === Playing ===

    /// Claim `cell` for the mark whose turn it is.
    ///
    /// Rejected unless the cell is open, the round is in progress, the
    /// match is not over, and - vs the computer - it is the human's
    /// turn.
    pub fn play_move(&mut self, cell: usize) {
        if self.phase != SessionPhase::Playing {
            tracing::debug!(cell, phase = ?self.phase, "move rejected");
            return;
        }
        if self.match_over || self.board.evaluate().is_terminal() {
            tracing::debug!(cell, "move rejected: round settled");
            return;
        }
        if !self.board.is_open(cell) {
            tracing::debug!(cell, "move rejected: cell unavailable");
            return;
        }
        if self.mode == Some(GameMode::VsComputer) && self.turn == self.strategist.mark() {
            tracing::debug!(cell, "move rejected: computer's turn");
            return;
        }

        self.accept_move(cell);
    }

    /// Playing/MatchComplete -> Playing: restart the match.
    ///
    /// Zeroes score, board, turn, and history; keeps mode and names.
    pub fn reset(&mut self) {
        if !matches!(
            self.phase,
            SessionPhase::Playing | SessionPhase::MatchComplete
        ) {
            tracing::debug!(phase = ?self.phase, "reset rejected");
            return;
        }

        self.clear_match_state();
        self.phase = SessionPhase::Playing;
        self.sync_computer_timer();
    }

    /// Playing/MatchComplete -> Menu: abandon the session entirely.
    pub fn return_to_menu(&mut self) {
        if !matches!(
            self.phase,
            SessionPhase::Playing | SessionPhase::MatchComplete
        ) {
            tracing::debug!(phase = ?self.phase, "return_to_menu rejected");
            return;
        }
        self.clear_session();
    }

    // === Time ===

    /// Advance logical time and apply any fired timers.
    ///
    /// Each fired timer re-validates its preconditions against the
    /// machine's current state; stale firings change nothing.
    pub fn tick(&mut self, elapsed: u64) {
        for handle in self.scheduler.advance(elapsed) {
            match handle.kind {
                TimerKind::RoundSettle => self.on_round_settle(),
                TimerKind::ComputerMove => self.on_computer_move(),
                TimerKind::Celebration => self.celebrating = false,
            }
        }
    }

    // === Internals ===

    /// Apply an already-guarded move for the current turn's mark.
    fn accept_move(&mut self, cell: usize) {
        let mark = self.turn;
        let placed = match self.board.place(cell, mark) {
            Ok(board) => board,
            // Unreachable behind the guards; keep the machine infallible.
            Err(err) => {
                tracing::debug!(cell, %err, "placement refused");
                return;
            }
        };

        self.board = placed;
        self.turn = mark.opponent();
        self.history.push_back(MoveRecord {
            mark,
            cell,
            round: self.round,
        });
        self.notifications.push(Notification::MoveAccepted { mark, cell });

        if self.board.evaluate().is_terminal() {
            self.scheduler
                .arm(TimerKind::RoundSettle, self.config.round_settle_delay);
        }
        self.sync_computer_timer();
    }

    /// Round-resolution transition, fired by the settle timer.
    ///
    /// On a win, bumps the winner's score and completes the match if
    /// the threshold is reached; always starts the next round with an
    /// empty board and the first player to move.
    fn on_round_settle(&mut self) {
        if self.phase != SessionPhase::Playing {
            tracing::trace!(phase = ?self.phase, "stale settle timer ignored");
            return;
        }

        let outcome = self.board.evaluate();
        if !outcome.is_terminal() {
            tracing::trace!("stale settle timer ignored: round in progress");
            return;
        }

        if let Some(winner) = outcome.winner() {
            self.score[winner] += 1;
            if self.score[winner] >= self.config.match_win_threshold {
                self.match_over = true;
                self.phase = SessionPhase::MatchComplete;
                self.celebrating = true;
                self.scheduler
                    .arm(TimerKind::Celebration, self.config.celebration_duration);
                self.notifications
                    .push(Notification::MatchCompleted { winner });
                tracing::info!(%winner, score = self.score[winner], "match complete");
            }
        }

        self.board = Board::empty();
        self.turn = Mark::FIRST;
        self.round += 1;
        self.sync_computer_timer();
    }

    /// Computer-move transition, fired by the reaction timer.
    fn on_computer_move(&mut self) {
        if !self.computer_to_move() {
            tracing::trace!("stale computer timer ignored");
            return;
        }

        let cell = self.strategist.choose_move(&self.board, &mut self.rng);
        self.accept_move(cell);
    }

    /// Whether the computer-move precondition set currently holds.
    fn computer_to_move(&self) -> bool {
        self.mode == Some(GameMode::VsComputer)
            && self.phase == SessionPhase::Playing
            && !self.match_over
            && !self.board.evaluate().is_terminal()
            && self.turn == self.strategist.mark()
    }

    /// Re-arm or cancel the reaction timer to match its precondition.
    ///
    /// Called after every transition so the timer never fires into a
    /// board state other than the one it was armed for.
    fn sync_computer_timer(&mut self) {
        if self.computer_to_move() {
            self.scheduler
                .arm(TimerKind::ComputerMove, self.config.computer_reaction_delay);
        } else {
            self.scheduler.cancel(TimerKind::ComputerMove);
        }
    }

    /// Zero score, board, turn, history, and flags; keep mode and names.
    fn clear_match_state(&mut self) {
        self.board = Board::empty();
        self.turn = Mark::FIRST;
        self.score = MarkMap::with_value(0);
        self.match_over = false;
        self.celebrating = false;
        self.round = 1;
        self.history.clear();
        self.scheduler.cancel(TimerKind::RoundSettle);
        self.scheduler.cancel(TimerKind::ComputerMove);
        self.scheduler.cancel(TimerKind::Celebration);
    }

    /// Full reset back to the menu, clearing mode and names too.
    fn clear_session(&mut self) {
        self.clear_match_state();
        self.mode = None;
        self.names = MarkMap::with_value(String::new());
        self.phase = SessionPhase::Menu;
    }
}
