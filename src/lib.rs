//! # ttt-engine
//!
//! A best-of-N tic-tac-toe match engine with session scoring and a
//! heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: No rendering, audio, or I/O. Hosts feed intents in
//!    and draw whatever [`Snapshot`] the machine currently holds.
//!
//! 2. **Single Owner**: All mutable match state lives in one
//!    [`MatchMachine`] instance. Nothing is ambient or global.
//!
//! 3. **Host-Driven Time**: Delayed transitions (round settle, computer
//!    reaction, celebration) are logical timers advanced via
//!    [`MatchMachine::tick`]. No threads, no awaiting.
//!
//! 4. **Deterministic Randomness**: The strategist's only random step
//!    (its fallback move) draws from a seeded [`MatchRng`], so tests can
//!    pin a seed and assert exact selections.
//!
//! ## Modules
//!
//! - `core`: Marks, per-mark maps, RNG, configuration
//! - `board`: 3x3 grid with pure win/draw evaluation
//! - `strategist`: Win/block/random heuristic opponent
//! - `scheduler`: Delayed-transition bookkeeping with supersession
//! - `machine`: The match state machine and its snapshot interface
//!
//! ## Example
//!
//! ```
//! use ttt_engine::{GameMode, Mark, MatchConfig, MatchMachine};
//!
//! let mut machine = MatchMachine::new(MatchConfig::default());
//! machine.select_mode(GameMode::LocalTwoPlayer);
//! machine.submit_names("Ada", "Grace");
//! machine.play_move(4);
//!
//! let snapshot = machine.snapshot();
//! assert_eq!(snapshot.board[4], Some(Mark::X));
//! assert_eq!(snapshot.turn, Mark::O);
//! ```

pub mod core;
pub mod board;
pub mod strategist;
pub mod scheduler;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Cell, Mark, MarkMap, MatchConfig, MatchRng};

pub use crate::board::{Board, PlaceError, RoundOutcome, CELL_COUNT, WINNING_LINES};

pub use crate::strategist::Strategist;

pub use crate::scheduler::{Scheduler, TimerHandle, TimerKind};

pub use crate::machine::{
    GameMode, Intent, MatchMachine, MoveRecord, Notification, SessionPhase, Snapshot,
    COMPUTER_NAME,
};
