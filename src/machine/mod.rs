//! The match state machine.
//!
//! A [`MatchMachine`] is the sole owner of all mutable match state:
//! phase, mode, board, turn, score, names, history, timers, and RNG.
//! Hosts feed it intents and elapsed time, render its [`Snapshot`],
//! and drain its [`Notification`]s for sound/celebration cues.

mod phase;
mod snapshot;
mod state;

pub use phase::{GameMode, SessionPhase};
pub use snapshot::{Notification, Snapshot};
pub use state::{Intent, MatchMachine, MoveRecord, COMPUTER_NAME};
