//! Session phases and game modes.

use serde::{Deserialize, Serialize};

/// How the second player is controlled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing one machine.
    LocalTwoPlayer,
    /// Human plays `X`, the strategist plays `O`.
    VsComputer,
}

/// The single governing variable for which intents are accepted.
///
/// While in `NameEntry` and beyond, the selected [`GameMode`] lives in
/// the machine's `mode` field and travels with every snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Mode selection.
    Menu,
    /// Collecting display names for the chosen mode.
    NameEntry,
    /// Rounds in progress.
    Playing,
    /// A mark reached the match-win threshold; moves are rejected.
    MatchComplete,
}
