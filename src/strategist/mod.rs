//! Heuristic computer opponent.
//!
//! Three-tier fixed-priority move selection: take any immediate win,
//! else block the opponent's immediate win, else pick a random empty
//! cell. Deliberately not a perfect player.

mod heuristic;

pub use heuristic::Strategist;
