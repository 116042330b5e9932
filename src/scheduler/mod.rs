//! Delayed-transition bookkeeping.
//!
//! The match machine never blocks; its three delayed transitions
//! (round settle, computer reaction, celebration) are logical timers
//! that fire when the host advances time via [`Scheduler::advance`]
//! (through `MatchMachine::tick`). Arming a timer supersedes any
//! pending timer of the same kind, so at most one of each exists.

mod timers;

pub use timers::{Scheduler, TimerHandle, TimerKind};
