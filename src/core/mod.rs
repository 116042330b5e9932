//! Core primitives: marks, per-mark storage, RNG, configuration.

pub mod mark;
pub mod rng;
pub mod config;

pub use mark::{Cell, Mark, MarkMap};
pub use rng::MatchRng;
pub use config::MatchConfig;
