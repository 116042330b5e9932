//! Match configuration parameters.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
///
/// Delays are in logical time units; hosts decide what a unit means
/// (the defaults read naturally as milliseconds).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Pause between a round turning terminal and the board resetting
    /// for the next round (default: 1200).
    pub round_settle_delay: u64,

    /// Reaction delay before the computer opponent moves (default: 600).
    pub computer_reaction_delay: u64,

    /// How long the match-winner celebration stays up (default: 4000).
    /// Purely cosmetic; has no effect on game state.
    pub celebration_duration: u64,

    /// Round wins needed to take the match (default: 3).
    pub match_win_threshold: u32,

    /// Seed for the strategist's fallback RNG.
    /// Same seed produces deterministic fallback moves.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            round_settle_delay: 1200,
            computer_reaction_delay: 600,
            celebration_duration: 4000,
            match_win_threshold: 3,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom match-win threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.match_win_threshold = threshold;
        self
    }

    /// Create a new config with a custom round-settle delay.
    #[must_use]
    pub fn with_round_settle_delay(mut self, delay: u64) -> Self {
        self.round_settle_delay = delay;
        self
    }

    /// Create a new config with a custom computer reaction delay.
    #[must_use]
    pub fn with_computer_reaction_delay(mut self, delay: u64) -> Self {
        self.computer_reaction_delay = delay;
        self
    }

    /// Create a new config with a custom celebration duration.
    #[must_use]
    pub fn with_celebration_duration(mut self, duration: u64) -> Self {
        self.celebration_duration = duration;
        self
    }
}
