//! Move selector configuration.

use serde::{Deserialize, Serialize};

/// Move selector configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Requested search depth, as typed by the player.
    /// Recorded for display and logging; `GreedyCorner` always looks one ply ahead.
    pub depth: u32,

    /// Seed for the candidate shuffle.
    /// Same seed produces the same choices for the same positions.
    pub seed: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { depth: 1, seed: 42 }
    }
}

impl SelectorConfig {
    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
