//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::Tile;
use crate::selector::SelectorConfig;

use super::game::Turn;

/// Everything the player chooses before the first move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The human's tile; the computer plays the other one.
    pub human_tile: Tile,

    /// Who moves first.
    pub first: Turn,

    /// Search depth handed to the selector.
    pub depth: u32,

    /// Seed for the selector's shuffle.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_tile: Tile::X,
            first: Turn::Human,
            depth: 1,
            seed: 42,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_human_tile(mut self, tile: Tile) -> Self {
        self.human_tile = tile;
        self
    }

    #[must_use]
    pub fn with_first(mut self, first: Turn) -> Self {
        self.first = first;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The computer's tile.
    #[must_use]
    pub fn computer_tile(&self) -> Tile {
        self.human_tile.opponent()
    }

    /// Selector settings derived from this session.
    #[must_use]
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig::default()
            .with_depth(self.depth)
            .with_seed(self.seed)
    }
}
