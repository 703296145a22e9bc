//! Move selection context.
//!
//! `MoveSelector` owns the policy, its configuration and the seeded RNG the
//! policy draws from, so a session only has to hand it a board and a tile.

use crate::core::{Board, Coord, GameRng, GameRngState, Tile};

use super::config::SelectorConfig;
use super::policy::{GreedyCorner, MovePolicy};

/// The computer opponent.
pub struct MoveSelector {
    /// Selector configuration.
    config: SelectorConfig,

    /// RNG for candidate shuffling.
    rng: GameRng,

    /// Move policy.
    policy: Box<dyn MovePolicy>,

    /// Moves chosen so far.
    selections: u32,
}

impl MoveSelector {
    /// Create a greedy-corner selector seeded from `config.seed`.
    pub fn new(config: SelectorConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            policy: Box::new(GreedyCorner),
            selections: 0,
        }
    }

    /// Set a custom move policy.
    pub fn with_policy<P: MovePolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Choose a move for `tile` on `board`.
    ///
    /// Callers are expected to check `rules::has_valid_move` first; with no
    /// legal move this returns `None`.
    pub fn select_move(&mut self, board: &Board, tile: Tile) -> Option<Coord> {
        let choice = self.policy.select_move(board, tile, &mut self.rng);

        match choice {
            Some(coord) => {
                self.selections += 1;
                tracing::debug!(%tile, %coord, depth = self.config.depth, "computer move selected");
            }
            None => tracing::warn!(%tile, "move requested with no legal moves"),
        }

        choice
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Number of moves chosen since creation.
    pub fn selections(&self) -> u32 {
        self.selections
    }

    /// Snapshot of the shuffle RNG.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
