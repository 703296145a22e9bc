//! The computer opponent.
//!
//! ## Overview
//!
//! Move selection is a one-ply greedy evaluation:
//!
//! 1. Enumerate the legal moves and shuffle them with a seeded RNG
//! 2. Take the first corner in shuffled order, if any
//! 3. Otherwise play each candidate on a scratch copy and keep the one that
//!    leaves the most own tiles (ties go to the earlier candidate)
//!
//! The configured depth is carried along but never deepens the evaluation.
//!
//! ## Usage
//!
//! ```rust
//! use reversi_engine::core::{Board, Tile};
//! use reversi_engine::rules::valid_moves;
//! use reversi_engine::selector::{MoveSelector, SelectorConfig};
//!
//! let board = Board::starting();
//! let mut selector = MoveSelector::new(SelectorConfig::default().with_seed(7));
//!
//! let coord = selector.select_move(&board, Tile::X).unwrap();
//! assert!(valid_moves(&board, Tile::X).contains(&coord));
//! ```

pub mod config;
pub mod policy;
pub mod search;

pub use config::SelectorConfig;
pub use policy::{resulting_score, GreedyCorner, MovePolicy, UniformRandom};
pub use search::MoveSelector;
