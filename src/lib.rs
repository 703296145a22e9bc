//! # reversi-engine
//!
//! Reversi (8x8, flanking captures) rules and a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: The board is a plain value passed by reference.
//!    No globals; copies never share storage.
//!
//! 2. **Rejection, Not Panics**: Illegal moves come back as `MoveError`
//!    and leave the board untouched.
//!
//! 3. **Reproducible Opponent**: All randomness flows through a seeded
//!    `GameRng`, so the same seed replays the same game.
//!
//! ## Modules
//!
//! - `core`: Tiles, coordinates, the board, RNG
//! - `rules`: Capture sets, legality, move application, scoring
//! - `selector`: Corner-first one-ply greedy move selection
//! - `session`: Turn handling, input parsing and rendering for a text game

pub mod core;
pub mod rules;
pub mod selector;
pub mod session;

// Re-export commonly used types
pub use crate::core::{is_on_board, Board, Cell, Coord, GameRng, GameRngState, Tile, TileMap};

pub use crate::rules::{
    capture_set, is_on_corner, is_valid_move, make_move, score, valid_moves, CaptureSet,
    GameResult, MoveError, Score,
};

pub use crate::selector::{GreedyCorner, MovePolicy, MoveSelector, SelectorConfig, UniformRandom};

pub use crate::session::{Session, SessionConfig, SessionError, Status, Turn};
