//! Reversi rules.
//!
//! Free functions over a borrowed `Board`:
//! - Capture sets and legality
//! - Legal move enumeration
//! - Move application
//! - Scoring and the end-of-game verdict

pub mod engine;
pub mod error;

pub use engine::{
    capture_set, capture_set_at, has_valid_move, is_game_over, is_on_corner, is_valid_move,
    make_move, make_move_at, score, valid_moves, CaptureSet, GameResult, Score,
};
pub use error::MoveError;
