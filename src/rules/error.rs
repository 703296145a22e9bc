//! Move rejection reasons.

use crate::core::Coord;

/// Why a move was rejected. Rejection never mutates the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Coordinates outside `[0, 7]`.
    #[error("({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },

    /// The target cell already holds a tile.
    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    /// The move would not flank any opposing tile.
    #[error("a move at {0} captures nothing")]
    NoCaptures(Coord),
}
