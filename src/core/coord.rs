//! Board coordinates.
//!
//! Coordinates are zero-based `(x, y)` pairs with `x` the column and `y` the
//! row. Scans step through signed offsets, so the on-board predicate takes
//! `i32` and a `Coord` is only ever built for cells that exist: the fields are
//! private and deserialization goes through the same bounds check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// True iff both coordinates lie in `[0, 7]`.
#[inline]
#[must_use]
pub const fn is_on_board(x: i32, y: i32) -> bool {
    x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
}

/// Coordinate pair outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("({x}, {y}) is off the board")]
pub struct OffBoardCoord {
    pub x: u8,
    pub y: u8,
}

/// A cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: u8,
    y: u8,
}

/// Unchecked wire form of `Coord`.
#[derive(Deserialize)]
struct RawCoord {
    x: u8,
    y: u8,
}

impl TryFrom<RawCoord> for Coord {
    type Error = OffBoardCoord;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Self::try_new(raw.x, raw.y).ok_or(OffBoardCoord { x: raw.x, y: raw.y })
    }
}

impl Coord {
    /// Create a coordinate (0-7 each).
    ///
    /// # Panics
    ///
    /// Panics if either value is 8 or more. Use [`Coord::try_new`] or
    /// [`Coord::from_signed`] for unchecked input.
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        Self { x, y }
    }

    /// Create a coordinate, `None` when off the board.
    #[inline]
    #[must_use]
    pub fn try_new(x: u8, y: u8) -> Option<Self> {
        Self::from_signed(i32::from(x), i32::from(y))
    }

    /// Column, 0-7.
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row, 0-7.
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Build a coordinate from signed values, `None` when off the board.
    #[inline]
    #[must_use]
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        is_on_board(x, y).then(|| Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Step by `(dx, dy)`, `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::from_signed(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// True for the four board-extreme cells.
    #[inline]
    #[must_use]
    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.x == 0 || self.x == last) && (self.y == 0 || self.y == last)
    }

    /// All 64 cells, `x` outer loop and `y` inner loop.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8).flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Coord { x, y }))
    }
}

/// Formats as the two 1-based digits a player types, column first.
impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.x + 1, self.y + 1)
    }
}
