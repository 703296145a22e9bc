//! Core types: tiles, coordinates, the board, RNG.
//!
//! Nothing in here knows the capture rules; see `rules` for those.

pub mod tile;
pub mod coord;
pub mod board;
pub mod rng;

pub use tile::{ParseTileError, Tile, TileMap};
pub use coord::{is_on_board, Coord, OffBoardCoord, BOARD_SIZE};
pub use board::{Board, Cell};
pub use rng::{GameRng, GameRngState};
