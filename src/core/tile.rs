//! Tile identification and per-tile data storage.
//!
//! ## Tile
//!
//! The two opposing piece symbols. `X` plays black, `O` plays white.
//!
//! ## TileMap
//!
//! Per-tile storage backed by a fixed two-slot array for O(1) access.
//! Supports iteration and indexing by `Tile`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the two opposing piece symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Black.
    X,
    /// White.
    O,
}

impl Tile {
    /// Both tiles, `X` first.
    pub const ALL: [Tile; 2] = [Tile::X, Tile::O];

    /// Get the opposing tile.
    ///
    /// ```
    /// use reversi_engine::core::Tile;
    ///
    /// assert_eq!(Tile::X.opponent(), Tile::O);
    /// assert_eq!(Tile::O.opponent(), Tile::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Tile::X => Tile::O,
            Tile::O => Tile::X,
        }
    }

    /// Slot index used by `TileMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tile::X => 0,
            Tile::O => 1,
        }
    }

    /// The display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Tile::X => 'X',
            Tile::O => 'O',
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when text is neither `X` nor `O`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected X or O, got {0:?}")]
pub struct ParseTileError(pub String);

impl FromStr for Tile {
    type Err = ParseTileError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Tile::X),
            "o" | "O" => Ok(Tile::O),
            other => Err(ParseTileError(other.to_string())),
        }
    }
}

/// Per-tile data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_engine::core::{Tile, TileMap};
///
/// let mut counts: TileMap<u32> = TileMap::with_value(2);
/// counts[Tile::O] += 1;
///
/// assert_eq!(counts[Tile::X], 2);
/// assert_eq!(counts[Tile::O], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileMap<T> {
    data: [T; 2],
}

impl<T> TileMap<T> {
    /// Create a new TileMap with values from a factory function.
    pub fn new(factory: impl Fn(Tile) -> T) -> Self {
        Self {
            data: [factory(Tile::X), factory(Tile::O)],
        }
    }

    /// Create a new TileMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a tile's data.
    #[must_use]
    pub fn get(&self, tile: Tile) -> &T {
        &self.data[tile.index()]
    }

    /// Get a mutable reference to a tile's data.
    pub fn get_mut(&mut self, tile: Tile) -> &mut T {
        &mut self.data[tile.index()]
    }

    /// Iterate over (Tile, &T) pairs, `X` first.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, &T)> {
        Tile::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Tile> for TileMap<T> {
    type Output = T;

    fn index(&self, tile: Tile) -> &Self::Output {
        self.get(tile)
    }
}

impl<T> IndexMut<Tile> for TileMap<T> {
    fn index_mut(&mut self, tile: Tile) -> &mut Self::Output {
        self.get_mut(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for tile in Tile::ALL {
            assert_ne!(tile, tile.opponent());
            assert_eq!(tile, tile.opponent().opponent());
        }
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(format!("{}", Tile::X), "X");
        assert_eq!(format!("{}", Tile::O), "O");

        assert_eq!("x".parse::<Tile>(), Ok(Tile::X));
        assert_eq!(" O\n".parse::<Tile>(), Ok(Tile::O));
        assert!("z".parse::<Tile>().is_err());
        assert!("".parse::<Tile>().is_err());
    }

    #[test]
    fn test_tile_map_new() {
        let map = TileMap::new(|t| t.index() * 10);

        assert_eq!(map[Tile::X], 0);
        assert_eq!(map[Tile::O], 10);
    }

    #[test]
    fn test_tile_map_iter_order() {
        let map = TileMap::new(|t| t.symbol());
        let pairs: Vec<_> = map.iter().map(|(t, c)| (t, *c)).collect();

        assert_eq!(pairs, vec![(Tile::X, 'X'), (Tile::O, 'O')]);
    }

    #[test]
    fn test_tile_map_serde() {
        let mut map: TileMap<u32> = TileMap::default();
        map[Tile::O] = 7;

        let json = serde_json::to_string(&map).unwrap();
        let restored: TileMap<u32> = serde_json::from_str(&json).unwrap();

        assert_eq!(map, restored);
    }
}
