//! The 8x8 grid.
//!
//! `Board` owns its cells outright. Cloning (or `copy`) yields a board with
//! independent storage, so hypothetical moves never touch the original.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};
use super::tile::Tile;

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Tile),
}

impl Cell {
    /// The occupying tile, if any.
    #[must_use]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(tile) => Some(tile),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display symbol: the tile letter, or a space when empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(tile) => tile.symbol(),
        }
    }
}

/// Board state, indexed `[x][y]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a blank board with no starting pieces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board already in the starting configuration.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Clear every cell and place the four starting pieces.
    ///
    /// ```text
    /// (3,3)=X  (4,3)=O
    /// (3,4)=O  (4,4)=X
    /// ```
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

        self.cells[3][3] = Cell::Occupied(Tile::X);
        self.cells[3][4] = Cell::Occupied(Tile::O);
        self.cells[4][3] = Cell::Occupied(Tile::O);
        self.cells[4][4] = Cell::Occupied(Tile::X);
    }

    /// Deep duplicate with independent storage.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Read a cell.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.x() as usize][coord.y() as usize]
    }

    /// Overwrite a cell.
    ///
    /// Rules code goes through `rules::make_move`; this exists for setting up
    /// positions directly.
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.x() as usize][coord.y() as usize] = cell;
    }

    /// Shorthand for `set(coord, Cell::Occupied(tile))`.
    #[inline]
    pub fn place(&mut self, coord: Coord, tile: Tile) {
        self.set(coord, Cell::Occupied(tile));
    }

    /// Number of cells holding `tile`.
    #[must_use]
    pub fn count(&self, tile: Tile) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(tile))
            .count() as u32
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }

    /// Iterate over `(Coord, Cell)`, `x` outer loop and `y` inner loop.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 64);
        assert_eq!(board.count(Tile::X), 0);
        assert_eq!(board.count(Tile::O), 0);
    }

    #[test]
    fn test_reset_places_starting_pieces() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Tile::O);
        board.reset();

        assert_eq!(board.get(Coord::new(3, 3)), Cell::Occupied(Tile::X));
        assert_eq!(board.get(Coord::new(3, 4)), Cell::Occupied(Tile::O));
        assert_eq!(board.get(Coord::new(4, 3)), Cell::Occupied(Tile::O));
        assert_eq!(board.get(Coord::new(4, 4)), Cell::Occupied(Tile::X));
        assert_eq!(board.get(Coord::new(0, 0)), Cell::Empty);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Board::starting();
        let mut dupe = original.copy();

        dupe.place(Coord::new(0, 0), Tile::X);

        assert_eq!(original.get(Coord::new(0, 0)), Cell::Empty);
        assert_eq!(dupe.get(Coord::new(0, 0)), Cell::Occupied(Tile::X));
        assert_ne!(original, dupe);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Occupied(Tile::X).symbol(), 'X');
        assert_eq!(Cell::Occupied(Tile::O).tile(), Some(Tile::O));
        assert_eq!(Cell::Empty.tile(), None);
    }

    #[test]
    fn test_board_serde() {
        let board = Board::starting();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
