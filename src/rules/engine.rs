//! Flanking-capture rules.
//!
//! - What moves are legal
//! - Which tiles a move flips
//! - How moves modify the board
//! - Scoring and the final verdict
//!
//! Only `make_move` mutates; everything else reads the board it is given.

use smallvec::SmallVec;

use crate::core::{Board, Cell, Coord, Tile, TileMap};

use super::error::MoveError;

/// Cells flipped by one move, in discovery order.
///
/// A move at (3,3) with every line full flips 19 tiles, the most any move
/// can, so this never spills to the heap.
pub type CaptureSet = SmallVec<[Coord; 19]>;

/// Occupied-cell count per tile.
pub type Score = TileMap<u32>;

/// Scan order for capture lines.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// More tiles on the board.
    Winner(Tile),
    /// Equal counts.
    Draw,
}

impl GameResult {
    /// Verdict from final tile counts.
    #[must_use]
    pub fn from_score(score: &Score) -> Self {
        match score[Tile::X].cmp(&score[Tile::O]) {
            std::cmp::Ordering::Greater => GameResult::Winner(Tile::X),
            std::cmp::Ordering::Less => GameResult::Winner(Tile::O),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a tile won.
    #[must_use]
    pub fn is_winner(&self, tile: Tile) -> bool {
        matches!(self, GameResult::Winner(t) if *t == tile)
    }
}

/// Tiles that would flip if `tile` moved to `(x, y)`.
///
/// Each direction is walked outward across a run of opposing tiles; the run
/// counts only when it ends on `tile`. Runs are appended far end first.
pub fn capture_set(board: &Board, tile: Tile, x: i32, y: i32) -> Result<CaptureSet, MoveError> {
    let origin = Coord::from_signed(x, y).ok_or(MoveError::OffBoard { x, y })?;
    capture_set_at(board, tile, origin)
}

/// `capture_set` for a coordinate already known to be on the board.
pub fn capture_set_at(board: &Board, tile: Tile, origin: Coord) -> Result<CaptureSet, MoveError> {
    if !board.get(origin).is_empty() {
        return Err(MoveError::Occupied(origin));
    }

    let own = Cell::Occupied(tile);
    let other = Cell::Occupied(tile.opponent());
    let mut flips = CaptureSet::new();

    for (dx, dy) in DIRECTIONS {
        let mut run: SmallVec<[Coord; 6]> = SmallVec::new();
        let mut cursor = origin.offset(dx, dy);

        while let Some(cell) = cursor {
            if board.get(cell) != other {
                break;
            }
            run.push(cell);
            cursor = cell.offset(dx, dy);
        }

        // Ran off the board or hit an empty cell: nothing flips this way.
        let closed = cursor.is_some_and(|end| board.get(end) == own);
        if closed && !run.is_empty() {
            flips.extend(run.into_iter().rev());
        }
    }

    if flips.is_empty() {
        Err(MoveError::NoCaptures(origin))
    } else {
        Ok(flips)
    }
}

/// True iff `tile` may move to `(x, y)`.
#[must_use]
pub fn is_valid_move(board: &Board, tile: Tile, x: i32, y: i32) -> bool {
    capture_set(board, tile, x, y).is_ok()
}

/// Every legal target for `tile`, `x` outer loop and `y` inner loop.
#[must_use]
pub fn valid_moves(board: &Board, tile: Tile) -> Vec<Coord> {
    Coord::all()
        .filter(|&c| capture_set_at(board, tile, c).is_ok())
        .collect()
}

/// True iff `tile` has at least one legal move.
#[must_use]
pub fn has_valid_move(board: &Board, tile: Tile) -> bool {
    Coord::all().any(|c| capture_set_at(board, tile, c).is_ok())
}

/// Place `tile` at `(x, y)` and flip its captures.
///
/// Returns the flipped cells. On rejection the board is left untouched.
pub fn make_move(board: &mut Board, tile: Tile, x: i32, y: i32) -> Result<CaptureSet, MoveError> {
    let origin = Coord::from_signed(x, y).ok_or(MoveError::OffBoard { x, y })?;
    make_move_at(board, tile, origin)
}

/// `make_move` for a coordinate already known to be on the board.
pub fn make_move_at(board: &mut Board, tile: Tile, origin: Coord) -> Result<CaptureSet, MoveError> {
    let flips = capture_set_at(board, tile, origin).inspect_err(|err| {
        tracing::debug!(%tile, %origin, %err, "move rejected");
    })?;

    board.place(origin, tile);
    for &cell in &flips {
        board.place(cell, tile);
    }

    Ok(flips)
}

/// Count every tile on the board.
#[must_use]
pub fn score(board: &Board) -> Score {
    TileMap::new(|tile| board.count(tile))
}

/// True iff `(x, y)` is one of the four corners.
#[must_use]
pub fn is_on_corner(x: i32, y: i32) -> bool {
    Coord::from_signed(x, y).is_some_and(Coord::is_corner)
}

/// True iff neither tile can move.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_valid_move(board, Tile::X) && !has_valid_move(board, Tile::O)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves() {
        let board = Board::starting();

        // Standard four openings per side
        assert_eq!(
            valid_moves(&board, Tile::X),
            vec![
                Coord::new(2, 4),
                Coord::new(3, 5),
                Coord::new(4, 2),
                Coord::new(5, 3)
            ]
        );
        assert_eq!(
            valid_moves(&board, Tile::O),
            vec![
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(4, 5),
                Coord::new(5, 4)
            ]
        );
    }

    #[test]
    fn test_rejections() {
        let board = Board::starting();

        assert_eq!(
            capture_set(&board, Tile::X, -1, 3),
            Err(MoveError::OffBoard { x: -1, y: 3 })
        );
        assert_eq!(
            capture_set(&board, Tile::X, 3, 3),
            Err(MoveError::Occupied(Coord::new(3, 3)))
        );
        assert_eq!(
            capture_set(&board, Tile::X, 0, 0),
            Err(MoveError::NoCaptures(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_run_off_board_captures_nothing() {
        let mut board = Board::new();
        for x in 1..8 {
            board.place(Coord::new(x, 0), Tile::O);
        }
        assert!(!is_valid_move(&board, Tile::X, 0, 0));

        // Run closed by an empty cell
        board.set(Coord::new(7, 0), Cell::Empty);
        assert!(!is_valid_move(&board, Tile::X, 0, 0));

        board.place(Coord::new(7, 0), Tile::X);
        assert!(is_valid_move(&board, Tile::X, 0, 0));
    }

    #[test]
    fn test_capture_order_is_far_end_first() {
        let mut board = Board::new();
        board.place(Coord::new(1, 0), Tile::O);
        board.place(Coord::new(2, 0), Tile::O);
        board.place(Coord::new(3, 0), Tile::O);
        board.place(Coord::new(4, 0), Tile::X);

        let flips = capture_set(&board, Tile::X, 0, 0).unwrap();
        assert_eq!(
            flips.as_slice(),
            &[Coord::new(3, 0), Coord::new(2, 0), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_multi_direction_capture() {
        let mut board = Board::new();
        // X at (2,2) with O between on a row, a column and a diagonal
        board.place(Coord::new(3, 2), Tile::O);
        board.place(Coord::new(4, 2), Tile::X);
        board.place(Coord::new(2, 3), Tile::O);
        board.place(Coord::new(2, 4), Tile::X);
        board.place(Coord::new(3, 3), Tile::O);
        board.place(Coord::new(4, 4), Tile::X);

        let flips = make_move(&mut board, Tile::X, 2, 2).unwrap();
        assert_eq!(flips.len(), 3);
        assert_eq!(board.count(Tile::O), 0);
        assert_eq!(board.count(Tile::X), 7);
    }

    #[test]
    fn test_make_move_rejection_is_noop() {
        let mut board = Board::starting();
        let before = board.clone();

        assert!(make_move(&mut board, Tile::X, 0, 0).is_err());
        assert!(make_move(&mut board, Tile::X, 4, 4).is_err());
        assert!(make_move(&mut board, Tile::X, 9, 9).is_err());

        assert_eq!(board, before);
    }

    #[test]
    fn test_score_and_verdict() {
        let board = Board::starting();
        let s = score(&board);
        assert_eq!(s[Tile::X], 2);
        assert_eq!(s[Tile::O], 2);
        assert_eq!(GameResult::from_score(&s), GameResult::Draw);

        let mut lopsided = Score::default();
        lopsided[Tile::O] = 5;
        let result = GameResult::from_score(&lopsided);
        assert!(result.is_winner(Tile::O));
        assert!(!result.is_winner(Tile::X));
    }

    #[test]
    fn test_is_on_corner() {
        assert!(is_on_corner(0, 0));
        assert!(is_on_corner(7, 0));
        assert!(is_on_corner(0, 7));
        assert!(is_on_corner(7, 7));
        assert!(!is_on_corner(0, 3));
        assert!(!is_on_corner(8, 8));
    }

    #[test]
    fn test_game_over_on_full_board() {
        let mut board = Board::new();
        for c in Coord::all() {
            board.place(c, Tile::X);
        }
        assert!(is_game_over(&board));
        assert!(!is_game_over(&Board::starting()));
    }
}
