//! Move policies for the computer opponent.
//!
//! - `GreedyCorner`: corners first, otherwise the move that leaves the most
//!   own tiles on the board one ply later
//! - `UniformRandom`: any legal move, uniformly

use crate::core::{Board, Coord, GameRng, Tile};
use crate::rules::{make_move_at, score, valid_moves};

/// Policy for choosing one legal move.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `tile`.
    ///
    /// Returns `None` if `tile` has no legal move.
    fn select_move(&self, board: &Board, tile: Tile, rng: &mut GameRng) -> Option<Coord>;
}

/// Corner-first, one-ply greedy policy.
///
/// Candidates are shuffled before anything else, so the first corner found
/// and the first of several equally scoring moves are both random picks.
#[derive(Clone, Debug, Default)]
pub struct GreedyCorner;

impl MovePolicy for GreedyCorner {
    fn select_move(&self, board: &Board, tile: Tile, rng: &mut GameRng) -> Option<Coord> {
        let mut candidates = valid_moves(board, tile);
        rng.shuffle(&mut candidates);

        if let Some(&corner) = candidates.iter().find(|c| c.is_corner()) {
            tracing::trace!(%tile, %corner, "taking corner");
            return Some(corner);
        }

        let mut best: Option<(Coord, u32)> = None;
        for &candidate in &candidates {
            let Some(resulting) = resulting_score(board, tile, candidate) else {
                continue;
            };
            // Strict comparison: ties keep the earlier candidate
            if best.map_or(true, |(_, top)| resulting > top) {
                best = Some((candidate, resulting));
            }
        }

        if let Some((coord, resulting)) = best {
            tracing::trace!(%tile, %coord, resulting, candidates = candidates.len(), "greedy pick");
        }
        best.map(|(coord, _)| coord)
    }
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn select_move(&self, board: &Board, tile: Tile, rng: &mut GameRng) -> Option<Coord> {
        let moves = valid_moves(board, tile);
        if moves.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..moves.len());
        Some(moves[idx])
    }
}

/// Tiles `tile` would own after moving to `coord` on a scratch copy.
///
/// Returns `None` if the move is illegal.
#[must_use]
pub fn resulting_score(board: &Board, tile: Tile, coord: Coord) -> Option<u32> {
    let mut dupe = board.copy();
    make_move_at(&mut dupe, tile, coord).ok()?;
    Some(score(&dupe)[tile])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// X can take the (0,0) corner, or flip two tiles elsewhere.
    fn corner_position() -> Board {
        let mut board = Board::new();
        board.place(Coord::new(1, 1), Tile::O);
        board.place(Coord::new(2, 2), Tile::X);

        board.place(Coord::new(4, 5), Tile::O);
        board.place(Coord::new(5, 5), Tile::O);
        board.place(Coord::new(6, 5), Tile::X);
        board
    }

    #[test]
    fn test_greedy_prefers_corner() {
        let board = corner_position();
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let chosen = GreedyCorner.select_move(&board, Tile::X, &mut rng);
            assert_eq!(chosen, Some(Coord::new(0, 0)));
        }
    }

    #[test]
    fn test_greedy_takes_biggest_capture() {
        let mut board = Board::new();
        // Flips one
        board.place(Coord::new(3, 1), Tile::O);
        board.place(Coord::new(3, 2), Tile::X);
        // Flips three
        board.place(Coord::new(2, 5), Tile::O);
        board.place(Coord::new(3, 5), Tile::O);
        board.place(Coord::new(4, 5), Tile::O);
        board.place(Coord::new(5, 5), Tile::X);

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let chosen = GreedyCorner.select_move(&board, Tile::X, &mut rng);
            assert_eq!(chosen, Some(Coord::new(1, 5)));
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::new();
        let mut rng = GameRng::new(1);
        assert_eq!(GreedyCorner.select_move(&board, Tile::X, &mut rng), None);
        assert_eq!(UniformRandom.select_move(&board, Tile::X, &mut rng), None);
    }

    #[test]
    fn test_uniform_random_is_legal() {
        let board = Board::starting();
        let legal = valid_moves(&board, Tile::O);
        let mut rng = GameRng::new(3);

        for _ in 0..20 {
            let chosen = UniformRandom.select_move(&board, Tile::O, &mut rng).unwrap();
            assert!(legal.contains(&chosen));
        }
    }

    #[test]
    fn test_resulting_score() {
        let board = Board::starting();
        assert_eq!(resulting_score(&board, Tile::O, Coord::new(2, 3)), Some(4));
        assert_eq!(resulting_score(&board, Tile::X, Coord::new(2, 3)), None);
    }
}
