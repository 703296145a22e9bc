//! Helpers shared by the integration test suites.

use reversi_engine::core::{Board, GameRng, Tile};
use reversi_engine::rules::{has_valid_move, make_move_at};
use reversi_engine::selector::{MovePolicy, UniformRandom};

/// Play up to `plies` random legal moves from the opening.
///
/// A side with no move passes; play stops when neither side can move.
/// Returns the position and the tile due to move.
pub fn random_position(seed: u64, plies: usize) -> (Board, Tile) {
    let mut rng = GameRng::new(seed);
    let mut board = Board::starting();
    let mut tile = Tile::X;

    for _ in 0..plies {
        if !has_valid_move(&board, tile) {
            tile = tile.opponent();
            if !has_valid_move(&board, tile) {
                break;
            }
        }
        let coord = UniformRandom
            .select_move(&board, tile, &mut rng)
            .expect("side has a move");
        make_move_at(&mut board, tile, coord).expect("legal move");
        tile = tile.opponent();
    }

    (board, tile)
}
