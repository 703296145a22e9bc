//! Parsing what the player types.
//!
//! Moves are two digits, column then row, each `1`-`8`: `81` is the
//! top-right corner. `quit` in any case ends the game.

use crate::core::{Coord, Tile};

use super::game::Turn;

/// Malformed player input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{0:?} is not a move: type the x digit (1-8), then the y digit (1-8), e.g. 81 for the top-right corner")]
    MalformedMove(String),

    #[error("{0:?} is not a depth: enter a whole number")]
    BadDepth(String),
}

/// A line typed on the player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Coord),
}

/// `X` or `O`, case-insensitive.
#[must_use]
pub fn parse_tile_choice(text: &str) -> Option<Tile> {
    text.parse().ok()
}

/// `y` means the human starts; any other answer gives the computer the first move.
#[must_use]
pub fn parse_first_turn(text: &str) -> Turn {
    if text.trim().eq_ignore_ascii_case("y") {
        Turn::Human
    } else {
        Turn::Computer
    }
}

pub fn parse_depth(text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::BadDepth(trimmed.to_string()))
}

/// Parse a move or `quit`.
pub fn parse_command(text: &str) -> Result<Command, InputError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    // Anything below '1' wraps past the board and is rejected with the rest.
    match trimmed.as_bytes() {
        &[col, row] => Coord::try_new(col.wrapping_sub(b'1'), row.wrapping_sub(b'1'))
            .map(Command::Move)
            .ok_or_else(|| InputError::MalformedMove(trimmed.to_string())),
        _ => Err(InputError::MalformedMove(trimmed.to_string())),
    }
}
