//! Text rendering of boards and scores.

use std::fmt;

use crate::core::{Board, Coord, Tile, BOARD_SIZE};
use crate::rules::Score;

use super::game::{Outcome, Turn};

const HEADER: &str = "    1   2   3   4   5   6   7   8";
const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
const SPACER: &str = "  |   |   |   |   |   |   |   |   |";

/// Greeting printed once at startup.
pub const WELCOME: &str =
    "Welcome to Reversi Game. I am a smart AI and i am going to beat you. Lets play!";

/// Farewell when the human types `quit`.
pub const QUIT_LINE: &str = "Ohh too bad! Too scared to face me huh?";

/// Displays a board as a bordered grid with 1-based labels.
///
/// ```text
///     1   2   3   4   5   6   7   8
///   +---+---+---+---+---+---+---+---+
///   |   |   |   |   |   |   |   |   |
/// 1 |   |   |   |   |   |   |   |   |
///   |   |   |   |   |   |   |   |   |
///   +---+---+---+---+---+---+---+---+
/// ```
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{BORDER}")?;

        for y in 0..BOARD_SIZE as u8 {
            writeln!(f, "{SPACER}")?;
            write!(f, "{} ", y + 1)?;
            for x in 0..BOARD_SIZE as u8 {
                write!(f, "| {} ", self.0.get(Coord::new(x, y)).symbol())?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{SPACER}")?;
            writeln!(f, "{BORDER}")?;
        }
        Ok(())
    }
}

/// The board as a multi-line string.
#[must_use]
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

/// Running score line shown before each move.
#[must_use]
pub fn render_scores(score: &Score, human: Tile, computer: Tile) -> String {
    format!(
        "You have {} points. The computer has {} points.",
        score[human], score[computer]
    )
}

/// Final tally plus the win/loss/tie verdict.
#[must_use]
pub fn render_outcome(outcome: &Outcome) -> String {
    let tally = format!(
        "X scored {} points. O scored {} points.",
        outcome.score[Tile::X],
        outcome.score[Tile::O]
    );
    let verdict = match outcome.winner() {
        Some(Turn::Human) => format!(
            "You beat the computer by {} points! Congratulations!",
            outcome.margin()
        ),
        Some(Turn::Computer) => format!(
            "You lost. The computer beat you by {} points.",
            outcome.margin()
        ),
        None => "The game was a tie!".to_string(),
    };
    format!("{tally}\n{verdict}")
}
