//! One human-versus-computer game.
//!
//! `Session` owns the board and alternates turns. A game ends as soon as
//! the side due to move next has no legal move; there is no passing.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Tile};
use crate::rules::{
    has_valid_move, make_move_at, score, valid_moves, CaptureSet, GameResult, MoveError, Score,
};
use crate::selector::MoveSelector;

use super::config::SessionConfig;

/// Whose move it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Human,
    Computer,
}

impl Turn {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Human => write!(f, "player"),
            Turn::Computer => write!(f, "computer"),
        }
    }
}

/// A move that was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The tile that moved.
    pub tile: Tile,
    /// Target cell.
    pub coord: Coord,
    /// Number of tiles flipped.
    pub flipped: u32,
    /// 1-based move number.
    pub ply: u32,
}

/// Final position summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub score: Score,
    pub result: GameResult,
    pub human_tile: Tile,
}

impl Outcome {
    fn new(score: Score, human_tile: Tile) -> Self {
        Self {
            score,
            result: GameResult::from_score(&score),
            human_tile,
        }
    }

    #[must_use]
    pub fn human_score(&self) -> u32 {
        self.score[self.human_tile]
    }

    #[must_use]
    pub fn computer_score(&self) -> u32 {
        self.score[self.human_tile.opponent()]
    }

    /// Absolute difference between the two scores.
    #[must_use]
    pub fn margin(&self) -> u32 {
        self.human_score().abs_diff(self.computer_score())
    }

    /// Winner by turn, `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Turn> {
        match self.result {
            GameResult::Winner(tile) if tile == self.human_tile => Some(Turn::Human),
            GameResult::Winner(_) => Some(Turn::Computer),
            GameResult::Draw => None,
        }
    }
}

/// Where the session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Waiting on the given side.
    InProgress(Turn),
    /// The side to move had no legal move.
    Finished(Outcome),
    /// The human gave up.
    Quit,
}

/// Why a session operation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is the {0}'s turn")]
    OutOfTurn(Turn),

    #[error("the game is over")]
    GameOver,

    #[error("the computer has no legal move")]
    NoLegalMove,

    #[error(transparent)]
    Illegal(#[from] MoveError),
}

/// A game in progress.
pub struct Session {
    board: Board,
    human_tile: Tile,
    selector: MoveSelector,
    status: Status,
    history: Vec<MoveRecord>,
}

impl Session {
    /// Start a game from the standard opening.
    pub fn new(config: SessionConfig) -> Self {
        Self::from_position(config, Board::starting())
    }

    /// Start a game from an arbitrary position; `config.first` moves next.
    pub fn from_position(config: SessionConfig, board: Board) -> Self {
        let selector = MoveSelector::new(config.selector_config());
        let mut session = Self {
            board,
            human_tile: config.human_tile,
            selector,
            status: Status::Quit,
            history: Vec::new(),
        };
        session.status = session.status_for(config.first);
        session
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_tile(&self) -> Tile {
        self.human_tile
    }

    pub fn computer_tile(&self) -> Tile {
        self.human_tile.opponent()
    }

    /// Tile count on the current board.
    pub fn score(&self) -> Score {
        score(&self.board)
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The computer opponent.
    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }

    /// Legal targets for the human right now.
    pub fn human_moves(&self) -> Vec<Coord> {
        valid_moves(&self.board, self.human_tile)
    }

    /// Play the human's move.
    ///
    /// An illegal move is refused with `SessionError::Illegal` and leaves
    /// the session as it was, so the caller can ask again.
    pub fn play_human(&mut self, coord: Coord) -> Result<CaptureSet, SessionError> {
        self.expect_turn(Turn::Human)?;
        self.apply(Turn::Human, coord)
    }

    /// Let the computer choose and play its move.
    pub fn play_computer(&mut self) -> Result<Coord, SessionError> {
        self.expect_turn(Turn::Computer)?;

        let coord = self
            .selector
            .select_move(&self.board, self.computer_tile())
            .ok_or(SessionError::NoLegalMove)?;
        self.apply(Turn::Computer, coord)?;

        Ok(coord)
    }

    /// End the session at the human's request.
    pub fn quit(&mut self) {
        tracing::debug!(moves = self.history.len(), "player quit");
        self.status = Status::Quit;
    }

    fn tile_for(&self, turn: Turn) -> Tile {
        match turn {
            Turn::Human => self.human_tile,
            Turn::Computer => self.computer_tile(),
        }
    }

    fn expect_turn(&self, turn: Turn) -> Result<(), SessionError> {
        match self.status {
            Status::InProgress(current) if current == turn => Ok(()),
            Status::InProgress(current) => Err(SessionError::OutOfTurn(current)),
            Status::Finished(_) | Status::Quit => Err(SessionError::GameOver),
        }
    }

    fn apply(&mut self, turn: Turn, coord: Coord) -> Result<CaptureSet, SessionError> {
        let tile = self.tile_for(turn);
        let flips = make_move_at(&mut self.board, tile, coord)?;

        self.history.push(MoveRecord {
            tile,
            coord,
            flipped: flips.len() as u32,
            ply: self.history.len() as u32 + 1,
        });
        self.status = self.status_for(turn.other());

        Ok(flips)
    }

    /// `InProgress(next)` if `next` can move, otherwise the final outcome.
    fn status_for(&self, next: Turn) -> Status {
        if has_valid_move(&self.board, self.tile_for(next)) {
            return Status::InProgress(next);
        }

        let outcome = Outcome::new(self.score(), self.human_tile);
        tracing::debug!(
            x = outcome.score[Tile::X],
            o = outcome.score[Tile::O],
            stuck = %next,
            "game over"
        );
        Status::Finished(outcome)
    }
}
