//! Human-versus-computer play on top of the rules and the selector.
//!
//! - `config`: tile, first mover, depth and seed chosen up front
//! - `game`: turn alternation, game end, quit, move history
//! - `input`: parsing typed moves and setup answers
//! - `render`: board and score text

pub mod config;
pub mod game;
pub mod input;
pub mod render;

pub use config::SessionConfig;
pub use game::{MoveRecord, Outcome, Session, SessionError, Status, Turn};
pub use input::{
    parse_command, parse_depth, parse_first_turn, parse_tile_choice, Command, InputError,
};
pub use render::{render_board, render_outcome, render_scores, BoardView, QUIT_LINE, WELCOME};
