//! Core Connect Four game logic: board representation, player types, and the
//! engine that validates drops and tracks turns and outcomes.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{FullBoardPrecedence, GameEngine, Rules, Status};
pub use crate::error::MoveError;
