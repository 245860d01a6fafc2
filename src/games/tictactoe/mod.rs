//! Tic-tac-toe board model and rules.

mod position;
pub mod rules;
mod types;

pub use position::{BOARD_SIZE, Direction, Position};
pub use types::{Board, GameStatus, Mark, MoveError, Square};
