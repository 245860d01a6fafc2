//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), shared by the engine and
//! the computer players.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line};
