//! Terminal tic-tac-toe.
//!
//! Two humans, a human against a heuristic opponent, or the heuristic
//! opponent against a perfect minimax player.
//!
//! # Architecture
//!
//! - **Games**: board model and rules
//! - **AI**: the Simple and Minimax strategies
//! - **Players**: human and computer move sources behind one trait
//! - **Session**: one game, its players and its outcome
//! - **Lobby**: menu and game state machine
//! - **TUI**: crossterm input and ratatui drawing
//!
//! # Example
//!
//! ```
//! use tui_tictactoe::{Board, Mark, MinimaxAI, Strategy};
//!
//! let mut board = Board::new();
//! board.place(0, 0, Mark::X).unwrap();
//! board.place(1, 0, Mark::X).unwrap();
//! board.place(0, 1, Mark::O).unwrap();
//! board.place(1, 1, Mark::O).unwrap();
//!
//! let pos = MinimaxAI::new().get_move(&board, Mark::X).unwrap();
//! assert_eq!(pos.coords(), (2, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod cli;
mod config;
mod error;
mod games;
mod interface;
mod lobby;
mod players;
mod session;
pub mod tui;
mod version;

// Crate-level exports - Board model
pub use games::tictactoe::{
    BOARD_SIZE, Board, Direction, GameStatus, Mark, MoveError, Position, Square, rules,
};

// Crate-level exports - Strategies
pub use ai::{MinimaxAI, SimpleAI, Strategy};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, MoveContext, Player, turn_message};

// Crate-level exports - Session and state machine
pub use lobby::{Flow, GameController, MenuState, Phase};
pub use session::{GameMode, GameSession};

// Crate-level exports - Collaborators
pub use interface::{GameView, InputEvent, InputSource, MenuView, Screen, View};

// Crate-level exports - Errors, configuration, CLI
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, GameErrorKind};
pub use version::{VersionInfo, format_build_timestamp};
