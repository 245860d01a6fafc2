//! Game session: one board, two players, one mode.

use crate::ai::{MinimaxAI, SimpleAI};
use crate::error::{GameError, GameErrorKind};
use crate::games::tictactoe::{Board, GameStatus, Mark, Position};
use crate::interface::{GameView, InputSource, Screen, View};
use crate::players::{ComputerPlayer, HumanPlayer, MoveContext, Player, turn_message};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who plays whom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[default]
    PlayerVsPlayer,
    /// Human as X against the Simple AI as O.
    PlayerVsComputer,
    /// Simple AI as X against the Minimax AI as O.
    ComputerVsComputer,
}

impl GameMode {
    /// All modes in menu order.
    pub const ALL: [GameMode; 3] = [
        GameMode::PlayerVsPlayer,
        GameMode::PlayerVsComputer,
        GameMode::ComputerVsComputer,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer (Simple AI)",
            GameMode::ComputerVsComputer => "Computer vs Computer (Simple AI vs Minimax AI)",
        }
    }

    /// Builds the X and O players for this mode.
    #[instrument]
    pub fn players(self, computer_delay: Duration) -> (Box<dyn Player>, Box<dyn Player>) {
        match self {
            GameMode::PlayerVsPlayer => (
                Box::new(HumanPlayer::default()),
                Box::new(HumanPlayer::default()),
            ),
            GameMode::PlayerVsComputer => (
                Box::new(HumanPlayer::default()),
                Box::new(ComputerPlayer::new(SimpleAI::new(), computer_delay)),
            ),
            GameMode::ComputerVsComputer => (
                Box::new(ComputerPlayer::new(SimpleAI::new(), computer_delay)),
                Box::new(ComputerPlayer::new(MinimaxAI::new(), computer_delay)),
            ),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single game from the first move to the outcome.
///
/// Owns the live board. The players only ever see copies of it.
#[derive(Getters)]
pub struct GameSession {
    /// The live board.
    board: Board,
    /// Mark to move next.
    current: Mark,
    /// Mode chosen in the menu.
    mode: GameMode,
    /// In progress, won or drawn.
    status: GameStatus,
    /// Cursor for human players.
    cursor: Position,
    #[getter(skip)]
    player_x: Box<dyn Player>,
    #[getter(skip)]
    player_o: Box<dyn Player>,
}

impl GameSession {
    /// Starts a session with the players `mode` calls for.
    #[instrument]
    pub fn new(mode: GameMode, computer_delay: Duration) -> Self {
        let (player_x, player_o) = mode.players(computer_delay);
        Self::with_players(mode, player_x, player_o)
    }

    /// Starts a session with explicit players.
    pub fn with_players(
        mode: GameMode,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
    ) -> Self {
        info!(
            mode = %mode,
            x = player_x.name(),
            o = player_o.name(),
            "Starting game session"
        );
        Self {
            board: Board::new(),
            current: Mark::X,
            mode,
            status: GameStatus::InProgress,
            cursor: Position::TopLeft,
            player_x,
            player_o,
        }
    }

    /// Player bound to `mark`.
    pub fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// Player to move.
    pub fn current_player(&self) -> &dyn Player {
        self.player(self.current)
    }

    /// True when the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places the current mark at `pos` and advances the game.
    ///
    /// On a win or a draw the status becomes terminal and the mark stays
    /// with the player who finished the game; otherwise the turn passes.
    /// A rejected placement changes nothing and fails with `InvalidMove`.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        if self.is_over() {
            debug!("Ignoring move after game end");
            return Ok(self.status);
        }

        let (col, row) = pos.coords();
        self.board.place(col, row, self.current)?;

        if self.board.check_win(self.current) {
            self.status = GameStatus::Won(self.current);
            info!(winner = %self.current, "Game won");
        } else if self.board.check_draw() {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current = self.current.opponent();
        }

        Ok(self.status)
    }

    /// Asks the current player for a move and applies it.
    ///
    /// Invalid moves are logged and dropped. `UserExitedToMenu` and fatal
    /// errors are passed to the caller.
    #[instrument(skip_all, fields(mode = %self.mode, mark = %self.current))]
    pub async fn play_turn(
        &mut self,
        input: &mut dyn InputSource,
        screen: &mut dyn Screen,
    ) -> Result<GameStatus, GameError> {
        let mark = self.current;
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };

        let mut ctx = MoveContext {
            board: self.board,
            mark,
            mode: self.mode,
            cursor: &mut self.cursor,
            input,
            screen,
        };
        let pos = player.get_move(&mut ctx).await?;

        match self.apply_move(pos) {
            Err(err) if matches!(err.kind(), GameErrorKind::InvalidMove(_)) => {
                debug!(error = %err, "Ignoring invalid move");
                Ok(self.status)
            }
            result => result,
        }
    }

    /// Outcome line once the game is over.
    pub fn outcome_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some("It's a draw! Press Enter to continue.".to_string()),
            GameStatus::Won(mark) => {
                let winner = self.player(mark);
                let message = match self.mode {
                    GameMode::ComputerVsComputer => {
                        format!("{} wins! Press Enter to continue.", winner.name())
                    }
                    GameMode::PlayerVsComputer if !winner.is_human() => {
                        "Computer wins! Press Enter to continue.".to_string()
                    }
                    _ => format!("Player {} wins! Press Enter to continue.", mark),
                };
                Some(message)
            }
        }
    }

    /// Outcome line, or whose turn it is.
    pub fn status_line(&self) -> String {
        self.outcome_message()
            .unwrap_or_else(|| turn_message(self.current_player().name()))
    }

    /// Draws the session. The cursor shows only while a human is to move.
    pub fn render(&self, screen: &mut dyn Screen) -> Result<(), GameError> {
        let message = self.status_line();
        let human_to_move = !self.is_over() && self.current_player().is_human();
        let cursor = human_to_move.then_some(self.cursor);
        screen.render(&View::Game(GameView {
            board: &self.board,
            mode: self.mode,
            cursor,
            message: &message,
        }))
    }
}
