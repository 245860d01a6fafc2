//! Game controller: the state machine between the menu and a game.

use std::time::Duration;

use tracing::{debug, error, info, instrument};

use crate::error::GameError;
use crate::games::tictactoe::GameStatus;
use crate::interface::{InputEvent, InputSource, Screen};
use crate::lobby::menu::MenuState;
use crate::session::{GameMode, GameSession};

/// State of the application.
enum AppState {
    Menu,
    InProgress(GameSession),
    Terminal(GameSession),
}

/// Copyable summary of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing a mode.
    Menu,
    /// A game is being played.
    InProgress(GameMode),
    /// A game has ended and waits for acknowledgement.
    Terminal(GameMode, GameStatus),
}

/// What the caller should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep stepping.
    Continue,
    /// The user quit from the menu.
    Quit,
}

/// Drives menu, turns and outcomes over an input source and a screen.
///
/// Call [`GameController::run`] to start the event loop, or
/// [`GameController::step`] to advance one transition at a time.
pub struct GameController<I, S> {
    input: I,
    screen: S,
    menu: MenuState,
    state: AppState,
    computer_delay: Duration,
}

impl<I: InputSource, S: Screen> GameController<I, S> {
    /// Creates a controller sitting in the menu.
    pub fn new(input: I, screen: S, computer_delay: Duration) -> Self {
        info!(
            delay_ms = computer_delay.as_millis() as u64,
            "Creating GameController"
        );
        Self {
            input,
            screen,
            menu: MenuState::new(),
            state: AppState::Menu,
            computer_delay,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match &self.state {
            AppState::Menu => Phase::Menu,
            AppState::InProgress(session) => Phase::InProgress(*session.mode()),
            AppState::Terminal(session) => Phase::Terminal(*session.mode(), *session.status()),
        }
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&GameSession> {
        match &self.state {
            AppState::Menu => None,
            AppState::InProgress(session) | AppState::Terminal(session) => Some(session),
        }
    }

    /// Menu state.
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// The screen, for inspection.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Starts a fresh session in `mode`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) {
        self.state = AppState::InProgress(GameSession::new(mode, self.computer_delay));
    }

    /// Abandons any session and returns to the menu.
    #[instrument(skip(self))]
    pub fn exit_to_menu(&mut self) {
        debug!("Returning to menu");
        self.state = AppState::Menu;
    }

    /// Runs the event loop until the user quits from the menu.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<(), GameError> {
        info!("Starting game event loop");
        self.render()?;
        loop {
            if self.step().await? == Flow::Quit {
                info!("Quitting");
                return Ok(());
            }
        }
    }

    /// Performs one transition and redraws.
    ///
    /// In the menu and on a finished game this consumes one input event.
    /// During a game it plays one full turn.
    pub async fn step(&mut self) -> Result<Flow, GameError> {
        let state = std::mem::replace(&mut self.state, AppState::Menu);

        let flow = match state {
            AppState::Menu => self.step_menu().await?,
            AppState::InProgress(session) => {
                self.step_game(session).await?;
                Flow::Continue
            }
            AppState::Terminal(session) => {
                self.step_terminal(session).await?;
                Flow::Continue
            }
        };

        if flow == Flow::Continue {
            self.render()?;
        }
        Ok(flow)
    }

    async fn step_menu(&mut self) -> Result<Flow, GameError> {
        match self.input.next_event().await? {
            InputEvent::MoveUp => self.menu.select_previous(),
            InputEvent::MoveDown => self.menu.select_next(),
            InputEvent::Confirm => {
                let mode = self.menu.selected_mode();
                info!(mode = %mode, "Mode selected");
                self.start(mode);
            }
            InputEvent::Cancel => return Ok(Flow::Quit),
            InputEvent::MoveLeft | InputEvent::MoveRight => {}
        }
        Ok(Flow::Continue)
    }

    async fn step_game(&mut self, mut session: GameSession) -> Result<(), GameError> {
        match session.play_turn(&mut self.input, &mut self.screen).await {
            Ok(status) if status.is_over() => {
                info!(status = ?status, "Game over");
                self.state = AppState::Terminal(session);
            }
            Ok(_) => self.state = AppState::InProgress(session),
            Err(err) if err.is_exit_to_menu() => {
                info!("Game abandoned");
                self.exit_to_menu();
            }
            Err(err) => {
                error!(error = %err, "Turn failed");
                self.state = AppState::InProgress(session);
                return Err(err);
            }
        }
        Ok(())
    }

    async fn step_terminal(&mut self, session: GameSession) -> Result<(), GameError> {
        // Put the session back before waiting, so a failed read leaves it intact.
        self.state = AppState::Terminal(session);
        match self.input.next_event().await? {
            InputEvent::Confirm | InputEvent::Cancel => self.exit_to_menu(),
            other => debug!(event = ?other, "Ignoring input on finished game"),
        }
        Ok(())
    }

    /// Draws the current state.
    pub fn render(&mut self) -> Result<(), GameError> {
        match &self.state {
            AppState::Menu => self.screen.render(&self.menu.view()),
            AppState::InProgress(session) | AppState::Terminal(session) => {
                session.render(&mut self.screen)
            }
        }
    }
}
