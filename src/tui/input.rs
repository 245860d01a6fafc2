//! Keyboard input via crossterm.

use crate::error::GameError;
use crate::interface::{InputEvent, InputSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// How long the reader waits for a key before checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a key press to an input event.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Up => Some(InputEvent::MoveUp),
        KeyCode::Down => Some(InputEvent::MoveDown),
        KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Esc => Some(InputEvent::Cancel),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Cancel)
        }
        _ => None,
    }
}

/// Message from the reader task.
type KeyMessage = Result<InputEvent, String>;

/// Input events read from the terminal on a blocking task.
pub struct KeyboardInput {
    rx: mpsc::UnboundedReceiver<KeyMessage>,
}

impl KeyboardInput {
    /// Creates an input fed by the returned sender.
    pub fn channel() -> (mpsc::UnboundedSender<KeyMessage>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Starts reading the terminal.
    ///
    /// The reader stops shortly after this input is dropped.
    pub fn spawn() -> Self {
        let (tx, input) = Self::channel();
        tokio::task::spawn_blocking(move || read_keys(tx));
        input
    }
}

fn read_keys(tx: mpsc::UnboundedSender<KeyMessage>) {
    info!("Keyboard reader started");
    while !tx.is_closed() {
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(e) => {
                error!(error = %e, "Keyboard poll failed");
                let _ = tx.send(Err(e.to_string()));
                return;
            }
        };
        if !ready {
            continue;
        }
        match event::read() {
            // Key release events are reported too on some terminals.
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                if let Some(event) = map_key(key) {
                    debug!(event = ?event, "Key mapped");
                    if tx.send(Ok(event)).is_err() {
                        break;
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Keyboard read failed");
                let _ = tx.send(Err(e.to_string()));
                return;
            }
        }
    }
    info!("Keyboard reader stopped");
}

#[async_trait::async_trait]
impl InputSource for KeyboardInput {
    async fn next_event(&mut self) -> Result<InputEvent, GameError> {
        match self.rx.recv().await {
            Some(Ok(event)) => Ok(event),
            Some(Err(message)) => Err(GameError::input(message)),
            None => Err(GameError::input("keyboard reader stopped")),
        }
    }
}
