//! Shared test collaborators.

#![allow(dead_code)]

use std::collections::VecDeque;
use tui_tictactoe::{
    Board, GameError, InputEvent, InputSource, Mark, MoveContext, Player, Position, Screen, View,
};

/// Input that replays a fixed list of events, then fails.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.events.extend(events);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_event(&mut self) -> Result<InputEvent, GameError> {
        self.events
            .pop_front()
            .ok_or_else(|| GameError::input("script exhausted"))
    }
}

/// One rendered view, owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Menu(usize),
    Game {
        board: Board,
        cursor: Option<Position>,
        message: String,
    },
}

/// Screen that remembers everything it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub frames: Vec<Frame>,
}

impl RecordingScreen {
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.frames.iter().rev().find_map(|frame| match frame {
            Frame::Game { message, .. } => Some(message.as_str()),
            Frame::Menu(_) => None,
        })
    }
}

impl Screen for RecordingScreen {
    fn render(&mut self, view: &View<'_>) -> Result<(), GameError> {
        let frame = match view {
            View::Menu(menu) => Frame::Menu(menu.selected),
            View::Game(game) => Frame::Game {
                board: *game.board,
                cursor: game.cursor,
                message: game.message.to_string(),
            },
        };
        self.frames.push(frame);
        Ok(())
    }
}

/// Player returning a fixed list of squares, valid or not.
pub struct ScriptedPlayer {
    name: String,
    human: bool,
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    pub fn new(name: &str, human: bool, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.to_string(),
            human,
            moves: moves.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn get_move(&mut self, _ctx: &mut MoveContext<'_>) -> Result<Position, GameError> {
        self.moves
            .pop_front()
            .ok_or_else(|| GameError::input("no scripted moves left"))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        self.human
    }
}

/// Position at `(col, row)`.
pub fn at(col: usize, row: usize) -> Position {
    Position::from_coords(col, row).expect("coordinates on the board")
}

/// Arrow presses that walk the cursor from `from` to `to`, then Confirm.
pub fn walk(from: Position, to: Position) -> Vec<InputEvent> {
    let right = (to.col() + 3 - from.col()) % 3;
    let down = (to.row() + 3 - from.row()) % 3;
    let mut events = vec![InputEvent::MoveRight; right];
    events.extend(vec![InputEvent::MoveDown; down]);
    events.push(InputEvent::Confirm);
    events
}

/// Events for a human-vs-human game played over `moves`, cursor starting top-left.
pub fn walk_all(moves: &[Position]) -> Vec<InputEvent> {
    let mut cursor = Position::TopLeft;
    let mut events = Vec::new();
    for &pos in moves {
        events.extend(walk(cursor, pos));
        cursor = pos;
    }
    events
}

/// Builds a board from a 9-character row-major layout of `X`, `O` and `.`.
pub fn board_from(layout: &str) -> Board {
    let mut board = Board::new();
    for (pos, ch) in Position::ALL.iter().zip(layout.chars()) {
        match ch {
            'X' => board.place_at(*pos, Mark::X).unwrap(),
            'O' => board.place_at(*pos, Mark::O).unwrap(),
            _ => {}
        }
    }
    board
}
