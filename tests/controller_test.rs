//! State machine tests driven by scripted input.

mod common;

use common::{Frame, RecordingScreen, ScriptedInput, ScriptedPlayer, at, walk, walk_all};
use std::time::Duration;
use tui_tictactoe::{
    Flow, GameController, GameErrorKind, GameMode, GameSession, GameStatus, InputEvent, Mark,
    MoveError, Phase, Position,
};

type Controller = GameController<ScriptedInput, RecordingScreen>;

fn controller(events: Vec<InputEvent>, delay: Duration) -> Controller {
    GameController::new(ScriptedInput::new(events), RecordingScreen::default(), delay)
}

/// Steps until the phase is terminal, failing after `limit` steps.
async fn step_until_over(controller: &mut Controller, limit: usize) {
    for _ in 0..limit {
        if matches!(controller.phase(), Phase::Terminal(..)) {
            return;
        }
        controller.step().await.unwrap();
    }
    assert!(matches!(controller.phase(), Phase::Terminal(..)));
}

fn column_two_win() -> Vec<InputEvent> {
    let mut events = vec![InputEvent::Confirm];
    events.extend(walk_all(&[at(2, 0), at(1, 0), at(2, 2), at(1, 1)]));
    // X tries the occupied center first.
    events.push(InputEvent::Confirm);
    events.extend(walk(at(1, 1), at(2, 1)));
    events
}

#[tokio::test]
async fn test_pvp_win_reaches_terminal_then_menu() {
    let mut events = column_two_win();
    events.push(InputEvent::Confirm);
    let mut controller = controller(events, Duration::ZERO);

    step_until_over(&mut controller, 10).await;
    assert_eq!(
        controller.phase(),
        Phase::Terminal(GameMode::PlayerVsPlayer, GameStatus::Won(Mark::X))
    );
    let session = controller.session().unwrap();
    assert!(session.board().check_win(Mark::X));
    assert_eq!(session.board().mark_count(Mark::X), 3);
    assert_eq!(session.board().mark_count(Mark::O), 2);
    assert_eq!(
        controller.screen().last_message(),
        Some("Player X wins! Press Enter to continue.")
    );

    assert_eq!(controller.step().await.unwrap(), Flow::Continue);
    assert_eq!(controller.phase(), Phase::Menu);
    assert_eq!(controller.screen().last(), Some(&Frame::Menu(0)));
}

#[tokio::test]
async fn test_pvp_draw_message() {
    let mut events = vec![InputEvent::Confirm];
    events.extend(walk_all(&[
        at(0, 0),
        at(1, 1),
        at(2, 2),
        at(1, 0),
        at(1, 2),
        at(0, 2),
        at(2, 0),
        at(2, 1),
        at(0, 1),
    ]));
    let mut controller = controller(events, Duration::ZERO);

    step_until_over(&mut controller, 12).await;
    assert_eq!(
        controller.phase(),
        Phase::Terminal(GameMode::PlayerVsPlayer, GameStatus::Draw)
    );
    assert_eq!(
        controller.screen().last_message(),
        Some("It's a draw! Press Enter to continue.")
    );
}

#[tokio::test]
async fn test_menu_wraps_and_cancel_quits() {
    let events = vec![
        InputEvent::MoveUp,
        InputEvent::MoveLeft,
        InputEvent::MoveDown,
        InputEvent::MoveDown,
        InputEvent::Cancel,
    ];
    let mut controller = controller(events, Duration::ZERO);

    controller.step().await.unwrap();
    assert_eq!(
        controller.menu().selected_mode(),
        GameMode::ComputerVsComputer
    );
    controller.step().await.unwrap();
    assert_eq!(controller.menu().selected_index(), 2);
    controller.step().await.unwrap();
    assert_eq!(controller.menu().selected_index(), 0);
    controller.step().await.unwrap();
    assert_eq!(
        controller.menu().selected_mode(),
        GameMode::PlayerVsComputer
    );

    assert_eq!(controller.step().await.unwrap(), Flow::Quit);
    assert_eq!(controller.phase(), Phase::Menu);
}

#[tokio::test]
async fn test_run_renders_menu_and_returns_on_quit() {
    let events = vec![InputEvent::MoveDown, InputEvent::Cancel];
    let mut controller = controller(events, Duration::ZERO);
    controller.run().await.unwrap();
    let frames = &controller.screen().frames;
    assert_eq!(frames.as_slice(), &[Frame::Menu(0), Frame::Menu(1)]);
}

#[tokio::test]
async fn test_cancel_during_human_turn_returns_to_menu() {
    let events = vec![
        InputEvent::MoveDown,
        InputEvent::Confirm,
        InputEvent::MoveRight,
        InputEvent::Cancel,
    ];
    let mut controller = controller(events, Duration::ZERO);

    controller.step().await.unwrap();
    controller.step().await.unwrap();
    assert_eq!(
        controller.phase(),
        Phase::InProgress(GameMode::PlayerVsComputer)
    );

    controller.step().await.unwrap();
    assert_eq!(controller.phase(), Phase::Menu);
    assert!(controller.session().is_none());
    assert_eq!(
        controller.menu().selected_mode(),
        GameMode::PlayerVsComputer
    );
    assert_eq!(controller.screen().last(), Some(&Frame::Menu(1)));
}

#[tokio::test]
async fn test_human_cursor_moves_redraw() {
    let events = vec![InputEvent::Confirm, InputEvent::MoveLeft, InputEvent::MoveUp];
    let mut controller = controller(events, Duration::ZERO);
    controller.step().await.unwrap();

    // The script runs out mid-turn.
    assert!(controller.step().await.is_err());
    let cursors: Vec<_> = controller
        .screen()
        .frames
        .iter()
        .filter_map(|frame| match frame {
            Frame::Game { cursor, .. } => Some(*cursor),
            Frame::Menu(_) => None,
        })
        .collect();
    assert_eq!(
        cursors,
        vec![
            Some(Position::TopLeft),
            Some(Position::TopRight),
            Some(Position::BottomRight),
        ]
    );
}

#[tokio::test]
async fn test_computer_vs_computer_never_lets_simple_win() {
    let events = vec![InputEvent::MoveUp, InputEvent::Confirm];
    let mut controller = controller(events, Duration::ZERO);

    step_until_over(&mut controller, 12).await;
    let message = controller.screen().last_message().unwrap().to_string();
    match controller.phase() {
        Phase::Terminal(GameMode::ComputerVsComputer, GameStatus::Won(Mark::O)) => {
            assert_eq!(message, "Minimax AI wins! Press Enter to continue.");
        }
        Phase::Terminal(GameMode::ComputerVsComputer, GameStatus::Draw) => {
            assert_eq!(message, "It's a draw! Press Enter to continue.");
        }
        other => panic!("unexpected phase {other:?}"),
    }

    // Computer turns never show a cursor.
    assert!(controller.screen().frames.iter().all(|frame| match frame {
        Frame::Game { cursor, .. } => cursor.is_none(),
        Frame::Menu(_) => true,
    }));
}

#[tokio::test]
async fn test_cancel_during_computer_delay_returns_to_menu() {
    let events = vec![InputEvent::MoveUp, InputEvent::Confirm, InputEvent::Cancel];
    let mut controller = controller(events, Duration::from_secs(30));

    controller.step().await.unwrap();
    controller.step().await.unwrap();
    assert_eq!(
        controller.phase(),
        Phase::InProgress(GameMode::ComputerVsComputer)
    );

    controller.step().await.unwrap();
    assert_eq!(controller.phase(), Phase::Menu);
    assert_eq!(
        controller.menu().selected_mode(),
        GameMode::ComputerVsComputer
    );
}

#[tokio::test]
async fn test_input_failure_is_fatal_and_keeps_game() {
    let mut controller = controller(vec![InputEvent::Confirm], Duration::ZERO);
    controller.step().await.unwrap();

    let err = controller.step().await.unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::InputSourceFailure(_)));
    assert_eq!(
        controller.phase(),
        Phase::InProgress(GameMode::PlayerVsPlayer)
    );
}

#[tokio::test]
async fn test_finished_game_ignores_moves() {
    let mut events = column_two_win();
    events.extend([InputEvent::MoveLeft, InputEvent::MoveDown, InputEvent::Cancel]);
    let mut controller = controller(events, Duration::ZERO);

    step_until_over(&mut controller, 10).await;
    let finished = *controller.session().unwrap().board();

    controller.step().await.unwrap();
    controller.step().await.unwrap();
    assert!(matches!(controller.phase(), Phase::Terminal(..)));
    assert_eq!(*controller.session().unwrap().board(), finished);

    controller.step().await.unwrap();
    assert_eq!(controller.phase(), Phase::Menu);
}

#[tokio::test]
async fn test_computer_win_message_in_player_vs_computer() {
    let human = ScriptedPlayer::new("Human", true, [at(0, 1), at(1, 1), at(0, 2)]);
    let computer = ScriptedPlayer::new("Simple AI", false, [at(0, 0), at(1, 0), at(2, 0)]);
    let mut session = GameSession::with_players(
        GameMode::PlayerVsComputer,
        Box::new(human),
        Box::new(computer),
    );
    let mut input = ScriptedInput::default();
    let mut screen = RecordingScreen::default();

    let mut status = GameStatus::InProgress;
    for _ in 0..6 {
        status = session.play_turn(&mut input, &mut screen).await.unwrap();
    }
    assert_eq!(status, GameStatus::Won(Mark::O));
    assert_eq!(
        session.outcome_message().as_deref(),
        Some("Computer wins! Press Enter to continue.")
    );

    // A finished board never shows the cursor.
    session.render(&mut screen).unwrap();
    assert_eq!(
        screen.last(),
        Some(&Frame::Game {
            board: *session.board(),
            cursor: None,
            message: "Computer wins! Press Enter to continue.".to_string(),
        })
    );
}

#[tokio::test]
async fn test_invalid_move_keeps_turn() {
    let x = ScriptedPlayer::new("Human", true, [at(1, 1), at(0, 0)]);
    let o = ScriptedPlayer::new("Human", true, [at(1, 1), at(2, 2)]);
    let mut session =
        GameSession::with_players(GameMode::PlayerVsPlayer, Box::new(x), Box::new(o));
    let mut input = ScriptedInput::default();
    let mut screen = RecordingScreen::default();

    session.play_turn(&mut input, &mut screen).await.unwrap();
    assert_eq!(*session.current(), Mark::O);

    // O picks the taken center: nothing changes, O still to move.
    let before = *session.board();
    let status = session.play_turn(&mut input, &mut screen).await.unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(*session.board(), before);
    assert_eq!(*session.current(), Mark::O);

    session.play_turn(&mut input, &mut screen).await.unwrap();
    assert_eq!(*session.current(), Mark::X);
}

#[test]
fn test_rejected_move_reports_invalid_move() {
    let mut session = GameSession::new(GameMode::PlayerVsPlayer, Duration::ZERO);
    session.apply_move(Position::Center).unwrap();

    let err = session.apply_move(Position::Center).unwrap_err();
    assert_eq!(
        *err.kind(),
        GameErrorKind::InvalidMove(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(*session.current(), Mark::O);
    assert_eq!(*session.status(), GameStatus::InProgress);
}

#[tokio::test]
async fn test_last_square_completing_a_line_is_a_win() {
    let mut events = vec![InputEvent::Confirm];
    events.extend(walk_all(&[
        at(0, 0),
        at(1, 0),
        at(2, 0),
        at(0, 1),
        at(1, 2),
        at(2, 1),
        at(1, 1),
        at(0, 2),
        at(2, 2),
    ]));
    let mut controller = controller(events, Duration::ZERO);

    step_until_over(&mut controller, 12).await;
    assert_eq!(
        controller.phase(),
        Phase::Terminal(GameMode::PlayerVsPlayer, GameStatus::Won(Mark::X))
    );
    let board = *controller.session().unwrap().board();
    assert!(board.empty_cells().is_empty());
    assert!(!board.check_draw());
    assert_eq!(
        controller.screen().last_message(),
        Some("Player X wins! Press Enter to continue.")
    );
}

#[test]
fn test_cursor_hidden_on_computer_turn() {
    let mut session = GameSession::new(GameMode::PlayerVsComputer, Duration::ZERO);
    let mut screen = RecordingScreen::default();

    session.render(&mut screen).unwrap();
    session.apply_move(Position::TopLeft).unwrap();
    session.render(&mut screen).unwrap();

    match screen.frames.as_slice() {
        [
            Frame::Game {
                cursor: Some(Position::TopLeft),
                message: first,
                ..
            },
            Frame::Game {
                cursor: None,
                message: second,
                ..
            },
        ] => {
            assert_eq!(first, "Human's turn");
            assert_eq!(second, "Simple AI's turn");
        }
        other => panic!("unexpected frames {other:?}"),
    }
}

#[test]
fn test_mode_player_bindings() {
    let delay = Duration::from_millis(500);
    let (x, o) = GameMode::PlayerVsPlayer.players(delay);
    assert!(x.is_human() && o.is_human());
    let (x, o) = GameMode::PlayerVsComputer.players(delay);
    assert!(x.is_human());
    assert_eq!(o.name(), "Simple AI");
    let (x, o) = GameMode::ComputerVsComputer.players(delay);
    assert_eq!(x.name(), "Simple AI");
    assert_eq!(o.name(), "Minimax AI");
}
