//! Tests for the console front-end and command parsing.

use std::io::Cursor;
use ttt_core::{Mark, Move};
use ttt_minimax::{Command, CommandError, ConsoleSession, GameController};

fn play(script: &str) -> (String, GameController) {
    let mut session = ConsoleSession::new(
        GameController::default(),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    session.run().expect("session runs");
    let controller = session.controller().clone();
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (output, controller)
}

#[test]
fn test_parse_place() {
    assert_eq!(
        "1 2".parse::<Command>(),
        Ok(Command::Place(Move::new(1, 2).unwrap()))
    );
    assert_eq!(
        " 0,2 ".parse::<Command>(),
        Ok(Command::Place(Move::new(0, 2).unwrap()))
    );
}

#[test]
fn test_parse_keywords() {
    assert_eq!("g".parse::<Command>(), Ok(Command::ToggleMode));
    assert_eq!("RESET".parse::<Command>(), Ok(Command::Reset));
    assert_eq!("level 0".parse::<Command>(), Ok(Command::SetLevel(0)));
    assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
    assert!(matches!(
        "3 0".parse::<Command>(),
        Err(CommandError::InvalidArgument { .. })
    ));
    assert!(matches!(
        "level high".parse::<Command>(),
        Err(CommandError::InvalidArgument { .. })
    ));
    assert!(matches!(
        "jump".parse::<Command>(),
        Err(CommandError::Unknown(_))
    ));
}

#[test]
fn test_session_plays_engine_reply() {
    let (output, controller) = play("1 1\nq\n");
    assert!(output.contains("Player one (X) played Center (1, 1)"));
    assert!(output.contains("Player two (O) played Top-left (0, 0)"));
    assert!(output.trim_end().ends_with("Goodbye."));
    assert_eq!(controller.board().cell(Move::new(0, 0).unwrap()), Mark::PlayerTwo);
}

#[test]
fn test_session_survives_bad_input() {
    let (output, controller) = play("hello\n1 1\n1 1\n");
    assert!(output.contains("Unknown command 'hello'"));
    assert!(output.contains("Error: Square (1, 1) is already occupied"));
    assert_eq!(controller.board().mark_count(), 2);
}

#[test]
fn test_session_reports_mode_and_level() {
    let (output, controller) = play("g\nlevel 0\nr\n");
    assert!(output.contains("Mode: player vs player"));
    assert!(output.contains("Engine level: 0 (random)"));
    assert!(output.contains("Game restarted."));
    assert!(controller.board().is_empty_board());
}
