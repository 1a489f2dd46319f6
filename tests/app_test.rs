//! Tests for the terminal app state driven by key presses.

use crossterm::event::KeyCode;
use noughts::tui::App;
use noughts_core::{Cue, Mode, Player, Position, Square, WIN_LINES};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_digit_places_mark() {
    let mut app = App::new(Mode::HumanVsHuman);
    press(&mut app, "5");

    let board = app.controller().board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(app.controller().turn(), Player::O);
    assert_eq!(app.last_cue(), Some(Cue::Click));
    assert_eq!(app.status_message(), "Player O's turn");
}

#[test]
fn test_occupied_square_reports_notice() {
    let mut app = App::new(Mode::HumanVsHuman);
    press(&mut app, "55");

    assert_eq!(app.controller().history().len(), 1);
    assert!(app.status_message().contains("already occupied"));

    // The next good move clears the notice.
    press(&mut app, "1");
    assert_eq!(app.status_message(), "Player X's turn");
}

#[test]
fn test_win_highlights_line_until_restart() {
    let mut app = App::new(Mode::HumanVsHuman);
    press(&mut app, "14253");

    assert_eq!(app.highlight(), Some(WIN_LINES[0]));
    assert_eq!(app.last_cue(), Some(Cue::Win));
    assert_eq!(app.status_message(), "Player X wins!");

    press(&mut app, "6");
    assert!(app.status_message().contains("Game is already over"));

    press(&mut app, "r");
    assert_eq!(app.highlight(), None);
    assert!(app.controller().board().empty_positions().count() == 9);
    assert_eq!(app.controller().turn(), Player::X);
}

#[test]
fn test_mode_toggle_restarts_against_computer() {
    let mut app = App::new(Mode::HumanVsHuman);
    press(&mut app, "1");
    press(&mut app, "m");

    assert_eq!(app.controller().mode(), Mode::HumanVsAutomated);
    assert!(app.controller().history().is_empty());

    press(&mut app, "5");
    assert_eq!(app.controller().history().len(), 2);
    assert_eq!(app.controller().history()[1].player, Player::O);
    assert_eq!(app.controller().turn(), Player::X);
}

#[test]
fn test_cursor_and_enter() {
    let mut app = App::new(Mode::HumanVsHuman);
    assert_eq!(app.cursor(), Position::Center);

    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.cursor(), Position::TopRight);

    app.handle_key(KeyCode::Enter);
    assert_eq!(
        app.controller().board().get(Position::TopRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(Mode::HumanVsHuman);
    press(&mut app, "x");
    assert!(!app.should_quit());

    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit());
}
