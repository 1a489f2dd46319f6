//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the controller, the search
//! and the invariants all judge positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner, completed_lines};

use super::types::{Board, GameStatus};

/// Evaluates the board: the first completed line in [`WIN_LINES`] order
/// wins, otherwise a full board is a draw, otherwise play continues.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = check_winner(board) {
        return GameStatus::Won { player, line };
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
