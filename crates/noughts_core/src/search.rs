//! Exhaustive minimax search for the automated opponent.
//!
//! The 3x3 tree is small enough (at most 9! leaves, far fewer once
//! finished games are cut off) that the search visits every line of play
//! without pruning, depth limits or a transposition table.

use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position for the searching player under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Forecast {
    /// The opponent can force a win.
    Loss,
    /// Best play on both sides draws.
    Draw,
    /// The searching player can force a win.
    Win,
}

impl Forecast {
    fn from_score(score: i8) -> Self {
        match score {
            s if s > 0 => Forecast::Win,
            0 => Forecast::Draw,
            _ => Forecast::Loss,
        }
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Forecast::Loss => write!(f, "loss"),
            Forecast::Draw => write!(f, "draw"),
            Forecast::Win => write!(f, "win"),
        }
    }
}

/// Result of a full search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The chosen move.
    pub position: Position,
    /// Outcome the chosen move guarantees.
    pub forecast: Forecast,
    /// Game-tree nodes evaluated.
    pub nodes: u64,
}

/// Chooses an optimal move for `player`.
///
/// Returns `None` when the game is already decided or no square is free.
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    analyze(board, player).map(|analysis| analysis.position)
}

/// Searches every continuation and reports the move `player` should make.
///
/// Empty squares are tried in ascending order and only a strictly better
/// score replaces the current choice, so ties go to the lowest index. Wins
/// are not preferred for being faster.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn analyze(board: &Board, player: Player) -> Option<Analysis> {
    if rules::evaluate(board).is_over() {
        return None;
    }

    let mut scratch = *board;
    let mut nodes = 0u64;
    let mut best: Option<(Position, i8)> = None;

    for pos in board.empty_positions() {
        scratch.set(pos, Square::Occupied(player));
        let score = minimax(&mut scratch, player, player.opponent(), &mut nodes);
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (position, score) = best?;
    let analysis = Analysis {
        position,
        forecast: Forecast::from_score(score),
        nodes,
    };
    debug!(
        position = %analysis.position,
        forecast = %analysis.forecast,
        nodes = analysis.nodes,
        "Search complete"
    );
    Some(analysis)
}

/// Scores `board` from `me`'s point of view with `to_move` about to play.
///
/// Every tentative mark is reverted before returning.
fn minimax(board: &mut Board, me: Player, to_move: Player, nodes: &mut u64) -> i8 {
    *nodes += 1;

    match rules::evaluate(board) {
        GameStatus::Won { player, .. } if player == me => return 1,
        GameStatus::Won { .. } => return -1,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, me, to_move.opponent(), nodes);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        // O to move; O completes the middle row at 5.
        let board: Board = "XX. OO. X..".parse().unwrap();
        let analysis = analyze(&board, Player::O).unwrap();
        assert_eq!(analysis.position, Position::MiddleRight);
        assert_eq!(analysis.forecast, Forecast::Win);
    }

    #[test]
    fn test_no_move_on_finished_board() {
        let won: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(best_move(&won, Player::O), None);

        let drawn: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(best_move(&drawn, Player::X), None);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board: Board = "X.. .O. ..X".parse().unwrap();
        let before = board;
        let _ = analyze(&board, Player::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_is_a_draw_and_opens_top_left() {
        let analysis = analyze(&Board::new(), Player::X).unwrap();
        assert_eq!(analysis.forecast, Forecast::Draw);
        // Every opening draws, so the lowest index wins the tie.
        assert_eq!(analysis.position, Position::TopLeft);
        assert!(analysis.nodes > 100_000);
    }

    #[test]
    fn test_forecast_ordering_and_from_score() {
        assert!(Forecast::Win > Forecast::Draw);
        assert!(Forecast::Draw > Forecast::Loss);
        assert_eq!(Forecast::from_score(1), Forecast::Win);
        assert_eq!(Forecast::from_score(0), Forecast::Draw);
        assert_eq!(Forecast::from_score(-1), Forecast::Loss);
    }
}
