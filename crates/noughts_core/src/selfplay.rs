//! Optimal play against itself.

use super::action::{Move, MoveError};
use super::rules;
use super::search;
use super::types::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A finished game where both sides followed [`search::best_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlay {
    /// Moves in the order played.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// Final status (never `InProgress`).
    pub status: GameStatus,
}

/// Plays `start` to the end with both sides searching.
///
/// The side to move is inferred from the mark counts, so `start` must be a
/// board reachable by alternating play.
#[instrument(skip(start), fields(start = %start.compact()))]
pub fn self_play(start: Board) -> Result<SelfPlay, MoveError> {
    let mut board = start;
    let mut moves = Vec::new();

    loop {
        let status = rules::evaluate(&board);
        if status.is_over() {
            info!(%status, moves = moves.len(), "Self-play finished");
            return Ok(SelfPlay {
                moves,
                board,
                status,
            });
        }

        let player = board.next_player();
        let Some(position) = search::best_move(&board, player) else {
            return Err(MoveError::GameOver);
        };
        board.apply_move(position.to_index(), player)?;
        moves.push(Move::new(player, position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_self_play_from_empty_draws() {
        let game = self_play(Board::new()).unwrap();
        assert_eq!(game.status, GameStatus::Draw);
        assert_eq!(game.moves.len(), 9);
        assert_eq!(game.moves[0], Move::new(Player::X, Position::TopLeft));
    }

    #[test]
    fn test_self_play_from_finished_board_is_empty() {
        let start: Board = "XXX OO. ...".parse().unwrap();
        let game = self_play(start).unwrap();
        assert!(game.moves.is_empty());
        assert_eq!(game.status.winner(), Some(Player::X));
    }
}
