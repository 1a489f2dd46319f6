//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions of this line, ascending.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line, ascending.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new(Position::TopLeft, Position::TopCenter, Position::TopRight),
    WinLine::new(Position::MiddleLeft, Position::Center, Position::MiddleRight),
    WinLine::new(Position::BottomLeft, Position::BottomCenter, Position::BottomRight),
    // Columns
    WinLine::new(Position::TopLeft, Position::MiddleLeft, Position::BottomLeft),
    WinLine::new(Position::TopCenter, Position::Center, Position::BottomCenter),
    WinLine::new(Position::TopRight, Position::MiddleRight, Position::BottomRight),
    // Diagonals
    WinLine::new(Position::TopLeft, Position::Center, Position::BottomRight),
    WinLine::new(Position::TopRight, Position::Center, Position::BottomLeft),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line in [`WIN_LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Every line completed by `player`, in [`WIN_LINES`] order.
pub fn completed_lines(board: &Board, player: Player) -> Vec<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .filter(|line| {
            line.positions()
                .iter()
                .all(|pos| board.get(*pos) == Square::Occupied(player))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Player::X, WIN_LINES[0])));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X .OX ..O".parse().unwrap();
        let (player, line) = check_winner(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [0, 4, 8]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "O.. .X. ..X".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_cover_rows_columns_diagonals() {
        let indices: Vec<[usize; 3]> = WIN_LINES.iter().map(WinLine::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
        assert_eq!(WIN_LINES[7].to_string(), "[2, 4, 6]");
    }

    #[test]
    fn test_completed_lines_lists_all() {
        let board: Board = "XXX X.. X..".parse().unwrap();
        assert_eq!(completed_lines(&board, Player::X), vec![WIN_LINES[0], WIN_LINES[3]]);
        assert!(completed_lines(&board, Player::O).is_empty());
    }
}
