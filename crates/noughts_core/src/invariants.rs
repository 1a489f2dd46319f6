//! First-class board invariants.
//!
//! Invariants are logical properties that must hold for every board the
//! controller produces. The controller checks them after each placement in
//! debug builds; they are testable on their own.

use super::rules::completed_lines;
use super::types::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X moves first and players alternate, so X has as many marks
/// as O or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: lines of both marks never coexist, since play stops at the
/// first completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        completed_lines(board, Player::X).is_empty() || completed_lines(board, Player::O).is_empty()
    }

    fn description() -> &'static str {
        "At most one player has a completed line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_balanced_marks() {
        let ok: Board = "XO. X.. ...".parse().unwrap();
        assert!(BalancedMarksInvariant::holds(&ok));

        let o_first: Board = "O.. ... ...".parse().unwrap();
        assert!(!BalancedMarksInvariant::holds(&o_first));

        let x_twice: Board = "XX. ... ...".parse().unwrap();
        assert!(!BalancedMarksInvariant::holds(&x_twice));
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        // Both players have a line and X has two extra marks.
        let board: Board = "XXX OOO XX.".parse().unwrap();
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[1].description, SingleWinnerInvariant::description());
    }
}
