//! Round controller: turn sequencing, outcome evaluation and the automated
//! opponent's reply.
//!
//! The controller owns the authoritative board. External wiring calls
//! [`Controller::submit_move`], [`Controller::restart`] and
//! [`Controller::set_mode`]; collaborators learn about changes through
//! subscribed [`GameObserver`]s.

use super::action::{Move, MoveError};
use super::events::{GameEvent, GameObserver};
use super::invariants::{BoardInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::search;
use super::types::{Board, GameStatus, Mode, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The player to move may place a mark.
    AwaitingMove,
    /// Won or drawn; only restart or a mode switch continues.
    RoundOver,
}

/// A validated mark, not yet committed.
#[derive(Debug)]
struct Placement {
    board: Board,
    position: Position,
}

/// Owns one game session: board, turn, mode and round history.
pub struct Controller {
    board: Board,
    turn: Player,
    mode: Mode,
    phase: Phase,
    status: GameStatus,
    history: Vec<Move>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Controller {
    /// Player who opens every round.
    pub const FIRST_PLAYER: Player = Player::X;

    /// Side the automated opponent plays in [`Mode::HumanVsAutomated`].
    pub const AUTOMATED_PLAYER: Player = Player::O;

    /// Creates a controller with an empty board, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!("Creating controller");
        Self {
            board: Board::new(),
            turn: Self::FIRST_PLAYER,
            mode,
            phase: Phase::AwaitingMove,
            status: GameStatus::InProgress,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Registers a collaborator for future events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// In [`Mode::HumanVsAutomated`], when the round continues and O is to
    /// move, the automated opponent answers before this returns. The
    /// returned status reflects both moves.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after the round ended,
    /// [`MoveError::OutOfRange`] or [`MoveError::SquareOccupied`] for a bad
    /// square. Both placements are checked before either is committed, so
    /// nothing changes and no event is sent on error.
    #[instrument(skip(self), fields(mode = ?self.mode, turn = %self.turn))]
    pub fn submit_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.phase == Phase::RoundOver {
            warn!(index, "Move rejected: round is over");
            return Err(MoveError::GameOver);
        }

        let player = self.turn;
        let human = Self::checked_place(&self.board, index, player)
            .inspect_err(|e| warn!(index, error = %e, "Move rejected"))?;
        let reply = self
            .automated_reply(&human.board, player)
            .inspect_err(|e| warn!(error = %e, "Automated reply rejected"))?;

        self.commit(human, player, false);
        if let Some(reply) = reply {
            self.commit(reply, Self::AUTOMATED_PLAYER, true);
        }

        Ok(self.status)
    }

    /// Starts a fresh round: empty board, X to move, mode unchanged.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting round");
        self.board.reset();
        self.turn = Self::FIRST_PLAYER;
        self.phase = Phase::AwaitingMove;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.emit(GameEvent::BoardCleared);
    }

    /// Switches mode; always starts a fresh round.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(from = ?self.mode, to = ?mode, "Switching mode");
        self.mode = mode;
        self.emit(GameEvent::ModeChanged(mode));
        self.restart();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the round is over).
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the round phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the status computed after the last move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status line shown to the players.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.turn),
            GameStatus::Won { player, .. } => format!("Player {} wins!", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Computes the automated opponent's answer to `mover`'s placement.
    fn automated_reply(
        &self,
        after: &Board,
        mover: Player,
    ) -> Result<Option<Placement>, MoveError> {
        if self.mode != Mode::HumanVsAutomated
            || mover.opponent() != Self::AUTOMATED_PLAYER
            || rules::evaluate(after).is_over()
        {
            return Ok(None);
        }

        let Some(position) = search::best_move(after, Self::AUTOMATED_PLAYER) else {
            debug!("No move available for automated opponent");
            return Ok(None);
        };
        info!(%position, "Automated opponent moves");
        Self::checked_place(after, position.to_index(), Self::AUTOMATED_PLAYER).map(Some)
    }

    /// Applies one mark to a copy of `board` and checks the result.
    fn checked_place(board: &Board, index: usize, player: Player) -> Result<Placement, MoveError> {
        let mut next = *board;
        let position = next.apply_move(index, player)?;

        if cfg!(debug_assertions) {
            BoardInvariants::check_all(&next).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
            })?;
        }

        Ok(Placement {
            board: next,
            position,
        })
    }

    /// Records a checked placement and settles the outcome.
    fn commit(&mut self, placement: Placement, player: Player, automated: bool) {
        let Placement { board, position } = placement;
        self.board = board;
        self.history.push(Move::new(player, position));
        debug!(%position, %player, automated, "Mark placed");
        self.emit(GameEvent::MarkPlaced {
            position,
            player,
            automated,
        });

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::Won { player, line } => {
                self.phase = Phase::RoundOver;
                info!(winner = %player, %line, "Round won");
                self.emit(GameEvent::RoundWon {
                    player,
                    line,
                    automated,
                });
            }
            GameStatus::Draw => {
                self.phase = Phase::RoundOver;
                info!("Round drawn");
                self.emit(GameEvent::RoundDrawn);
            }
            GameStatus::InProgress => {
                self.turn = player.opponent();
            }
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("board", &self.board.compact())
            .field("turn", &self.turn)
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("status", &self.status)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
