//! Notifications the controller sends to its collaborators.
//!
//! Rendering, sound and mode display live outside the core. They subscribe
//! a [`GameObserver`] and react to [`GameEvent`]s; the controller never
//! waits on them.

use super::rules::WinLine;
use super::types::{Mode, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use tracing::trace;

/// Something observable happened to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MarkPlaced {
        /// Where the mark went.
        position: Position,
        /// Whose mark it is.
        player: Player,
        /// Placed by the automated opponent rather than a human.
        automated: bool,
    },
    /// The round ended with a completed line.
    RoundWon {
        /// The winning player.
        player: Player,
        /// Squares to highlight.
        line: WinLine,
        /// The automated opponent won.
        automated: bool,
    },
    /// The round ended with a full board.
    RoundDrawn,
    /// The board was cleared for a new round.
    BoardCleared,
    /// The mode changed (a cleared board follows).
    ModeChanged(Mode),
}

/// Presentation cue for the sound/celebration collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// A mark was placed or the board was cleared.
    Click,
    /// A human won.
    Win,
    /// The automated opponent won.
    AutomatedWin,
    /// The round was drawn.
    Draw,
}

impl GameEvent {
    /// Cue for this event, if it has one.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::MarkPlaced { .. } | GameEvent::BoardCleared => Some(Cue::Click),
            GameEvent::RoundWon {
                automated: true, ..
            } => Some(Cue::AutomatedWin),
            GameEvent::RoundWon { .. } => Some(Cue::Win),
            GameEvent::RoundDrawn => Some(Cue::Draw),
            GameEvent::ModeChanged(_) => None,
        }
    }
}

/// Receives controller events.
pub trait GameObserver {
    /// Called synchronously after each state change.
    fn notify(&mut self, event: &GameEvent);
}

impl GameObserver for mpsc::Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        // A dropped receiver just means nobody is listening any more.
        if self.send(*event).is_err() {
            trace!(?event, "Observer channel closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WIN_LINES;

    #[test]
    fn test_cues() {
        let placed = GameEvent::MarkPlaced {
            position: Position::Center,
            player: Player::X,
            automated: false,
        };
        assert_eq!(placed.cue(), Some(Cue::Click));
        assert_eq!(GameEvent::BoardCleared.cue(), Some(Cue::Click));
        assert_eq!(GameEvent::RoundDrawn.cue(), Some(Cue::Draw));
        assert_eq!(GameEvent::ModeChanged(Mode::HumanVsHuman).cue(), None);

        let human_win = GameEvent::RoundWon {
            player: Player::X,
            line: WIN_LINES[0],
            automated: false,
        };
        let machine_win = GameEvent::RoundWon {
            player: Player::O,
            line: WIN_LINES[0],
            automated: true,
        };
        assert_eq!(human_win.cue(), Some(Cue::Win));
        assert_eq!(machine_win.cue(), Some(Cue::AutomatedWin));
    }

    #[test]
    fn test_sender_observer_forwards_events() {
        let (mut tx, rx) = mpsc::channel::<GameEvent>();
        tx.notify(&GameEvent::RoundDrawn);
        assert_eq!(rx.try_recv(), Ok(GameEvent::RoundDrawn));
        drop(rx);
        // Closed channel is ignored.
        tx.notify(&GameEvent::BoardCleared);
    }
}
