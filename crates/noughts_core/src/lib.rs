//! Noughts core - pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Outcome evaluation**: [`rules::evaluate`] over the eight [`WinLine`]s
//! - **Move search**: exhaustive minimax in [`search`]
//! - **Controller**: [`Controller`] sequences turns, evaluates every move and
//!   lets the automated opponent answer in [`Mode::HumanVsAutomated`]
//!
//! # Example
//!
//! ```
//! use noughts_core::{Controller, GameStatus, Mode, Player};
//!
//! let mut controller = Controller::new(Mode::HumanVsAutomated);
//! let status = controller.submit_move(4).expect("center is free");
//!
//! // The automated opponent has already answered.
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(controller.history().len(), 2);
//! assert_eq!(controller.turn(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod events;
mod position;
mod selfplay;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError};
pub use controller::{Controller, Phase};
pub use events::{Cue, GameEvent, GameObserver};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, evaluate};
pub use search::{Analysis, Forecast, analyze, best_move};
pub use selfplay::{SelfPlay, self_play};
pub use types::{Board, BoardParseError, GameStatus, Mode, Player, Square};
