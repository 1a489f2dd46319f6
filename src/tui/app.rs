//! Application state for the terminal game.

use super::input::{self, Action};
use crossterm::event::KeyCode;
use noughts_core::{Controller, Cue, GameEvent, Mode, Position, WinLine};
use std::sync::mpsc;
use tracing::{debug, info};

/// Terminal game state: the controller plus what the screen needs.
pub struct App {
    controller: Controller,
    events: mpsc::Receiver<GameEvent>,
    cursor: Position,
    highlight: Option<WinLine>,
    last_cue: Option<Cue>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh round in `mode`.
    pub fn new(mode: Mode) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut controller = Controller::new(mode);
        controller.subscribe(tx);
        Self {
            controller,
            events: rx,
            cursor: Position::Center,
            highlight: None,
            last_cue: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Winning line to highlight, if the round was won.
    pub fn highlight(&self) -> Option<WinLine> {
        self.highlight
    }

    /// Cue of the most recent event that had one.
    pub fn last_cue(&self) -> Option<Cue> {
        self.last_cue
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line: the controller's message, or why the last move failed.
    pub fn status_message(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{} ({})", self.controller.status_message(), notice),
            None => self.controller.status_message(),
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Place(index) => self.submit(index),
            Action::PlaceAtCursor => self.submit(self.cursor.to_index()),
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::Restart => {
                self.notice = None;
                self.controller.restart();
            }
            Action::ToggleMode => {
                self.notice = None;
                let mode = self.controller.mode().toggle();
                self.controller.set_mode(mode);
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }

        self.drain_events();
    }

    fn submit(&mut self, index: usize) {
        self.notice = match self.controller.submit_move(index) {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
    }

    /// Applies queued controller events to the view state.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::RoundWon { line, .. } => self.highlight = Some(line),
                GameEvent::BoardCleared => self.highlight = None,
                _ => {}
            }
            if let Some(cue) = event.cue() {
                self.last_cue = Some(cue);
            }
        }
    }
}
