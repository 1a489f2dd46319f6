//! Terminal front-end: one local session, human against friend or computer.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::Mode;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Runs its closure when dropped. Restores the terminal on every exit path.
struct RestoreGuard<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Runs the interactive game until the user quits.
#[instrument]
pub fn run(mode: Mode) -> Result<()> {
    info!("Starting terminal game");

    enable_raw_mode()?;
    let _restore = RestoreGuard(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_loop(&mut terminal, App::new(mode));
    if let Err(err) = terminal.show_cursor() {
        warn!(error = %err, "Failed to show cursor");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fail_after_setup(restored: &Cell<u32>) -> Result<()> {
        let _restore = RestoreGuard(|| restored.set(restored.get() + 1));
        Err(anyhow::anyhow!("backend unavailable"))
    }

    #[test]
    fn test_restore_runs_on_early_error() {
        let restored = Cell::new(0);
        assert!(fail_after_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_once_on_success() {
        let restored = Cell::new(0);
        {
            let _restore = RestoreGuard(|| restored.set(restored.get() + 1));
        }
        assert_eq!(restored.get(), 1);
    }
}
