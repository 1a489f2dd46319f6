//! Noughts - unified CLI
//!
//! Interactive terminal game plus self-play and suggestion commands.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::AppConfig;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, config } => run_play(mode.map(Into::into), &config),
        Command::SelfPlay { opening, json } => {
            init_stderr_logging("warn");
            print!("{}", noughts::run_self_play(opening.as_deref(), json)?);
            Ok(())
        }
        Command::Suggest {
            board,
            player,
            json,
        } => {
            init_stderr_logging("warn");
            print!("{}", noughts::run_suggest(&board, player.map(Into::into), json)?);
            Ok(())
        }
    }
}

/// Runs the terminal game, logging to the configured file.
fn run_play(mode: Option<noughts_core::Mode>, config_path: &Path) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }

    // The terminal belongs to the game, so logs go to a file.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
        .try_init();

    info!(mode = ?config.mode(), "Starting noughts");
    noughts::tui::run(*config.mode())
}

/// Loads the config, falling back to defaults when the file is missing.
#[instrument(skip_all, fields(path = %path.display()))]
fn load_config(path: &Path) -> Result<AppConfig> {
    let config = AppConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok(config)
}

fn init_stderr_logging(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
