//! Noughts - tic-tac-toe in the terminal.
//!
//! The game rules, minimax opponent and round controller live in
//! [`noughts_core`]. This crate adds the application shell around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults ([`AppConfig`])
//! - **Commands**: self-play and move suggestions rendered as text or JSON
//! - **TUI**: the interactive terminal game
//!
//! # Example
//!
//! ```no_run
//! use noughts::{AppConfig, run_suggest};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load_or_default("noughts.toml")?;
//! println!("starting in {:?}", config.mode());
//!
//! print!("{}", run_suggest("XX. OO. ...", None, false)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commands;
mod config;

pub mod tui;

pub use commands::{run_self_play, run_suggest};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
