//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::{Mode, Player};

/// Noughts - tic-tac-toe against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Who plays O (overrides the config file)
        #[arg(short, long)]
        mode: Option<ModeArg>,

        /// Path to the config file
        #[arg(short, long, default_value = noughts::DEFAULT_CONFIG_PATH)]
        config: std::path::PathBuf,
    },

    /// Let the search play both sides from an empty board
    SelfPlay {
        /// Force X's first move: 0-8 or a label such as "center"
        #[arg(long)]
        opening: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest the best move for a board such as "XX. OO. ..."
    Suggest {
        /// Nine cells, row by row: X, O, or . for empty
        board: String,

        /// Side to move (inferred from the mark counts when omitted)
        #[arg(short, long)]
        player: Option<PlayerArg>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Opponent choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans at one keyboard
    Friend,
    /// Human X against the computer's O
    Computer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Friend => Mode::HumanVsHuman,
            ModeArg::Computer => Mode::HumanVsAutomated,
        }
    }
}

/// Player choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// Crosses
    X,
    /// Noughts
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}
