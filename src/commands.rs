//! Non-interactive commands: self-play and move suggestions.
//!
//! Each command renders its report to a `String` so the binary only has to
//! print it.

use anyhow::{Context, Result, anyhow};
use noughts_core::{
    Analysis, Board, GameStatus, Move, Player, Position, analyze, evaluate, self_play,
};
use serde::Serialize;
use tracing::{info, instrument};

/// Self-play result as printed with `--json`.
#[derive(Debug, Serialize)]
struct SelfPlayReport {
    moves: Vec<Move>,
    board: String,
    status: GameStatus,
}

/// Suggestion as printed with `--json`.
#[derive(Debug, Serialize)]
struct SuggestReport {
    board: String,
    player: Player,
    status: GameStatus,
    suggestion: Option<Analysis>,
}

/// Plays a full game with both sides searching and reports it.
///
/// `opening` forces X's first move, given as an index (`"4"`) or a label
/// (`"center"`, `"top left"`); the search plays everything after it.
#[instrument]
pub fn run_self_play(opening: Option<&str>, json: bool) -> Result<String> {
    let mut start = Board::new();
    let mut moves = Vec::new();
    if let Some(opening) = opening {
        let position = Position::from_label_or_number(opening)
            .ok_or_else(|| anyhow!("Unknown opening square {:?}", opening))?;
        start.apply_move(position.to_index(), Player::X)?;
        moves.push(Move::new(Player::X, position));
    }

    let game = self_play(start).context("Self-play failed")?;
    moves.extend(game.moves);
    info!(status = %game.status, moves = moves.len(), "Self-play complete");

    if json {
        let report = SelfPlayReport {
            moves,
            board: game.board.compact(),
            status: game.status,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    for (turn, mv) in moves.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} -> {} ({})\n",
            turn + 1,
            mv.player,
            mv.position.label(),
            mv.position.to_index()
        ));
    }
    out.push('\n');
    out.push_str(&game.board.display());
    out.push_str(&format!("\n\n{}\n", game.status));
    Ok(out)
}

/// Suggests the best move on `board` for `player`.
///
/// When `player` is `None` the side to move is inferred from the mark
/// counts.
#[instrument(skip(player))]
pub fn run_suggest(board: &str, player: Option<Player>, json: bool) -> Result<String> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let player = player.unwrap_or_else(|| board.next_player());
    let status = evaluate(&board);
    let suggestion = analyze(&board, player);

    if json {
        let report = SuggestReport {
            board: board.compact(),
            player,
            status,
            suggestion,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = format!("{}\n\n", board.display());
    match suggestion {
        Some(analysis) => {
            info!(position = %analysis.position, forecast = %analysis.forecast, "Suggestion ready");
            out.push_str(&format!(
                "{} should play {} ({}), forecast: {} ({} positions searched)\n",
                player,
                analysis.position.label(),
                analysis.position.to_index(),
                analysis.forecast,
                analysis.nodes
            ));
        }
        None => out.push_str(&format!("No move to suggest: {}\n", status)),
    }
    Ok(out)
}
