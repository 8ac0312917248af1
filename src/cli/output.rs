//! Output formatting utilities for CLI.

use jungle::game::{CellView, Coord, GameState};
use jungle::script::{ScriptReport, ScriptStep};
use jungle::PlayerId;
use serde::Serialize;

/// JSON-serializable script result.
#[derive(Debug, Serialize)]
pub(super) struct JsonScriptResult<'a> {
    /// Winner player number (null if the game is still running).
    pub(super) winner: Option<PlayerId>,
    /// Player on move at the end.
    pub(super) final_turn: PlayerId,
    /// Accepted moves.
    pub(super) moves_applied: u32,
    /// Every scripted move.
    pub(super) steps: &'a [ScriptStep],
    /// Final position.
    pub(super) board: JsonBoard,
}

impl<'a> JsonScriptResult<'a> {
    /// Create from a `ScriptReport`.
    pub(super) fn from_report(report: &'a ScriptReport) -> Self {
        Self {
            winner: report.winner,
            final_turn: report.final_turn,
            moves_applied: report.moves_applied,
            steps: &report.steps,
            board: JsonBoard::from_state(&report.state),
        }
    }
}

/// JSON-serializable board: every cell, row by row.
#[derive(Debug, Serialize)]
pub(super) struct JsonBoard {
    /// Player on move.
    pub(super) turn: PlayerId,
    /// Winner, if any.
    pub(super) winner: Option<PlayerId>,
    /// Cells in row-major order.
    pub(super) cells: Vec<CellView>,
}

impl JsonBoard {
    /// Snapshot a game state.
    pub(super) fn from_state(state: &GameState) -> Self {
        Self {
            turn: state.current_turn(),
            winner: state.winner(),
            cells: Coord::all().map(|c| state.query_cell(c)).collect(),
        }
    }
}

/// Format one scripted move as a text line.
pub(super) fn format_step(step: &ScriptStep) -> String {
    let mark = if step.is_accepted() { "ok " } else { "ERR" };
    format!(
        "{:>3}. {mark} {} -> {}  {}",
        step.index + 1,
        step.from,
        step.to,
        step.message()
    )
}

/// Format a script result as human-readable text.
pub(super) fn format_text(report: &ScriptReport) -> String {
    let mut output = String::new();

    output.push_str("Script Result\n");
    match report.winner {
        Some(winner) => output.push_str(&format!("  Winner: {winner}\n")),
        None => output.push_str(&format!("  Winner: none yet ({} to move)\n", report.final_turn)),
    }
    let rejected = report.steps.len() - report.steps.iter().filter(|s| s.is_accepted()).count();
    output.push_str(&format!(
        "  Moves: {} applied, {rejected} rejected\n",
        report.moves_applied
    ));

    output
}
