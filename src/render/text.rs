//! Structured plain-text output.
//!
//! No escape codes; suited to logs, pipes and tools that read the position
//! line by line.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use crate::game::{home_base_of, Coord, GameState, PlayerId, COLS, ROWS};

/// Render game state as structured text.
///
/// Output format:
/// ```text
/// === MOVE 3 ===
///
/// BOARD (7x9):
/// T.E...r.l
/// .C.~~~.d.
/// ...
///
/// PLAYER 1 STATUS:
/// - Home base at (4, 1)
/// - Pieces: 8
/// - Elephant (rank 8) at (1, 3)
/// ...
///
/// GAME STATUS:
/// - To move: Player 2
/// ```
#[must_use]
pub fn render_text(state: &GameState) -> String {
    let mut output = String::new();

    output.push_str(&format!("=== MOVE {} ===\n\n", state.moves_played()));
    render_board(&mut output, state);
    for player in PlayerId::BOTH {
        render_player_status(&mut output, state, player);
    }
    render_history(&mut output, state);
    render_game_status(&mut output, state);

    output
}

/// Render the grid, one line per row. Pieces are upper case for Player 1 and
/// lower case for Player 2.
fn render_board(output: &mut String, state: &GameState) {
    output.push_str(&format!("BOARD ({ROWS}x{COLS}):\n"));
    for row in 0..ROWS {
        for col in 0..COLS {
            let view = state.query_cell(Coord::new(row, col));
            let ch = match (view.piece, view.owner) {
                (Some(kind), Some(PlayerId::Two)) => kind.glyph().to_ascii_lowercase(),
                (Some(kind), _) => kind.glyph(),
                (None, _) => view.terrain.symbol(),
            };
            output.push(ch);
        }
        output.push('\n');
    }
    output.push('\n');
}

/// Render a single player's status.
fn render_player_status(output: &mut String, state: &GameState, player: PlayerId) {
    output.push_str(&format!("PLAYER {} STATUS:\n", player.number()));
    output.push_str(&format!("- Home base at {}\n", home_base_of(player)));

    let mut pieces: Vec<_> = state.board().pieces_of(player).collect();
    pieces.sort_by(|a, b| b.kind.cmp(&a.kind));
    output.push_str(&format!("- Pieces: {}\n", pieces.len()));
    for piece in pieces {
        output.push_str(&format!(
            "- {} (rank {}) at {}{}\n",
            piece.kind,
            piece.rank(),
            piece.coord,
            if piece.weakened { " [weakened]" } else { "" }
        ));
    }

    let lost: Vec<String> = state
        .board()
        .pieces()
        .iter()
        .filter(|p| p.owner == player && p.captured)
        .map(|p| p.kind.to_string())
        .collect();
    if !lost.is_empty() {
        output.push_str(&format!("- Captured: {}\n", lost.join(", ")));
    }
    output.push('\n');
}

/// Most recent moves listed by `render_text`.
const RECENT_MOVES: usize = 5;

/// Render the last few accepted moves, numbered from the start of the game.
fn render_history(output: &mut String, state: &GameState) {
    let history = state.history();
    if history.is_empty() {
        return;
    }
    output.push_str("RECENT MOVES:\n");
    let skip = history.len().saturating_sub(RECENT_MOVES);
    for (i, line) in history.iter().enumerate().skip(skip) {
        output.push_str(&format!("{}. {line}\n", i + 1));
    }
    output.push('\n');
}

/// Render overall game status.
fn render_game_status(output: &mut String, state: &GameState) {
    output.push_str("GAME STATUS:\n");
    match state.winner() {
        Some(winner) => {
            output.push_str("- GAME OVER\n");
            output.push_str(&format!("- Winner: {winner}\n"));
        }
        None => output.push_str(&format!("- To move: {}\n", state.current_turn())),
    }
    if !state.last_message().is_empty() {
        output.push_str(&format!("- Last move: {}\n", state.last_message()));
    }
}
