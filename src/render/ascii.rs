//! ASCII renderer for terminal viewing with ANSI colors.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use crate::game::{CellView, Coord, GameState, PlayerId, Terrain, COLS, ROWS};

/// ANSI color codes for players.
const PLAYER_COLORS: [&str; 2] = [
    "\x1b[31m", // Player 1: Red
    "\x1b[34m", // Player 2: Blue
];

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const GRAY: &str = "\x1b[90m";

/// Player display names.
const PLAYER_NAMES: [&str; 2] = ["Red", "Blue"];

/// Render game state to ASCII with ANSI colors.
///
/// Rows and columns are numbered from 1, matching move messages.
/// Output format:
/// ```text
/// Move 0                          Player 1 (Red) to move
///     1 2 3 4 5 6 7 8 9
///   ┌───────────────────┐
/// 1 │ T . E . . . R . L │
/// ...
/// └───────────────────┘
/// ```
#[must_use]
pub fn render_ascii(state: &GameState) -> String {
    let mut output = String::new();

    render_header(&mut output, state);
    render_grid(&mut output, state);

    output.push_str(
        "\nLegend: R=Rat C=Cat D=Dog W=Wolf P=Leopard T=Tiger L=Lion E=Elephant\n        \
         ~=Lake  #=Trap  H=Home base  dim=weakened\n\n",
    );

    render_player_stats(&mut output, state);
    output
}

/// Render the header line with the move count and who is on move.
fn render_header(output: &mut String, state: &GameState) {
    let moves = format!("Move {}", state.moves_played());
    output.push_str(&moves);
    for _ in 0..32usize.saturating_sub(moves.len()) {
        output.push(' ');
    }

    if let Some(winner) = state.winner() {
        let color = player_color(winner);
        output.push_str(&format!(
            "{BOLD}{color}{winner} ({}) wins!{RESET}\n",
            player_name(winner)
        ));
    } else {
        let turn = state.current_turn();
        let color = player_color(turn);
        output.push_str(&format!(
            "{color}{turn} ({}) to move{RESET}\n",
            player_name(turn)
        ));
    }
}

/// Render the board with row and column labels.
fn render_grid(output: &mut String, state: &GameState) {
    output.push_str("    ");
    for col in 1..=COLS {
        output.push_str(&format!("{col} "));
    }
    output.push('\n');

    let width = usize::from(COLS) * 2 + 1;
    output.push_str("  ┌");
    output.push_str(&"─".repeat(width));
    output.push_str("┐\n");

    for row in 0..ROWS {
        output.push_str(&format!("{} │ ", row + 1));
        for col in 0..COLS {
            render_cell(output, &state.query_cell(Coord::new(row, col)));
            output.push(' ');
        }
        output.push_str("│\n");
    }

    output.push_str("  └");
    output.push_str(&"─".repeat(width));
    output.push_str("┘\n");
}

/// Render a single cell.
fn render_cell(output: &mut String, view: &CellView) {
    if let (Some(kind), Some(owner)) = (view.piece, view.owner) {
        let color = player_color(owner);
        let style = if view.weakened { DIM } else { BOLD };
        output.push_str(&format!("{style}{color}{}{RESET}", kind.glyph()));
        return;
    }

    let symbol = view.terrain.symbol();
    match view.terrain {
        Terrain::Lake => output.push_str(&format!("{CYAN}{symbol}{RESET}")),
        Terrain::Trap { .. } => output.push_str(&format!("{YELLOW}{symbol}{RESET}")),
        Terrain::HomeBase { .. } => {
            let color = view.home_owner.map_or(GRAY, player_color);
            output.push_str(&format!("{color}{symbol}{RESET}"));
        }
        Terrain::Plain | Terrain::Outside => {
            output.push_str(&format!("{GRAY}{symbol}{RESET}"));
        }
    }
}

/// Render per-player piece lists.
fn render_player_stats(output: &mut String, state: &GameState) {
    for player in PlayerId::BOTH {
        let color = player_color(player);
        let mut kinds: Vec<_> = state.board().pieces_of(player).map(|p| p.kind).collect();
        kinds.sort_by(|a, b| b.cmp(a));
        let glyphs: String = kinds.iter().map(|k| k.glyph()).collect();

        output.push_str(&format!(
            "{color}{player} ({:>4}):{RESET}  Pieces: {:<2} [{glyphs}]\n",
            player_name(player),
            kinds.len()
        ));
    }
}

/// Get ANSI color for a player.
const fn player_color(player: PlayerId) -> &'static str {
    PLAYER_COLORS[player.index()]
}

/// Get player display name.
const fn player_name(player: PlayerId) -> &'static str {
    PLAYER_NAMES[player.index()]
}
