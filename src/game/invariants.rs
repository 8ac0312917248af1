//! Game invariants - sanity checks that detect bugs.
//!
//! These should never trigger in a correctly implemented game. If they do,
//! the board's links or the move resolver are broken.

use thiserror::Error;

use crate::game::{home_base_of, terrain_at, GameState, PlayerId};

/// Most pieces a player can have in play.
pub const MAX_PIECES_PER_PLAYER: usize = 8;

/// Invariant violation error.
#[derive(Debug, Clone, Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut report = |message: String| violations.push(InvariantViolation { message });
    let board = state.board();

    // Cell -> piece links
    for (coord, cell) in board.iter() {
        let Some(id) = cell.occupant else { continue };
        match board.piece(id) {
            None => report(format!("Cell {coord} holds unknown piece {id:?}")),
            Some(piece) if piece.captured => {
                report(format!("Captured {} still stands on {coord}", piece.kind));
            }
            Some(piece) if piece.coord != coord => report(format!(
                "Cell {coord} holds {} which thinks it is at {}",
                piece.kind, piece.coord
            )),
            Some(piece) => {
                if terrain_at(coord).is_home_of(piece.owner) {
                    report(format!(
                        "{} of {} stands on its own home base",
                        piece.kind, piece.owner
                    ));
                }
                if piece.weakened && !terrain_at(coord).weakens(piece.owner) {
                    report(format!(
                        "{} at {coord} is weakened off an enemy trap",
                        piece.kind
                    ));
                }
            }
        }
    }

    // Piece -> cell links and rosters
    for piece in board.pieces() {
        let on_roster = board.player(piece.owner).owns(piece.id);
        if piece.captured {
            if on_roster {
                report(format!("Captured {} is still on {}'s roster", piece.kind, piece.owner));
            }
            if piece.weakened {
                report(format!("Captured {} is still weakened", piece.kind));
            }
            continue;
        }
        if !on_roster {
            report(format!("{} of {} is missing from its roster", piece.kind, piece.owner));
        }
        let linked = board.cell(piece.coord).and_then(|cell| cell.occupant);
        if linked != Some(piece.id) {
            report(format!(
                "{} of {} is at {} but the cell does not hold it",
                piece.kind, piece.owner, piece.coord
            ));
        }
    }

    for player in PlayerId::BOTH {
        let count = board.player(player).pieces().len();
        if count > MAX_PIECES_PER_PLAYER {
            report(format!("{player} has {count} pieces in play"));
        }
    }

    // A winner must be standing on the home base they took.
    if let Some(winner) = state.winner() {
        let base = home_base_of(winner.opponent());
        let held = board.cell(base).and_then(|cell| cell.home_owner) == Some(winner);
        let occupied = board.piece_at(base).is_some_and(|p| p.owner == winner);
        if !held || !occupied {
            report(format!("{winner} won without holding the home base at {base}"));
        }
    } else {
        for player in PlayerId::BOTH {
            let base = home_base_of(player);
            if board.cell(base).and_then(|cell| cell.home_owner) != Some(player) {
                report(format!("Home base at {base} changed hands before the game ended"));
            }
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
