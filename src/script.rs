//! Move scripts: a recorded list of moves played back against a fresh game.
//!
//! A script is JSON:
//!
//! ```json
//! {
//!   "first": 2,
//!   "moves": [
//!     { "from": [1, 7], "to": [1, 6] },
//!     { "from": [5, 1], "to": [5, 2] }
//!   ]
//! }
//! ```
//!
//! Coordinates are zero-based `[row, col]`. Because the rules are
//! deterministic, the moves alone reproduce the whole game.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{MoveError, SetupError};
use crate::game::{Coord, GameState, MoveResult, PieceKind, PlayerId, Setup};

/// One scripted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMove {
    /// Source cell.
    pub from: Coord,
    /// Target cell.
    pub to: Coord,
}

/// A list of moves to play from the opening position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScript {
    /// Player who moves first. Defaults to Player 1.
    #[serde(default)]
    pub first: Option<PlayerId>,
    /// Animals each player starts with. Defaults to all eight.
    #[serde(default)]
    pub rosters: Option<[Vec<PieceKind>; 2]>,
    /// Abort on the first rejected move instead of recording it.
    #[serde(default)]
    pub stop_on_error: bool,
    /// Moves in play order.
    pub moves: Vec<ScriptMove>,
}

/// What happened to one scripted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptStep {
    /// Position in the script.
    pub index: usize,
    /// The move as written.
    pub from: Coord,
    /// The move as written.
    pub to: Coord,
    /// Result if the move was accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<MoveResult>,
    /// Reason if the move was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

impl ScriptStep {
    /// Check if the move went through.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.accepted.is_some()
    }

    /// The status line shown for this move.
    #[must_use]
    pub fn message(&self) -> &str {
        match (&self.accepted, &self.rejected) {
            (Some(result), _) => &result.message,
            (None, Some(reason)) => reason,
            (None, None) => "",
        }
    }
}

/// Summary of a script run.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    /// Every move in script order.
    pub steps: Vec<ScriptStep>,
    /// Winner, if a home base fell.
    pub winner: Option<PlayerId>,
    /// Player on move when the script ended.
    pub final_turn: PlayerId,
    /// Number of accepted moves.
    pub moves_applied: u32,
    /// Final position.
    pub state: GameState,
}

/// Error type for script operations.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The script is not valid JSON or has the wrong shape.
    #[error("invalid move script: {0}")]
    Parse(#[from] serde_json::Error),
    /// The rosters could not be laid out.
    #[error("invalid setup: {0}")]
    Setup(#[from] SetupError),
    /// A move was rejected and the script asked to stop.
    #[error("move {index} rejected: {error}")]
    Rejected {
        /// Position of the move in the script.
        index: usize,
        /// Why it was rejected.
        error: MoveError,
    },
}

impl MoveScript {
    /// Load a script from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid script.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The setup this script starts from.
    #[must_use]
    pub fn setup(&self) -> Setup {
        let defaults = Setup::default();
        Setup {
            first: self.first.unwrap_or(defaults.first),
            rosters: self.rosters.clone().unwrap_or(defaults.rosters),
        }
    }
}

/// Play a script against a fresh game.
///
/// Rejected moves are recorded and play continues with the same player on
/// move, unless the script sets `stop_on_error`.
///
/// # Errors
///
/// Returns an error if the setup is invalid, or on the first rejection when
/// `stop_on_error` is set.
pub fn run_script(script: &MoveScript) -> Result<ScriptReport, ScriptError> {
    let mut state = GameState::new(&script.setup())?;
    let mut steps = Vec::with_capacity(script.moves.len());

    for (index, mv) in script.moves.iter().enumerate() {
        let (accepted, rejected) = match state.submit_move(mv.from, mv.to) {
            Ok(result) => (Some(result), None),
            Err(error) if script.stop_on_error => {
                return Err(ScriptError::Rejected { index, error });
            }
            Err(error) => (None, Some(error.to_string())),
        };
        steps.push(ScriptStep {
            index,
            from: mv.from,
            to: mv.to,
            accepted,
            rejected,
        });
    }

    debug!(
        "script finished: {} of {} moves applied",
        state.moves_played(),
        script.moves.len()
    );
    if let Some(winner) = state.winner() {
        info!("script ended with {winner} winning");
    }

    Ok(ScriptReport {
        steps,
        winner: state.winner(),
        final_turn: state.current_turn(),
        moves_applied: state.moves_played(),
        state,
    })
}
