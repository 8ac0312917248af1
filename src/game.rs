//! Game layer for Jungle.
//!
//! Implements the board game rules:
//! - Board geometry and fixed terrain (lakes, traps, home bases)
//! - Animals, their ranks and movement capabilities
//! - Move resolution, capture and trap weakening
//! - Turn control and win detection
//! - Opening setup and the pre-game draw

mod board;
mod coord;
mod invariants;
mod movement;
mod piece;
mod player;
mod setup;
mod state;
mod terrain;

pub use board::{Board, Cell};
pub use coord::{Coord, Direction, CELL_COUNT, COLS, ROWS};
pub use invariants::{
    assert_invariants, check_invariants, InvariantViolation, MAX_PIECES_PER_PLAYER,
};
pub use movement::{attempt_move, legal_moves, plan_move, MoveOutcome, MovePlan, MoveReport};
pub use piece::{Capabilities, Movement, Piece, PieceId, PieceKind};
pub use player::{Player, PlayerId};
pub use setup::{first_mover, start_square, Draw, Setup};
pub use state::{CellView, GameState, MoveResult};
pub use terrain::{home_base_of, terrain_at, Terrain, HOME_BASES, TRAPS};
