// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Jungle: a rule engine for Jungle King (Dou Shou Qi).
//!
//! The crate models the classic 7x9 board with its lakes, traps and home
//! bases, eight ranked animals per side, and the turn controller that decides
//! whether a proposed move is legal and what it does.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI / move scripts / renderers    │
//! ├─────────────────────────────────────┤
//! │   GameState (turns, win detection)  │
//! ├─────────────────────────────────────┤
//! │   Move resolver (plan, then apply)  │
//! ├─────────────────────────────────────┤
//! │   Board: terrain, cells, pieces     │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use jungle::{Coord, GameState, MoveOutcome, Setup};
//!
//! let mut game = GameState::new(&Setup::default()).unwrap();
//! let result = game.submit_move(Coord::new(5, 1), Coord::new(5, 2)).unwrap();
//! assert_eq!(result.outcome, MoveOutcome::Moved);
//! assert_eq!(result.message, "Dog moved to (6, 3)");
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod script;

pub use error::{MoveError, PlacementError, SetupError};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, CellView, Coord, Direction, Draw, GameState, MoveOutcome, MoveResult, PieceKind,
    PlayerId, Setup, Terrain,
};
pub use render::{render_ascii, render_text};
pub use script::{run_script, MoveScript, ScriptError, ScriptReport};
