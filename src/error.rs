//! Error types for the rule engine.
//!
//! Every rejection is an ordinary, recoverable value. Nothing here is fatal:
//! callers show the message and ask for another move.

use thiserror::Error;

use crate::game::{Coord, PieceKind, PlayerId};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Source or target is off the grid.
    #[error("Invalid move: Out of bounds.")]
    OutOfBounds,
    /// Target is not a single orthogonal step away.
    #[error("Pieces move one square up, down, left or right.")]
    NotOrthogonalStep,
    /// The mover tried to land on its own home base.
    #[error("You cannot land on your own home base!")]
    OwnHomeBaseBlocked,
    /// A land animal tried to enter a lake.
    #[error("{kind} cannot cross or land on a lake.")]
    LakeEntryDenied {
        /// The piece that tried.
        kind: PieceKind,
    },
    /// A Rat in the water blocks the leap.
    #[error("{kind} cannot jump because a Rat blocks the path.")]
    LakeJumpBlocked {
        /// The leaping piece.
        kind: PieceKind,
    },
    /// The leap ran off the board before reaching land.
    #[error("{kind} must land immediately after the lake.")]
    LakeJumpLandingInvalid {
        /// The leaping piece.
        kind: PieceKind,
    },
    /// A Rat in the water cannot attack a land animal.
    #[error("Rat is on the lake and is unable to capture any animal!")]
    RatLakeCaptureDenied,
    /// The target holds one of the mover's own pieces.
    #[error("Cannot capture your own {defender}.")]
    OccupiedByFriendly {
        /// The friendly piece in the way.
        defender: PieceKind,
    },
    /// The defender outranks the attacker.
    #[error("Cannot capture {defender}.")]
    CaptureDenied {
        /// The attacking piece.
        attacker: PieceKind,
        /// The piece that held.
        defender: PieceKind,
    },
    /// The piece belongs to the player who is not on move.
    #[error("It is {expected}'s turn.")]
    WrongTurn {
        /// Player whose turn it is.
        expected: PlayerId,
    },
    /// A home base has already been taken.
    #[error("The game is over.")]
    GameAlreadyOver,
    /// There is no piece on the source cell.
    #[error("There is no piece to move there.")]
    EmptySourceCell,
}

/// Why a piece could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The coordinate is off the grid.
    #[error("cannot place a piece at {0:?}: out of bounds")]
    OutOfBounds(Coord),
    /// Another piece already stands there.
    #[error("cannot place a piece at {0}: square is occupied")]
    Occupied(Coord),
    /// The piece arena has no free ids left.
    #[error("no more pieces can be created on this board")]
    ArenaFull,
}

/// Why a game could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A roster lists the same animal twice.
    #[error("{player} was given {kind} more than once")]
    DuplicateKind {
        /// Offending player.
        player: PlayerId,
        /// Repeated kind.
        kind: PieceKind,
    },
    /// Placement failed.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// A draw pick does not name a card.
    #[error("card {index} does not exist (choose 0-{max})")]
    InvalidPick {
        /// Requested card index.
        index: usize,
        /// Highest valid index.
        max: usize,
    },
    /// Both players picked the same card.
    #[error("both players picked card {0}")]
    SamePick(usize),
    /// A hand-built position breaks the board rules.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_game_text() {
        assert_eq!(
            MoveError::LakeEntryDenied {
                kind: PieceKind::Cat
            }
            .to_string(),
            "Cat cannot cross or land on a lake."
        );
        assert_eq!(
            MoveError::CaptureDenied {
                attacker: PieceKind::Cat,
                defender: PieceKind::Dog
            }
            .to_string(),
            "Cannot capture Dog."
        );
        assert_eq!(
            MoveError::WrongTurn {
                expected: PlayerId::Two
            }
            .to_string(),
            "It is Player 2's turn."
        );
    }

    #[test]
    fn test_placement_error_converts() {
        let err: SetupError = PlacementError::Occupied(Coord::new(0, 0)).into();
        assert!(matches!(err, SetupError::Placement(_)));
        assert!(err.to_string().contains("occupied"));
    }
}
