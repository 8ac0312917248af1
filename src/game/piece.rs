//! Piece kinds, ranks and movement capabilities.
//!
//! Every animal shares one movement algorithm; what differs is looked up here.
//! Rats swim, Lions and Tigers leap lakes, and nobody else touches water.

use serde::{Deserialize, Serialize};

use crate::game::{Coord, PlayerId};

/// The eight animals, in ascending rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    /// Rank 1. Swims, and may take the Elephant.
    Rat,
    /// Rank 2.
    Cat,
    /// Rank 3.
    Dog,
    /// Rank 4.
    Wolf,
    /// Rank 5.
    Leopard,
    /// Rank 6. Leaps lakes.
    Tiger,
    /// Rank 7. Leaps lakes.
    Lion,
    /// Rank 8.
    Elephant,
}

/// How a piece kind interacts with lakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    /// Land only.
    Standard,
    /// May enter and move through lake cells.
    LakeDweller,
    /// May leap across a lake in a straight line.
    LakeJumper,
}

/// Static facts about a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Strength, 1 (Rat) through 8 (Elephant).
    pub rank: u8,
    /// Lake interaction tag.
    pub movement: Movement,
}

impl Capabilities {
    /// Whether the piece may stand in a lake cell.
    #[must_use]
    pub const fn can_enter_lake(self) -> bool {
        matches!(self.movement, Movement::LakeDweller)
    }

    /// Whether the piece may leap across a lake.
    #[must_use]
    pub const fn can_jump_lake(self) -> bool {
        matches!(self.movement, Movement::LakeJumper)
    }
}

impl PieceKind {
    /// All kinds in ascending rank.
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Rat,
        PieceKind::Cat,
        PieceKind::Dog,
        PieceKind::Wolf,
        PieceKind::Leopard,
        PieceKind::Tiger,
        PieceKind::Lion,
        PieceKind::Elephant,
    ];

    /// Look up rank and lake behaviour.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        let movement = match self {
            PieceKind::Rat => Movement::LakeDweller,
            PieceKind::Tiger | PieceKind::Lion => Movement::LakeJumper,
            _ => Movement::Standard,
        };
        Capabilities {
            rank: self.rank(),
            movement,
        }
    }

    /// Strength, 1 (Rat) through 8 (Elephant).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Rat => "Rat",
            PieceKind::Cat => "Cat",
            PieceKind::Dog => "Dog",
            PieceKind::Wolf => "Wolf",
            PieceKind::Leopard => "Leopard",
            PieceKind::Tiger => "Tiger",
            PieceKind::Lion => "Lion",
            PieceKind::Elephant => "Elephant",
        }
    }

    /// Single-letter board glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Rat => 'R',
            PieceKind::Cat => 'C',
            PieceKind::Dog => 'D',
            PieceKind::Wolf => 'W',
            PieceKind::Leopard => 'P',
            PieceKind::Tiger => 'T',
            PieceKind::Lion => 'L',
            PieceKind::Elephant => 'E',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a piece in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

/// A piece in play (or captured).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Arena index.
    pub id: PieceId,
    /// Animal.
    pub kind: PieceKind,
    /// Owning player; fixed for the piece's lifetime.
    pub owner: PlayerId,
    /// Current (or last) cell.
    pub coord: Coord,
    /// Set by landing on an enemy trap, cleared by the next move.
    pub weakened: bool,
    /// Captured pieces never return.
    pub captured: bool,
}

impl Piece {
    /// Rank of this piece's kind.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.kind.rank()
    }

    /// Whether this piece may take `defender`, ignoring terrain.
    ///
    /// A weakened defender always falls, the Rat always takes the Elephant,
    /// and a weakened attacker takes nothing else. Otherwise rank decides,
    /// with equal ranks trading.
    #[must_use]
    pub fn outranks(&self, defender: &Piece) -> bool {
        if defender.owner == self.owner {
            return false;
        }
        if defender.weakened {
            return true;
        }
        if self.kind == PieceKind::Rat && defender.kind == PieceKind::Elephant {
            return true;
        }
        if self.weakened {
            return false;
        }
        self.rank() >= defender.rank()
    }
}
