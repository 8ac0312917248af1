//! Terrain classification.
//!
//! Terrain is a pure function of the coordinate. The tables below are the whole
//! of the board's geography.

use serde::{Deserialize, Serialize};

use crate::game::{Coord, PlayerId};

/// Home base cells, one per player.
pub const HOME_BASES: [(PlayerId, Coord); 2] = [
    (PlayerId::One, Coord::new(3, 0)),
    (PlayerId::Two, Coord::new(3, 8)),
];

/// Trap cells with the player whose home base each one guards.
pub const TRAPS: [(PlayerId, Coord); 6] = [
    (PlayerId::One, Coord::new(2, 0)),
    (PlayerId::One, Coord::new(4, 0)),
    (PlayerId::One, Coord::new(3, 1)),
    (PlayerId::Two, Coord::new(2, 8)),
    (PlayerId::Two, Coord::new(4, 8)),
    (PlayerId::Two, Coord::new(3, 7)),
];

/// Rows occupied by the two lake basins.
const LAKE_ROWS: [u8; 4] = [1, 2, 4, 5];

/// Columns occupied by the two lake basins.
const LAKE_COLS: [u8; 3] = [3, 4, 5];

/// Kind of terrain on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Ordinary ground.
    Plain,
    /// Water. Only the Rat may stand here.
    Lake,
    /// A trap guarding `guards`'s home base; it weakens the other side.
    Trap {
        /// Player whose base this trap protects.
        guards: PlayerId,
    },
    /// A player's home base.
    HomeBase {
        /// Player the base belongs to.
        owner: PlayerId,
    },
    /// Not on the board.
    Outside,
}

impl Terrain {
    /// Check if this terrain is water.
    #[must_use]
    pub const fn is_lake(self) -> bool {
        matches!(self, Terrain::Lake)
    }

    /// Whether landing here weakens a piece owned by `player`.
    #[must_use]
    pub fn weakens(self, player: PlayerId) -> bool {
        matches!(self, Terrain::Trap { guards } if guards != player)
    }

    /// Whether this is `player`'s own home base.
    #[must_use]
    pub fn is_home_of(self, player: PlayerId) -> bool {
        matches!(self, Terrain::HomeBase { owner } if owner == player)
    }

    /// Map symbol used by the renderers.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Plain => '.',
            Terrain::Lake => '~',
            Terrain::Trap { .. } => '#',
            Terrain::HomeBase { .. } => 'H',
            Terrain::Outside => ' ',
        }
    }
}

/// Classify the terrain at a coordinate.
#[must_use]
pub fn terrain_at(coord: Coord) -> Terrain {
    if !coord.in_bounds() {
        return Terrain::Outside;
    }
    if let Some(&(owner, _)) = HOME_BASES.iter().find(|(_, c)| *c == coord) {
        return Terrain::HomeBase { owner };
    }
    if let Some(&(guards, _)) = TRAPS.iter().find(|(_, c)| *c == coord) {
        return Terrain::Trap { guards };
    }
    if LAKE_ROWS.contains(&coord.row) && LAKE_COLS.contains(&coord.col) {
        return Terrain::Lake;
    }
    Terrain::Plain
}

/// The home base cell of `player`.
#[must_use]
pub fn home_base_of(player: PlayerId) -> Coord {
    match player {
        PlayerId::One => HOME_BASES[0].1,
        PlayerId::Two => HOME_BASES[1].1,
    }
}
