//! The board: a fixed 7x9 grid of cells plus the arena that owns every piece.
//!
//! Cells refer to pieces by [`PieceId`] and pieces record their coordinate;
//! the board keeps the two in step. No game rules live here.

use crate::error::PlacementError;
use crate::game::{
    terrain_at, Coord, Piece, PieceId, PieceKind, Player, PlayerId, Terrain, CELL_COUNT,
};

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Fixed terrain.
    pub terrain: Terrain,
    /// Piece standing here, if any.
    pub occupant: Option<PieceId>,
    /// Who holds this home base. Starts as the terrain's owner and passes to
    /// whoever lands on it.
    pub home_owner: Option<PlayerId>,
}

impl Cell {
    /// Create an empty cell at `coord`.
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        let terrain = terrain_at(coord);
        let home_owner = match terrain {
            Terrain::HomeBase { owner } => Some(owner),
            _ => None,
        };
        Self {
            terrain,
            occupant: None,
            home_owner,
        }
    }

    /// Check if a piece stands here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// Every piece ever placed, indexed by [`PieceId`].
    pieces: Vec<Piece>,
    /// Both players, indexed by [`PlayerId::index`].
    players: [Player; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with its terrain laid out.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: (0..CELL_COUNT).map(|i| Cell::new(Coord::from_index(i))).collect(),
            pieces: Vec::with_capacity(16),
            players: [Player::new(PlayerId::One), Player::new(PlayerId::Two)],
        }
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        coord.index().map(|idx| &self.cells[idx])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        coord.index().map(|idx| &mut self.cells[idx])
    }

    /// Reassign a home base to the player now holding it.
    pub(crate) fn claim_home_base(&mut self, coord: Coord, player: PlayerId) {
        if let Some(cell) = self.cell_mut(coord) {
            if matches!(cell.terrain, Terrain::HomeBase { .. }) {
                cell.home_owner = Some(player);
            }
        }
    }

    /// Get a piece by id, captured or not.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(usize::from(id.0))
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(usize::from(id.0))
    }

    /// Get the piece standing on a coordinate.
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.cell(coord)
            .and_then(|cell| cell.occupant)
            .and_then(|id| self.piece(id))
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Place a new piece.
    ///
    /// Links the cell and the piece both ways and adds the piece to its
    /// owner's roster.
    ///
    /// # Errors
    ///
    /// Fails if `coord` is off the grid or already occupied.
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        owner: PlayerId,
        coord: Coord,
    ) -> Result<PieceId, PlacementError> {
        let cell = self
            .cell(coord)
            .ok_or(PlacementError::OutOfBounds(coord))?;
        if cell.is_occupied() {
            return Err(PlacementError::Occupied(coord));
        }
        let id = u8::try_from(self.pieces.len())
            .map(PieceId)
            .map_err(|_| PlacementError::ArenaFull)?;

        self.pieces.push(Piece {
            id,
            kind,
            owner,
            coord,
            weakened: false,
            captured: false,
        });
        if let Some(cell) = self.cell_mut(coord) {
            cell.occupant = Some(id);
        }
        self.players[owner.index()].add_piece(id);
        Ok(id)
    }

    /// Unlink whatever piece stands on `coord` from its cell.
    ///
    /// The piece keeps its last coordinate and stays on its owner's roster;
    /// use [`Board::capture`] to take it out of the game.
    pub fn remove_piece(&mut self, coord: Coord) -> Option<PieceId> {
        self.cell_mut(coord).and_then(|cell| cell.occupant.take())
    }

    /// Take the piece on `coord` out of the game for good.
    pub fn capture(&mut self, coord: Coord) -> Option<PieceId> {
        let id = self.remove_piece(coord)?;
        let owner = {
            let piece = self.piece_mut(id)?;
            piece.captured = true;
            piece.weakened = false;
            piece.owner
        };
        self.players[owner.index()].remove_piece(id);
        Some(id)
    }

    /// Move a piece to an empty cell, keeping both links in step.
    ///
    /// Returns `false` and changes nothing if the piece is unknown or captured,
    /// or if `to` is off the grid or occupied.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Coord) -> bool {
        let from = match self.piece(id) {
            Some(piece) if !piece.captured => piece.coord,
            _ => return false,
        };
        match self.cell(to) {
            Some(cell) if !cell.is_occupied() => {}
            _ => return false,
        }

        if let Some(cell) = self.cell_mut(from) {
            if cell.occupant == Some(id) {
                cell.occupant = None;
            }
        }
        if let Some(cell) = self.cell_mut(to) {
            cell.occupant = Some(id);
        }
        if let Some(piece) = self.piece_mut(id) {
            piece.coord = to;
        }
        true
    }

    /// Check if a player still has any piece on the board.
    #[must_use]
    pub fn has_pieces_remaining(&self, player: PlayerId) -> bool {
        self.cells
            .iter()
            .filter_map(|cell| cell.occupant)
            .filter_map(|id| self.piece(id))
            .any(|piece| piece.owner == player)
    }

    /// Iterate over all coordinates and cells.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Coord::from_index(idx), cell))
    }

    /// Every piece ever placed, including captured ones.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces of `player` still in play.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.player(player)
            .pieces()
            .iter()
            .filter_map(|&id| self.piece(id))
    }
}
