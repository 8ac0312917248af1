//! Opening position and the pre-game draw that decides who moves first.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::game::{Board, Coord, PieceKind, PlayerId, COLS, ROWS};

/// Player 1's starting squares. Player 2 uses the same squares rotated half a
/// turn about the board's centre.
const PLAYER_ONE_LAYOUT: [(PieceKind, Coord); 8] = [
    (PieceKind::Tiger, Coord::new(0, 0)),
    (PieceKind::Cat, Coord::new(1, 1)),
    (PieceKind::Elephant, Coord::new(0, 2)),
    (PieceKind::Wolf, Coord::new(2, 2)),
    (PieceKind::Leopard, Coord::new(4, 2)),
    (PieceKind::Dog, Coord::new(5, 1)),
    (PieceKind::Lion, Coord::new(6, 0)),
    (PieceKind::Rat, Coord::new(6, 2)),
];

/// Starting square of `kind` for `player`.
#[must_use]
pub fn start_square(kind: PieceKind, player: PlayerId) -> Coord {
    let base = PLAYER_ONE_LAYOUT
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(Coord::new(0, 0), |&(_, coord)| coord);
    match player {
        PlayerId::One => base,
        PlayerId::Two => Coord::new(ROWS - 1 - base.row, COLS - 1 - base.col),
    }
}

/// How to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setup {
    /// Player who moves first.
    pub first: PlayerId,
    /// Animals each player starts with, indexed by [`PlayerId::index`].
    pub rosters: [Vec<PieceKind>; 2],
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            first: PlayerId::One,
            rosters: [PieceKind::ALL.to_vec(), PieceKind::ALL.to_vec()],
        }
    }
}

impl Setup {
    /// Full rosters with the given first player.
    #[must_use]
    pub fn with_first(first: PlayerId) -> Self {
        Self {
            first,
            ..Self::default()
        }
    }

    /// Lay the rosters out on a fresh board.
    ///
    /// # Errors
    ///
    /// Fails if a roster names the same animal twice.
    pub fn build_board(&self) -> Result<Board, SetupError> {
        let mut board = Board::new();
        for player in PlayerId::BOTH {
            let roster = &self.rosters[player.index()];
            for (i, &kind) in roster.iter().enumerate() {
                if roster[..i].contains(&kind) {
                    return Err(SetupError::DuplicateKind { player, kind });
                }
                board.place_piece(kind, player, start_square(kind, player))?;
            }
        }
        Ok(board)
    }
}

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    const fn new(seed: u64) -> Self {
        // xorshift never leaves zero
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random index in [0, max).
    #[allow(clippy::cast_possible_truncation)]
    fn next_index(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u64() % max as u64) as usize
    }
}

/// The face-down deck of animal cards each player draws from before the game.
///
/// Each player picks one card; whoever turns over the stronger animal moves
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    cards: [PieceKind; 8],
}

impl Draw {
    /// Shuffle the deck with a seed (Fisher-Yates).
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut cards = PieceKind::ALL;
        for i in (1..cards.len()).rev() {
            let j = rng.next_index(i + 1);
            cards.swap(i, j);
        }
        Self { cards }
    }

    /// The deck in its current order.
    #[must_use]
    pub const fn cards(&self) -> &[PieceKind; 8] {
        &self.cards
    }

    /// Both players turn over a card.
    ///
    /// Returns each player's animal and who moves first.
    ///
    /// # Errors
    ///
    /// Fails if an index is past the deck or both players chose the same card.
    pub fn reveal(
        &self,
        p1_pick: usize,
        p2_pick: usize,
    ) -> Result<(PieceKind, PieceKind, PlayerId), SetupError> {
        let max = self.cards.len() - 1;
        for index in [p1_pick, p2_pick] {
            if index > max {
                return Err(SetupError::InvalidPick { index, max });
            }
        }
        if p1_pick == p2_pick {
            return Err(SetupError::SamePick(p1_pick));
        }
        let (p1, p2) = (self.cards[p1_pick], self.cards[p2_pick]);
        Ok((p1, p2, first_mover(p1, p2)))
    }
}

/// Player 1 moves first only with a strictly stronger card.
#[must_use]
pub fn first_mover(p1_card: PieceKind, p2_card: PieceKind) -> PlayerId {
    if p1_card.rank() > p2_card.rank() {
        PlayerId::One
    } else {
        PlayerId::Two
    }
}
