//! Player identity and piece rosters.

use serde::{Deserialize, Serialize};

use crate::game::PieceId;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    /// Player 1, home base on column 0.
    One = 1,
    /// Player 2, home base on column 8.
    Two = 2,
}

impl PlayerId {
    /// Both players in order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Numeric id, 1 or 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based slot for per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(format!("invalid player id {other} (expected 1 or 2)")),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.number()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Which player this is.
    pub id: PlayerId,
    /// Pieces still in play, in placement order.
    pieces: Vec<PieceId>,
}

impl Player {
    /// Create a player with no pieces.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            pieces: Vec::new(),
        }
    }

    /// Pieces still in play.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Register a newly placed piece.
    pub(crate) fn add_piece(&mut self, piece: PieceId) {
        if !self.pieces.contains(&piece) {
            self.pieces.push(piece);
        }
    }

    /// Drop a captured piece. Returns `false` if it was not in play.
    pub(crate) fn remove_piece(&mut self, piece: PieceId) -> bool {
        let before = self.pieces.len();
        self.pieces.retain(|&p| p != piece);
        self.pieces.len() != before
    }

    /// Check whether a piece is still in this player's roster.
    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }

    #[test]
    fn test_player_id_from_u8() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::One));
        assert_eq!(PlayerId::try_from(2), Ok(PlayerId::Two));
        assert!(PlayerId::try_from(0).is_err());
        assert!(PlayerId::try_from(3).is_err());
    }

    #[test]
    fn test_player_roster() {
        let mut player = Player::new(PlayerId::One);
        assert!(player.pieces().is_empty());

        player.add_piece(PieceId(3));
        player.add_piece(PieceId(3));
        assert_eq!(player.pieces(), &[PieceId(3)]);
        assert!(player.owns(PieceId(3)));

        assert!(player.remove_piece(PieceId(3)));
        assert!(!player.remove_piece(PieceId(3)));
        assert!(!player.owns(PieceId(3)));
    }

    #[test]
    fn test_player_id_serde() {
        let json = serde_json::to_string(&PlayerId::Two).unwrap();
        assert_eq!(json, "2");
        let back: PlayerId = serde_json::from_str("1").unwrap();
        assert_eq!(back, PlayerId::One);
        assert!(serde_json::from_str::<PlayerId>("5").is_err());
    }
}
