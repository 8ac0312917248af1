//! Game state and turn control.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{MoveError, SetupError};
use crate::game::{
    assert_invariants, attempt_move, check_invariants, legal_moves, Board, Coord, MoveOutcome,
    MovePlan, MoveReport, PieceId, PieceKind, PlayerId, Setup, Terrain,
};

/// Everything a renderer needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// The cell.
    pub coord: Coord,
    /// Fixed terrain.
    pub terrain: Terrain,
    /// Animal standing here.
    pub piece: Option<PieceKind>,
    /// Owner of that animal.
    pub owner: Option<PlayerId>,
    /// Whether that animal is weakened.
    pub weakened: bool,
    /// Current holder of a home base cell.
    pub home_owner: Option<PlayerId>,
}

/// Result of an accepted move, as reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Headline outcome.
    pub outcome: MoveOutcome,
    /// Player who moved.
    pub mover: PlayerId,
    /// Animal that moved.
    pub kind: PieceKind,
    /// Starting cell.
    pub from: Coord,
    /// Landing cell.
    pub landing: Coord,
    /// Whether the move leapt a lake.
    pub jumped_lake: bool,
    /// Animal captured by this move.
    pub captured: Option<PieceKind>,
    /// The mover, if it is now weakened by an enemy trap.
    pub weakened: Option<PieceId>,
    /// Player on move after this one.
    pub next_turn: PlayerId,
    /// Human-readable summary.
    pub message: String,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player on move.
    turn: PlayerId,
    /// Winner, once a home base has fallen.
    winner: Option<PlayerId>,
    /// Number of accepted moves.
    moves_played: u32,
    /// Status line of every accepted move, oldest first.
    history: Vec<String>,
}

impl GameState {
    /// Start a game from a setup.
    ///
    /// # Errors
    ///
    /// Fails if the setup's rosters are invalid.
    pub fn new(setup: &Setup) -> Result<Self, SetupError> {
        Self::from_board(setup.build_board()?, setup.first)
    }

    /// Start a game from an arbitrary position.
    ///
    /// # Errors
    ///
    /// Fails if the position breaks the board rules, such as a piece standing
    /// on its own home base or more than eight pieces for one player.
    pub fn from_board(board: Board, first: PlayerId) -> Result<Self, SetupError> {
        let state = Self::unchecked(board, first);
        let violations = check_invariants(&state);
        if violations.is_empty() {
            return Ok(state);
        }
        let reasons: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        Err(SetupError::InvalidPosition(reasons.join("; ")))
    }

    /// Wrap a position without checking it.
    pub(crate) const fn unchecked(board: Board, first: PlayerId) -> Self {
        Self {
            board,
            turn: first,
            winner: None,
            moves_played: 0,
            history: Vec::new(),
        }
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Player on move.
    #[must_use]
    pub const fn current_turn(&self) -> PlayerId {
        self.turn
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The winner, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub const fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Status line of the last accepted move. Empty before the first move.
    #[must_use]
    pub fn last_message(&self) -> &str {
        self.history.last().map_or("", String::as_str)
    }

    /// Status lines of all accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Describe one cell.
    #[must_use]
    pub fn query_cell(&self, coord: Coord) -> CellView {
        let cell = self.board.cell(coord);
        let piece = self.board.piece_at(coord);
        CellView {
            coord,
            terrain: cell.map_or(Terrain::Outside, |c| c.terrain),
            piece: piece.map(|p| p.kind),
            owner: piece.map(|p| p.owner),
            weakened: piece.is_some_and(|p| p.weakened),
            home_owner: cell.and_then(|c| c.home_owner),
        }
    }

    /// Moves available to the piece on `from`, if it belongs to the player on
    /// move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Coord) -> Vec<MovePlan> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.owner == self.turn => legal_moves(&self.board, piece.id),
            _ => Vec::new(),
        }
    }

    /// Submit a move for the player on move.
    ///
    /// # Errors
    ///
    /// Returns why the move was refused. A refused move changes nothing and
    /// the same player stays on move.
    pub fn submit_move(&mut self, from: Coord, to: Coord) -> Result<MoveResult, MoveError> {
        let result = self.try_move(from, to);
        if let Err(err) = &result {
            debug!("{} move {from} -> {to} rejected: {err}", self.turn);
        }
        result
    }

    fn try_move(&mut self, from: Coord, to: Coord) -> Result<MoveResult, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !from.in_bounds() {
            return Err(MoveError::OutOfBounds);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySourceCell)?;
        if piece.owner != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
            });
        }
        let (id, mover) = (piece.id, piece.owner);

        let report = attempt_move(&mut self.board, id, to)?;
        self.moves_played += 1;

        let captured = report
            .captured
            .and_then(|cid| self.board.piece(cid))
            .map(|p| (p.kind, p.owner));

        if report.outcome == MoveOutcome::MovedOntoEnemyHomeBase {
            self.winner = Some(mover);
            info!("{mover} wins: {} reached {}", report.kind, report.landing);
        } else if self.board.has_pieces_remaining(mover.opponent()) {
            self.turn = mover.opponent();
        } else {
            debug!("{} has no pieces left; {mover} moves again", mover.opponent());
        }

        assert_invariants(self);

        let message = describe(&report, captured);
        self.history.push(message.clone());
        Ok(MoveResult {
            outcome: report.outcome,
            mover,
            kind: report.kind,
            from: report.from,
            landing: report.landing,
            jumped_lake: report.jumped_lake,
            captured: captured.map(|(kind, _)| kind),
            weakened: report.weakened.then_some(report.piece),
            next_turn: self.turn,
            message,
        })
    }
}

/// Compose the status line for an accepted move.
fn describe(report: &MoveReport, captured: Option<(PieceKind, PlayerId)>) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some((kind, owner)) = captured {
        parts.push(format!("{kind} of {owner} has been captured."));
    }
    if report.jumped_lake {
        parts.push(format!(
            "{} jumps over the lake to {}.",
            report.kind, report.landing
        ));
    }
    match report.outcome {
        MoveOutcome::MovedOntoEnemyHomeBase => {
            parts.push(format!(
                "{} reached the home base at {}!",
                report.kind, report.landing
            ));
        }
        MoveOutcome::Moved | MoveOutcome::MovedWithCapture(_) => {
            if report.weakened {
                parts.push(format!("{} is weakened by a trap.", report.kind));
            }
            parts.push(format!("{} moved to {}", report.kind, report.landing));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_game(first: PlayerId) -> GameState {
        GameState::from_board(Board::new(), first).unwrap()
    }

    fn place(game: &mut GameState, kind: PieceKind, owner: PlayerId, row: u8, col: u8) {
        game.board
            .place_piece(kind, owner, Coord::new(row, col))
            .unwrap();
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new(&Setup::default()).unwrap();
        assert_eq!(game.current_turn(), PlayerId::One);
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.last_message(), "");
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_from_board_rejects_crowded_side() {
        let mut board = Board::new();
        for col in 0..9 {
            board
                .place_piece(PieceKind::Rat, PlayerId::One, Coord::new(6, col))
                .unwrap();
        }
        board
            .place_piece(PieceKind::Cat, PlayerId::Two, Coord::new(0, 8))
            .unwrap();

        let err = GameState::from_board(board, PlayerId::One).unwrap_err();
        assert!(matches!(err, SetupError::InvalidPosition(_)));
        assert!(err.to_string().contains("Player 1 has 9 pieces in play"));
    }

    #[test]
    fn test_from_board_rejects_piece_on_own_base() {
        let mut board = Board::new();
        board
            .place_piece(PieceKind::Cat, PlayerId::One, Coord::new(3, 0))
            .unwrap();
        board
            .place_piece(PieceKind::Dog, PlayerId::One, Coord::new(5, 1))
            .unwrap();
        board
            .place_piece(PieceKind::Wolf, PlayerId::Two, Coord::new(0, 8))
            .unwrap();

        let err = GameState::from_board(board, PlayerId::One).unwrap_err();
        assert!(err.to_string().contains("stands on its own home base"));
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = GameState::new(&Setup::default()).unwrap();
        let result = game
            .submit_move(Coord::new(5, 1), Coord::new(5, 2))
            .unwrap();
        assert_eq!(result.mover, PlayerId::One);
        assert_eq!(result.next_turn, PlayerId::Two);
        assert_eq!(result.message, "Dog moved to (6, 3)");
        assert_eq!(game.current_turn(), PlayerId::Two);
        assert_eq!(game.last_message(), "Dog moved to (6, 3)");

        game.submit_move(Coord::new(1, 7), Coord::new(0, 8)).unwrap_err();
        game.submit_move(Coord::new(1, 7), Coord::new(2, 7)).unwrap();
        assert_eq!(
            game.history(),
            ["Dog moved to (6, 3)", "Dog moved to (3, 8)"]
        );
    }

    #[test]
    fn test_wrong_turn_and_empty_source() {
        let mut game = GameState::new(&Setup::with_first(PlayerId::Two)).unwrap();
        assert_eq!(
            game.submit_move(Coord::new(5, 1), Coord::new(5, 2)),
            Err(MoveError::WrongTurn {
                expected: PlayerId::Two
            })
        );
        assert_eq!(
            game.submit_move(Coord::new(3, 3), Coord::new(3, 4)),
            Err(MoveError::EmptySourceCell)
        );
        assert_eq!(
            game.submit_move(Coord::new(9, 9), Coord::new(3, 4)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(game.current_turn(), PlayerId::Two);
    }

    #[test]
    fn test_rejection_keeps_turn() {
        let mut game = GameState::new(&Setup::default()).unwrap();
        let before = game.clone();
        assert!(game
            .submit_move(Coord::new(2, 2), Coord::new(2, 3))
            .is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_home_base_capture_ends_game() {
        let mut game = empty_game(PlayerId::One);
        place(&mut game, PieceKind::Dog, PlayerId::One, 2, 8);
        place(&mut game, PieceKind::Cat, PlayerId::Two, 6, 6);

        let result = game
            .submit_move(Coord::new(2, 8), Coord::new(3, 8))
            .unwrap();
        assert_eq!(result.outcome, MoveOutcome::MovedOntoEnemyHomeBase);
        assert_eq!(result.message, "Dog reached the home base at (4, 9)!");
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(PlayerId::One));

        let before = game.clone();
        assert_eq!(
            game.submit_move(Coord::new(6, 6), Coord::new(6, 5)),
            Err(MoveError::GameAlreadyOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_switch_when_opponent_wiped_out() {
        let mut game = empty_game(PlayerId::One);
        place(&mut game, PieceKind::Lion, PlayerId::One, 0, 0);
        place(&mut game, PieceKind::Cat, PlayerId::Two, 0, 1);

        let result = game
            .submit_move(Coord::new(0, 0), Coord::new(0, 1))
            .unwrap();
        assert_eq!(result.captured, Some(PieceKind::Cat));
        assert_eq!(result.message, "Cat of Player 2 has been captured. Lion moved to (1, 2)");
        assert_eq!(game.current_turn(), PlayerId::One);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_weakened_reported() {
        let mut game = empty_game(PlayerId::Two);
        place(&mut game, PieceKind::Wolf, PlayerId::Two, 1, 0);
        place(&mut game, PieceKind::Cat, PlayerId::One, 6, 6);

        let result = game
            .submit_move(Coord::new(1, 0), Coord::new(2, 0))
            .unwrap();
        assert!(result.weakened.is_some());
        assert!(result.message.starts_with("Wolf is weakened by a trap."));
        assert!(game.query_cell(Coord::new(2, 0)).weakened);
    }

    #[test]
    fn test_leap_message() {
        let mut game = empty_game(PlayerId::One);
        place(&mut game, PieceKind::Lion, PlayerId::One, 1, 2);
        place(&mut game, PieceKind::Cat, PlayerId::Two, 6, 6);
        let result = game
            .submit_move(Coord::new(1, 2), Coord::new(1, 3))
            .unwrap();
        assert!(result.jumped_lake);
        assert_eq!(
            result.message,
            "Lion jumps over the lake to (2, 7). Lion moved to (2, 7)"
        );
    }

    #[test]
    fn test_query_cell() {
        let game = GameState::new(&Setup::default()).unwrap();
        let view = game.query_cell(Coord::new(0, 2));
        assert_eq!(view.piece, Some(PieceKind::Elephant));
        assert_eq!(view.owner, Some(PlayerId::One));
        assert_eq!(view.terrain, Terrain::Plain);
        assert!(!view.weakened);

        let base = game.query_cell(Coord::new(3, 0));
        assert_eq!(base.home_owner, Some(PlayerId::One));
        assert_eq!(base.piece, None);

        let off = game.query_cell(Coord::new(8, 8));
        assert_eq!(off.terrain, Terrain::Outside);
        assert_eq!(game.query_cell(Coord::new(1, 4)), game.query_cell(Coord::new(1, 4)));
    }

    #[test]
    fn test_legal_moves_from_respects_turn() {
        let game = GameState::new(&Setup::default()).unwrap();
        assert!(!game.legal_moves_from(Coord::new(5, 1)).is_empty());
        assert!(game.legal_moves_from(Coord::new(1, 7)).is_empty());
        assert!(game.legal_moves_from(Coord::new(3, 3)).is_empty());
    }
}
