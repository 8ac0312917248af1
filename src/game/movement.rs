//! Move resolution.
//!
//! One algorithm serves every animal; the differences come from
//! [`PieceKind::capabilities`]. Resolution happens in two phases:
//! [`plan_move`] runs the whole validation pipeline against a shared borrow of
//! the board, and only a successful plan is applied. A rejected move therefore
//! never leaves the board half-changed.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::game::{
    terrain_at, Board, Coord, Direction, Piece, PieceId, PieceKind, PlayerId, Terrain,
};

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Plain move to an empty cell.
    Moved,
    /// The mover took the named piece.
    MovedWithCapture(PieceKind),
    /// The mover reached the enemy home base. Ends the game.
    MovedOntoEnemyHomeBase,
}

/// A validated move, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// The moving piece.
    pub piece: PieceId,
    /// Its kind.
    pub kind: PieceKind,
    /// Its owner.
    pub owner: PlayerId,
    /// Where it starts.
    pub from: Coord,
    /// Step direction.
    pub direction: Direction,
    /// Where the piece ends up. Differs from the requested target after a
    /// lake leap.
    pub landing: Coord,
    /// Piece that will be taken, if any.
    pub capture: Option<PieceId>,
    /// Whether the move leaps a lake.
    pub jumped_lake: bool,
}

/// Full account of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Headline result.
    pub outcome: MoveOutcome,
    /// The piece that moved.
    pub piece: PieceId,
    /// Its kind.
    pub kind: PieceKind,
    /// Where it started.
    pub from: Coord,
    /// Where it landed.
    pub landing: Coord,
    /// Captured piece, if any.
    pub captured: Option<PieceId>,
    /// Whether the move leapt a lake.
    pub jumped_lake: bool,
    /// Whether the mover is now weakened by an enemy trap.
    pub weakened: bool,
}

/// Validate and apply a move of piece `id` towards `target`.
///
/// # Errors
///
/// Returns the first rule the move breaks; the board is untouched in that case.
pub fn attempt_move(
    board: &mut Board,
    id: PieceId,
    target: Coord,
) -> Result<MoveReport, MoveError> {
    let plan = plan_move(board, id, target)?;
    Ok(apply_plan(board, plan))
}

/// Run the validation pipeline without touching the board.
///
/// # Errors
///
/// Returns the first rule the move breaks.
pub fn plan_move(board: &Board, id: PieceId, target: Coord) -> Result<MovePlan, MoveError> {
    let mover = match board.piece(id) {
        Some(piece) if !piece.captured => *piece,
        _ => return Err(MoveError::EmptySourceCell),
    };

    if !target.in_bounds() {
        return Err(MoveError::OutOfBounds);
    }
    let direction = mover
        .coord
        .direction_to(target)
        .ok_or(MoveError::NotOrthogonalStep)?;

    if terrain_at(target).is_home_of(mover.owner) {
        return Err(MoveError::OwnHomeBaseBlocked);
    }

    // A Rat in the water bites an enemy Rat wherever it stands. From land the
    // ordinary capture rules apply.
    if let Some(defender) = board.piece_at(target) {
        if mover.kind == PieceKind::Rat
            && defender.kind == PieceKind::Rat
            && defender.owner != mover.owner
            && terrain_at(mover.coord).is_lake()
        {
            return Ok(MovePlan {
                piece: id,
                kind: mover.kind,
                owner: mover.owner,
                from: mover.coord,
                direction,
                landing: target,
                capture: Some(defender.id),
                jumped_lake: false,
            });
        }
    }

    let caps = mover.kind.capabilities();
    let mut landing = target;
    let mut jumped_lake = false;
    if terrain_at(target).is_lake() {
        if caps.can_jump_lake() {
            landing = leap(board, &mover, direction)?;
            jumped_lake = true;
            if terrain_at(landing).is_home_of(mover.owner) {
                return Err(MoveError::OwnHomeBaseBlocked);
            }
        } else if !caps.can_enter_lake() {
            return Err(MoveError::LakeEntryDenied { kind: mover.kind });
        }
    }

    let capture = match board.piece_at(landing) {
        None => None,
        Some(defender) => Some(check_capture(&mover, defender)?),
    };

    Ok(MovePlan {
        piece: id,
        kind: mover.kind,
        owner: mover.owner,
        from: mover.coord,
        direction,
        landing,
        capture,
        jumped_lake,
    })
}

/// Every move piece `id` could legally make right now.
#[must_use]
pub fn legal_moves(board: &Board, id: PieceId) -> Vec<MovePlan> {
    let Some(piece) = board.piece(id) else {
        return Vec::new();
    };
    Direction::ALL
        .into_iter()
        .filter_map(|dir| piece.coord.step(dir))
        .filter_map(|target| plan_move(board, id, target).ok())
        .collect()
}

/// Walk a lake in a straight line and find the landing cell beyond it.
fn leap(board: &Board, mover: &Piece, direction: Direction) -> Result<Coord, MoveError> {
    let mut cursor = mover.coord.step(direction);
    while let Some(cell) = cursor {
        if !terrain_at(cell).is_lake() {
            return Ok(cell);
        }
        if board
            .piece_at(cell)
            .is_some_and(|p| p.kind == PieceKind::Rat)
        {
            debug!("{} leap from {} blocked by Rat at {}", mover.kind, mover.coord, cell);
            return Err(MoveError::LakeJumpBlocked { kind: mover.kind });
        }
        trace!("{} crosses lake cell {}", mover.kind, cell);
        cursor = cell.step(direction);
    }
    Err(MoveError::LakeJumpLandingInvalid { kind: mover.kind })
}

/// Decide whether `mover` may take `defender` where it stands.
fn check_capture(mover: &Piece, defender: &Piece) -> Result<PieceId, MoveError> {
    if defender.owner == mover.owner {
        return Err(MoveError::OccupiedByFriendly {
            defender: defender.kind,
        });
    }
    if mover.kind == PieceKind::Rat
        && terrain_at(mover.coord).is_lake()
        && defender.kind != PieceKind::Rat
    {
        return Err(MoveError::RatLakeCaptureDenied);
    }
    if !mover.outranks(defender) {
        return Err(MoveError::CaptureDenied {
            attacker: mover.kind,
            defender: defender.kind,
        });
    }
    Ok(defender.id)
}

/// Apply a validated plan.
fn apply_plan(board: &mut Board, plan: MovePlan) -> MoveReport {
    let MovePlan { kind, owner, from, .. } = plan;

    let captured_kind = plan.capture.and_then(|cid| {
        let victim = board.piece(cid).map(|p| p.kind);
        board.capture(plan.landing);
        victim
    });

    let moved = board.relocate(plan.piece, plan.landing);
    debug_assert!(moved, "validated landing {} must be free", plan.landing);

    let terrain = terrain_at(plan.landing);
    let reached_enemy_base = matches!(terrain, Terrain::HomeBase { owner: base } if base != owner);
    let weakened = !reached_enemy_base && terrain.weakens(owner);
    if let Some(piece) = board.piece_mut(plan.piece) {
        piece.weakened = weakened;
    }

    let outcome = if reached_enemy_base {
        board.claim_home_base(plan.landing, owner);
        MoveOutcome::MovedOntoEnemyHomeBase
    } else if let Some(victim) = captured_kind {
        MoveOutcome::MovedWithCapture(victim)
    } else {
        MoveOutcome::Moved
    };

    debug!(
        "{owner} {kind} {from} -> {}{}: {outcome:?}",
        plan.landing,
        if plan.jumped_lake { " (leap)" } else { "" }
    );

    MoveReport {
        outcome,
        piece: plan.piece,
        kind,
        from,
        landing: plan.landing,
        captured: plan.capture,
        jumped_lake: plan.jumped_lake,
        weakened,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, kind: PieceKind, owner: PlayerId, row: u8, col: u8) -> PieceId {
        board.place_piece(kind, owner, Coord::new(row, col)).unwrap()
    }

    #[test]
    fn test_plain_step() {
        let mut board = Board::new();
        let dog = place(&mut board, PieceKind::Dog, PlayerId::One, 5, 1);

        let report = attempt_move(&mut board, dog, Coord::new(5, 2)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::Moved);
        assert_eq!(report.landing, Coord::new(5, 2));
        assert_eq!(board.piece_at(Coord::new(5, 2)).unwrap().id, dog);
        assert!(board.piece_at(Coord::new(5, 1)).is_none());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new();
        let tiger = place(&mut board, PieceKind::Tiger, PlayerId::One, 0, 0);
        assert_eq!(
            attempt_move(&mut board, tiger, Coord::new(0, 9)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            attempt_move(&mut board, tiger, Coord::new(7, 0)),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_must_step_one_square() {
        let mut board = Board::new();
        let dog = place(&mut board, PieceKind::Dog, PlayerId::One, 5, 1);
        for target in [Coord::new(5, 1), Coord::new(4, 2), Coord::new(5, 3)] {
            assert_eq!(
                attempt_move(&mut board, dog, target),
                Err(MoveError::NotOrthogonalStep)
            );
        }
    }

    #[test]
    fn test_own_home_base_blocked_even_when_empty() {
        let mut board = Board::new();
        let cat = place(&mut board, PieceKind::Cat, PlayerId::One, 2, 0);
        assert_eq!(
            attempt_move(&mut board, cat, Coord::new(3, 0)),
            Err(MoveError::OwnHomeBaseBlocked)
        );
    }

    #[test]
    fn test_land_animals_stay_out_of_lakes() {
        let mut board = Board::new();
        let wolf = place(&mut board, PieceKind::Wolf, PlayerId::One, 1, 2);
        assert_eq!(
            attempt_move(&mut board, wolf, Coord::new(1, 3)),
            Err(MoveError::LakeEntryDenied {
                kind: PieceKind::Wolf
            })
        );
    }

    #[test]
    fn test_rat_swims() {
        let mut board = Board::new();
        let rat = place(&mut board, PieceKind::Rat, PlayerId::One, 1, 2);
        let report = attempt_move(&mut board, rat, Coord::new(1, 3)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::Moved);
        assert!(!report.jumped_lake);
        let report = attempt_move(&mut board, rat, Coord::new(1, 4)).unwrap();
        assert_eq!(report.landing, Coord::new(1, 4));
    }

    #[test]
    fn test_lion_leaps_lake_horizontally() {
        let mut board = Board::new();
        let lion = place(&mut board, PieceKind::Lion, PlayerId::One, 1, 2);
        let report = attempt_move(&mut board, lion, Coord::new(1, 3)).unwrap();
        assert!(report.jumped_lake);
        assert_eq!(report.landing, Coord::new(1, 6));
        assert_eq!(board.piece(lion).unwrap().coord, Coord::new(1, 6));
    }

    #[test]
    fn test_tiger_leaps_lake_vertically() {
        let mut board = Board::new();
        let tiger = place(&mut board, PieceKind::Tiger, PlayerId::Two, 0, 4);
        let report = attempt_move(&mut board, tiger, Coord::new(1, 4)).unwrap();
        assert_eq!(report.landing, Coord::new(3, 4));
    }

    #[test]
    fn test_leap_blocked_by_any_rat() {
        for rat_col in 3..=5 {
            for rat_owner in PlayerId::BOTH {
                let mut board = Board::new();
                let lion = place(&mut board, PieceKind::Lion, PlayerId::One, 1, 2);
                place(&mut board, PieceKind::Rat, rat_owner, 1, rat_col);
                assert_eq!(
                    attempt_move(&mut board, lion, Coord::new(1, 3)),
                    Err(MoveError::LakeJumpBlocked {
                        kind: PieceKind::Lion
                    })
                );
                assert_eq!(board.piece(lion).unwrap().coord, Coord::new(1, 2));
            }
        }
    }

    #[test]
    fn test_leap_captures_on_landing() {
        let mut board = Board::new();
        let tiger = place(&mut board, PieceKind::Tiger, PlayerId::One, 4, 2);
        let wolf = place(&mut board, PieceKind::Wolf, PlayerId::Two, 4, 6);
        let report = attempt_move(&mut board, tiger, Coord::new(4, 3)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::MovedWithCapture(PieceKind::Wolf));
        assert_eq!(report.captured, Some(wolf));
        assert!(board.piece(wolf).unwrap().captured);
    }

    #[test]
    fn test_leap_denied_by_stronger_defender() {
        let mut board = Board::new();
        let tiger = place(&mut board, PieceKind::Tiger, PlayerId::One, 4, 2);
        place(&mut board, PieceKind::Elephant, PlayerId::Two, 4, 6);
        assert_eq!(
            attempt_move(&mut board, tiger, Coord::new(4, 3)),
            Err(MoveError::CaptureDenied {
                attacker: PieceKind::Tiger,
                defender: PieceKind::Elephant
            })
        );
    }

    #[test]
    fn test_rat_in_lake_cannot_bite_land_animal() {
        let mut board = Board::new();
        let rat = place(&mut board, PieceKind::Rat, PlayerId::One, 1, 3);
        let elephant = place(&mut board, PieceKind::Elephant, PlayerId::Two, 1, 2);
        assert_eq!(
            attempt_move(&mut board, rat, Coord::new(1, 2)),
            Err(MoveError::RatLakeCaptureDenied)
        );
        // Weakness doesn't help from the water either.
        board.piece_mut(elephant).unwrap().weakened = true;
        assert_eq!(
            attempt_move(&mut board, rat, Coord::new(1, 2)),
            Err(MoveError::RatLakeCaptureDenied)
        );
    }

    #[test]
    fn test_rat_versus_rat_across_shore() {
        let mut board = Board::new();
        let land_rat = place(&mut board, PieceKind::Rat, PlayerId::One, 1, 2);
        let lake_rat = place(&mut board, PieceKind::Rat, PlayerId::Two, 1, 3);
        let report = attempt_move(&mut board, lake_rat, Coord::new(1, 2)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::MovedWithCapture(PieceKind::Rat));
        assert_eq!(report.captured, Some(land_rat));
    }

    #[test]
    fn test_weakened_rat_on_land_cannot_bite_rat() {
        let mut board = Board::new();
        let rat = place(&mut board, PieceKind::Rat, PlayerId::Two, 2, 1);
        place(&mut board, PieceKind::Rat, PlayerId::One, 2, 2);
        board.piece_mut(rat).unwrap().weakened = true;
        assert_eq!(
            attempt_move(&mut board, rat, Coord::new(2, 2)),
            Err(MoveError::CaptureDenied {
                attacker: PieceKind::Rat,
                defender: PieceKind::Rat
            })
        );
        assert_eq!(board.piece(rat).unwrap().coord, Coord::new(2, 1));
    }

    #[test]
    fn test_weakened_rat_on_land_cannot_bite_into_lake() {
        let mut board = Board::new();
        let rat = place(&mut board, PieceKind::Rat, PlayerId::Two, 2, 2);
        place(&mut board, PieceKind::Rat, PlayerId::One, 2, 3);
        board.piece_mut(rat).unwrap().weakened = true;
        assert_eq!(
            attempt_move(&mut board, rat, Coord::new(2, 3)),
            Err(MoveError::CaptureDenied {
                attacker: PieceKind::Rat,
                defender: PieceKind::Rat
            })
        );
    }

    #[test]
    fn test_rat_in_lake_bites_rat_on_land() {
        let mut board = Board::new();
        let swimmer = place(&mut board, PieceKind::Rat, PlayerId::Two, 2, 3);
        let walker = place(&mut board, PieceKind::Rat, PlayerId::One, 2, 2);
        let report = attempt_move(&mut board, swimmer, Coord::new(2, 2)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::MovedWithCapture(PieceKind::Rat));
        assert_eq!(report.captured, Some(walker));
    }

    #[test]
    fn test_rat_takes_elephant_on_land() {
        let mut board = Board::new();
        let rat = place(&mut board, PieceKind::Rat, PlayerId::One, 6, 2);
        place(&mut board, PieceKind::Elephant, PlayerId::Two, 6, 3);
        let report = attempt_move(&mut board, rat, Coord::new(6, 3)).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::MovedWithCapture(PieceKind::Elephant)
        );
    }

    #[test]
    fn test_friendly_square_blocked() {
        let mut board = Board::new();
        let lion = place(&mut board, PieceKind::Lion, PlayerId::One, 6, 0);
        place(&mut board, PieceKind::Dog, PlayerId::One, 5, 0);
        assert_eq!(
            attempt_move(&mut board, lion, Coord::new(5, 0)),
            Err(MoveError::OccupiedByFriendly {
                defender: PieceKind::Dog
            })
        );
    }

    #[test]
    fn test_enemy_trap_weakens_and_next_move_clears() {
        let mut board = Board::new();
        let wolf = place(&mut board, PieceKind::Wolf, PlayerId::Two, 1, 0);
        let report = attempt_move(&mut board, wolf, Coord::new(2, 0)).unwrap();
        assert!(report.weakened);
        assert!(board.piece(wolf).unwrap().weakened);

        let report = attempt_move(&mut board, wolf, Coord::new(2, 1)).unwrap();
        assert!(!report.weakened);
        assert!(!board.piece(wolf).unwrap().weakened);
    }

    #[test]
    fn test_own_trap_does_not_weaken() {
        let mut board = Board::new();
        let wolf = place(&mut board, PieceKind::Wolf, PlayerId::One, 1, 0);
        let report = attempt_move(&mut board, wolf, Coord::new(2, 0)).unwrap();
        assert!(!report.weakened);
    }

    #[test]
    fn test_weakened_piece_falls_to_anyone() {
        let mut board = Board::new();
        let cat = place(&mut board, PieceKind::Cat, PlayerId::One, 2, 1);
        let lion = place(&mut board, PieceKind::Lion, PlayerId::Two, 1, 0);
        attempt_move(&mut board, lion, Coord::new(2, 0)).unwrap();

        let report = attempt_move(&mut board, cat, Coord::new(2, 0)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::MovedWithCapture(PieceKind::Lion));
    }

    #[test]
    fn test_weakened_attacker_cannot_capture() {
        let mut board = Board::new();
        let elephant = place(&mut board, PieceKind::Elephant, PlayerId::Two, 2, 0);
        place(&mut board, PieceKind::Cat, PlayerId::One, 1, 0);
        board.piece_mut(elephant).unwrap().weakened = true;
        assert_eq!(
            attempt_move(&mut board, elephant, Coord::new(1, 0)),
            Err(MoveError::CaptureDenied {
                attacker: PieceKind::Elephant,
                defender: PieceKind::Cat
            })
        );
    }

    #[test]
    fn test_enemy_home_base_ends_game() {
        let mut board = Board::new();
        let dog = place(&mut board, PieceKind::Dog, PlayerId::One, 2, 8);
        let report = attempt_move(&mut board, dog, Coord::new(3, 8)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::MovedOntoEnemyHomeBase);
        assert!(!report.weakened);
        assert_eq!(
            board.cell(Coord::new(3, 8)).unwrap().home_owner,
            Some(PlayerId::One)
        );
    }

    #[test]
    fn test_rejection_leaves_board_untouched() {
        let mut board = Board::new();
        let cat = place(&mut board, PieceKind::Cat, PlayerId::One, 1, 1);
        place(&mut board, PieceKind::Dog, PlayerId::Two, 1, 2);
        let before = board.clone();
        assert!(attempt_move(&mut board, cat, Coord::new(1, 2)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_captured_piece_cannot_move() {
        let mut board = Board::new();
        let cat = place(&mut board, PieceKind::Cat, PlayerId::One, 1, 1);
        board.capture(Coord::new(1, 1));
        assert_eq!(
            attempt_move(&mut board, cat, Coord::new(1, 2)),
            Err(MoveError::EmptySourceCell)
        );
    }

    #[test]
    fn test_legal_moves_from_corner() {
        let mut board = Board::new();
        let tiger = place(&mut board, PieceKind::Tiger, PlayerId::One, 0, 0);
        let mut landings: Vec<Coord> = legal_moves(&board, tiger)
            .into_iter()
            .map(|plan| plan.landing)
            .collect();
        landings.sort();
        assert_eq!(landings, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_legal_moves_include_leap() {
        let mut board = Board::new();
        let lion = place(&mut board, PieceKind::Lion, PlayerId::One, 3, 4);
        let plans = legal_moves(&board, lion);
        assert_eq!(plans.len(), 4);
        assert!(plans
            .iter()
            .any(|p| p.jumped_lake && p.landing == Coord::new(0, 4)));
        assert!(plans
            .iter()
            .any(|p| p.jumped_lake && p.landing == Coord::new(6, 4)));
    }
}
