//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::BoardError;
use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index addresses a cell on the board.
pub struct IndexOnBoard;

impl IndexOnBoard {
    /// Checks the move's index against the board size.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        let board = game.board();
        if board.contains(mov.index) {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange {
                index: mov.index,
                len: board.len(),
            }
            .into())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the target cell is unmarked.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_occupied(mov.index) {
            Err(BoardError::CellOccupied { index: mov.index }.into())
        } else {
            Ok(())
        }
    }
}

/// Precondition: it is the marker's turn.
pub struct MarkersTurn;

impl MarkersTurn {
    /// Checks the move's marker against the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.marker != game.to_move() {
            Err(MoveError::WrongMarker { marker: mov.marker })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: index on board, cell empty, marker in turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        IndexOnBoard::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        MarkersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Board is monotonic (replaying history reproduces it)
/// - Markers alternate starting with X
/// - Marked cells match history length
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).inspect_err(|e| {
            warn!(error = %e, %action, "Move rejected");
        })
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Postcondition failed");
            MoveError::InvariantViolation { description }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameResult, GameSetup, Marker};

    fn new_game() -> GameInProgress {
        GameSetup::new(3).unwrap().start()
    }

    #[test]
    fn test_precondition_empty_cell() {
        let game = new_game();
        assert!(MoveContract::pre(&game, &Move::new(Marker::X, 4)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = new_game();
        let Ok(GameResult::InProgress(game)) = game.make_move(Move::new(Marker::X, 4)) else {
            panic!("Expected in-progress game");
        };

        assert_eq!(
            MoveContract::pre(&game, &Move::new(Marker::O, 4)),
            Err(MoveError::Board(BoardError::CellOccupied { index: 4 }))
        );
    }

    #[test]
    fn test_precondition_off_board() {
        let game = new_game();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Marker::X, 9)),
            Err(MoveError::Board(BoardError::IndexOutOfRange { index: 9, len: 9 }))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = new_game();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Marker::O, 4)),
            Err(MoveError::WrongMarker { marker: Marker::O })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = new_game();
        let Ok(GameResult::InProgress(after)) = game.clone().make_move(Move::new(Marker::X, 4))
        else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = new_game();
        let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(Move::new(Marker::X, 4))
        else {
            panic!("Expected in-progress game");
        };

        after.board.place(0, Marker::O).unwrap();
        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation { .. })
        ));
    }
}
