//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board of the same
/// size reproduces the current board.
///
/// A cell overwritten after it was marked, or marked without a move,
/// breaks the replay.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().edge_size()) else {
            return false;
        };

        for mov in game.history() {
            if reconstructed.place(mov.index, mov.marker).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
