//! Draw detection for grid tic-tac-toe.

use super::super::Board;
use super::win::LineCheck;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board), fields(edge_size = board.edge_size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board after a move that won nothing.
///
/// The win check must come first: filling the last cell with a winning
/// move is a win, not a draw.
pub fn is_draw(board: &Board, last: LineCheck) -> bool {
    !last.is_win() && is_full(board)
}
