//! Win detection around the last-played cell.
//!
//! Only the four windows through the played cell are examined, so the cost
//! of a check does not grow with the board.

use super::super::{Board, BoardError, Cell, Marker};
use super::window;
use tracing::{debug, instrument};

/// Length of a winning run.
pub const RUN_LENGTH: usize = 3;

/// Direction of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Direction {
    /// Along a row.
    #[strum(to_string = "horizontal")]
    Horizontal,
    /// Along a column.
    #[strum(to_string = "vertical")]
    Vertical,
    /// Along either diagonal.
    #[strum(to_string = "diagonal")]
    Diagonal,
}

/// Classification of the board after one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCheck {
    /// The move completed no run of three.
    NoWin,
    /// The move completed a run of three in the given direction.
    Win(Direction),
}

impl LineCheck {
    /// Returns true for [`LineCheck::Win`].
    pub fn is_win(self) -> bool {
        matches!(self, LineCheck::Win(_))
    }
}

/// Returns true if `window` holds three consecutive `marker` cells.
///
/// Windows shorter than three cells never win.
pub fn check_vector(window: &[Cell], marker: Marker) -> bool {
    if window.len() < RUN_LENGTH {
        return false;
    }

    window
        .windows(RUN_LENGTH)
        .any(|run| run.iter().all(|cell| *cell == Cell::Marked(marker)))
}

/// Classifies the board after `marker` was played at `index` (0-based).
///
/// Directions are tried in the order horizontal, vertical, NW→SE diagonal,
/// SW→NE diagonal; the first winning direction is reported.
///
/// # Errors
///
/// Returns [`BoardError::IndexOutOfRange`] when `index` is not on the board.
#[instrument(skip(board), fields(edge_size = board.edge_size()))]
pub fn evaluate(board: &Board, index: usize, marker: Marker) -> Result<LineCheck, BoardError> {
    if !board.contains(index) {
        return Err(BoardError::IndexOutOfRange {
            index,
            len: board.len(),
        });
    }

    let candidates = [
        (Direction::Horizontal, window::horizontal(board, index)),
        (Direction::Vertical, window::vertical(board, index)),
        (Direction::Diagonal, window::diagonal_down(board, index)),
        (Direction::Diagonal, window::diagonal_up(board, index)),
    ];

    for (direction, cells) in candidates {
        if check_vector(&cells, marker) {
            debug!(%direction, "Winning run found");
            return Ok(LineCheck::Win(direction));
        }
    }

    Ok(LineCheck::NoWin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Marker::{O, X};

    fn cells(markers: &[Marker]) -> Vec<Cell> {
        markers.iter().copied().map(Cell::Marked).collect()
    }

    fn board_with(edge_size: usize, marks: &[(usize, Marker)]) -> Board {
        let mut board = Board::new(edge_size).unwrap();
        for &(index, marker) in marks {
            board.place(index, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_short_vectors_never_win() {
        assert!(!check_vector(&[], X));
        assert!(!check_vector(&cells(&[X]), X));
        assert!(!check_vector(&cells(&[X, X]), X));
    }

    #[test]
    fn test_vectors_without_run() {
        assert!(!check_vector(&cells(&[X, O, X]), X));
        assert!(!check_vector(&cells(&[X, X, O, X]), X));
        assert!(!check_vector(&cells(&[O, O, X, O, O]), O));
    }

    #[test]
    fn test_vectors_with_run() {
        assert!(check_vector(&cells(&[X, X, X]), X));
        assert!(check_vector(&cells(&[O, O, O]), O));
        assert!(check_vector(&cells(&[O, O, O, X, X]), O));
        assert!(check_vector(&cells(&[X, X, O, O, O]), O));
        assert!(check_vector(&cells(&[X, O, O, O, X]), O));
    }

    #[test]
    fn test_run_of_other_marker_does_not_count() {
        assert!(!check_vector(&cells(&[X, X, X]), O));
    }

    #[test]
    fn test_empty_cells_break_run() {
        let window = [Cell::Marked(X), Cell::Empty(2), Cell::Marked(X), Cell::Marked(X)];
        assert!(!check_vector(&window, X));
    }

    #[test]
    fn test_evaluate_horizontal() {
        let board = board_with(3, &[(0, X), (1, X), (2, X), (4, O), (8, O)]);
        assert_eq!(evaluate(&board, 2, X), Ok(LineCheck::Win(Direction::Horizontal)));
    }

    #[test]
    fn test_evaluate_vertical() {
        let board = board_with(5, &[(7, O), (12, O), (17, O)]);
        assert_eq!(evaluate(&board, 12, O), Ok(LineCheck::Win(Direction::Vertical)));
    }

    #[test]
    fn test_evaluate_both_diagonals() {
        let down = board_with(6, &[(7, X), (14, X), (21, X)]);
        assert_eq!(evaluate(&down, 7, X), Ok(LineCheck::Win(Direction::Diagonal)));

        let up = board_with(6, &[(10, O), (15, O), (20, O)]);
        assert_eq!(evaluate(&up, 20, O), Ok(LineCheck::Win(Direction::Diagonal)));
    }

    #[test]
    fn test_evaluate_no_wrap_across_rows() {
        // Cells 3, 4 (end of row 0) and 5 (start of row 1) on a 5x5 board.
        let board = board_with(5, &[(3, X), (4, X), (5, X)]);
        assert_eq!(evaluate(&board, 5, X), Ok(LineCheck::NoWin));
        assert_eq!(evaluate(&board, 4, X), Ok(LineCheck::NoWin));
    }

    #[test]
    fn test_evaluate_run_far_from_move_ignored() {
        // Run of three in row 0 of a 7x7 board; move in the opposite corner.
        let board = board_with(7, &[(0, X), (1, X), (2, X), (48, X)]);
        assert_eq!(evaluate(&board, 48, X), Ok(LineCheck::NoWin));
    }

    #[test]
    fn test_evaluate_reports_horizontal_first() {
        // Move at 4 completes row 1 and column 1 at once.
        let board = board_with(3, &[(3, X), (4, X), (5, X), (1, X), (7, X)]);
        assert_eq!(evaluate(&board, 4, X), Ok(LineCheck::Win(Direction::Horizontal)));
    }

    #[test]
    fn test_evaluate_out_of_range() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            evaluate(&board, 9, X),
            Err(BoardError::IndexOutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_with(4, &[(0, O), (5, O), (10, O)]);
        let first = evaluate(&board, 10, O);
        assert_eq!(first, evaluate(&board, 10, O));
        assert_eq!(first, Ok(LineCheck::Win(Direction::Diagonal)));
    }
}
