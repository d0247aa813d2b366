//! Line-window extraction around the last-played cell.
//!
//! Each window reaches at most two cells either side of the played cell
//! and is clamped to the board, so cells near an edge or corner produce
//! shorter windows. No window ever indexes outside the board.

use super::super::{Board, Cell};
use tracing::instrument;

/// How far a window reaches either side of the played cell.
const REACH: usize = 2;

/// Row and column of a 0-based index.
fn coordinates(board: &Board, index: usize) -> (usize, usize) {
    let edge = board.edge_size();
    let row = index / edge;
    (row, index - row * edge)
}

fn collect(board: &Board, indices: impl IntoIterator<Item = usize>) -> Vec<Cell> {
    indices
        .into_iter()
        .filter_map(|index| board.cell(index))
        .collect()
}

/// Cells of the played cell's row, within two columns of it.
#[instrument(skip(board), fields(edge_size = board.edge_size()))]
pub fn horizontal(board: &Board, index: usize) -> Vec<Cell> {
    let edge = board.edge_size();
    let (row, _) = coordinates(board, index);

    let start = (row * edge).max(index.saturating_sub(REACH));
    let end = ((row + 1) * edge).min(index + REACH + 1);
    collect(board, start..end)
}

/// Cells of the played cell's column, within two rows of it.
#[instrument(skip(board), fields(edge_size = board.edge_size()))]
pub fn vertical(board: &Board, index: usize) -> Vec<Cell> {
    let edge = board.edge_size();
    let (row, _) = coordinates(board, index);

    let first = if row >= REACH {
        index - REACH * edge
    } else {
        index - row * edge
    };
    let last = if row + REACH < edge {
        index + REACH * edge
    } else {
        index + (edge - row - 1) * edge
    };
    collect(board, (first..=last).step_by(edge))
}

/// NW→SE diagonal through the played cell, points `(row+k, col+k)`.
#[instrument(skip(board), fields(edge_size = board.edge_size()))]
pub fn diagonal_down(board: &Board, index: usize) -> Vec<Cell> {
    let edge = board.edge_size() as isize;
    let (row, col) = coordinates(board, index);
    let (row, col) = (row as isize, col as isize);
    let reach = REACH as isize;

    let points = (-reach..=reach).filter_map(|k| {
        let (r, c) = (row + k, col + k);
        let in_bounds = (0..edge).contains(&r) && (0..edge).contains(&c);
        in_bounds.then(|| (r * edge + c) as usize)
    });
    collect(board, points)
}

/// SW→NE diagonal through the played cell, points `(row+k, col-k)`.
#[instrument(skip(board), fields(edge_size = board.edge_size()))]
pub fn diagonal_up(board: &Board, index: usize) -> Vec<Cell> {
    let edge = board.edge_size() as isize;
    let (row, col) = coordinates(board, index);
    let (row, col) = (row as isize, col as isize);
    let reach = REACH as isize;

    let points = (-reach..=reach).filter_map(|k| {
        let (r, c) = (row + k, col - k);
        let in_bounds = (0..edge).contains(&r) && (0..edge).contains(&c);
        in_bounds.then(|| (r * edge + c) as usize)
    });
    collect(board, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(window: &[Cell]) -> Vec<usize> {
        window
            .iter()
            .map(|cell| match cell {
                Cell::Empty(n) => *n,
                Cell::Marked(m) => panic!("unexpected marker {m}"),
            })
            .collect()
    }

    #[test]
    fn test_horizontal_3x3_stays_in_row() {
        let board = Board::new(3).unwrap();
        for index in 0..3 {
            assert_eq!(numbers(&horizontal(&board, index)), vec![1, 2, 3]);
        }
        for index in 3..6 {
            assert_eq!(numbers(&horizontal(&board, index)), vec![4, 5, 6]);
        }
        for index in 6..9 {
            assert_eq!(numbers(&horizontal(&board, index)), vec![7, 8, 9]);
        }
    }

    #[test]
    fn test_horizontal_8x8_first_row() {
        let board = Board::new(8).unwrap();
        let expected: [&[usize]; 8] = [
            &[1, 2, 3],
            &[1, 2, 3, 4],
            &[1, 2, 3, 4, 5],
            &[2, 3, 4, 5, 6],
            &[3, 4, 5, 6, 7],
            &[4, 5, 6, 7, 8],
            &[5, 6, 7, 8],
            &[6, 7, 8],
        ];
        for (index, want) in expected.iter().enumerate() {
            assert_eq!(numbers(&horizontal(&board, index)), want.to_vec());
        }
    }

    #[test]
    fn test_horizontal_8x8_does_not_wrap() {
        let board = Board::new(8).unwrap();
        // First cell of the second row.
        assert_eq!(numbers(&horizontal(&board, 8)), vec![9, 10, 11]);
        // Last cell of the second row.
        assert_eq!(numbers(&horizontal(&board, 15)), vec![14, 15, 16]);
    }

    #[test]
    fn test_vertical_8x8_interior() {
        let board = Board::new(8).unwrap();
        assert_eq!(numbers(&vertical(&board, 18)), vec![3, 11, 19, 27, 35]);
    }

    #[test]
    fn test_vertical_8x8_clamped() {
        let board = Board::new(8).unwrap();
        assert_eq!(numbers(&vertical(&board, 2)), vec![3, 11, 19]);
        assert_eq!(numbers(&vertical(&board, 10)), vec![3, 11, 19, 27]);
        assert_eq!(numbers(&vertical(&board, 58)), vec![43, 51, 59]);
        assert_eq!(numbers(&vertical(&board, 50)), vec![35, 43, 51, 59]);
    }

    #[test]
    fn test_vertical_3x3_full_column() {
        let board = Board::new(3).unwrap();
        for index in [1, 4, 7] {
            assert_eq!(numbers(&vertical(&board, index)), vec![2, 5, 8]);
        }
    }

    #[test]
    fn test_diagonals_3x3_corner() {
        let board = Board::new(3).unwrap();
        assert_eq!(numbers(&diagonal_down(&board, 0)), vec![1, 5, 9]);
        assert_eq!(numbers(&diagonal_up(&board, 0)), vec![1]);
    }

    #[test]
    fn test_diagonals_3x3_center() {
        let board = Board::new(3).unwrap();
        assert_eq!(numbers(&diagonal_down(&board, 4)), vec![1, 5, 9]);
        assert_eq!(numbers(&diagonal_up(&board, 4)), vec![3, 5, 7]);
    }

    #[test]
    fn test_diagonals_8x8_interior_and_edge() {
        let board = Board::new(8).unwrap();
        // Row 3, column 3.
        assert_eq!(numbers(&diagonal_down(&board, 27)), vec![10, 19, 28, 37, 46]);
        assert_eq!(numbers(&diagonal_up(&board, 27)), vec![14, 21, 28, 35, 42]);
        // Row 0, column 7.
        assert_eq!(numbers(&diagonal_down(&board, 7)), vec![8]);
        assert_eq!(numbers(&diagonal_up(&board, 7)), vec![8, 15, 22]);
    }
}
