//! First-class move types.
//!
//! A move is the intent to place a marker; it is validated against the
//! session before the board is touched.

use super::{BoardError, Marker};
use tracing::instrument;

/// A marker placed at a 0-based cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Marker being placed.
    pub marker: Marker,
    /// 0-based cell index.
    pub index: usize,
}

impl Move {
    /// Creates a move from a 0-based index.
    #[instrument]
    pub fn new(marker: Marker, index: usize) -> Self {
        Self { marker, index }
    }

    /// Creates a move from the 1-based cell number shown on the board.
    ///
    /// Returns `None` for `0`, which names no cell.
    #[instrument]
    pub fn from_cell_number(marker: Marker, number: usize) -> Option<Self> {
        number.checked_sub(1).map(|index| Self::new(marker, index))
    }

    /// Returns the marker being placed.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the 0-based index.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.marker, self.index + 1)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MoveError {
    /// The board rejected the placement.
    #[display("{_0}")]
    Board(BoardError),

    /// The marker does not belong to the player whose turn it is.
    #[display("It's not {marker}'s turn")]
    #[from(ignore)]
    WrongMarker {
        /// Marker that attempted to move.
        marker: Marker,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {description}")]
    #[from(ignore)]
    InvariantViolation {
        /// Violated invariants.
        description: String,
    },
}
