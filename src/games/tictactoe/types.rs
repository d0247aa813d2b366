//! Core domain types for grid tic-tac-toe.

use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, instrument};

/// Smallest edge size that can hold a line of three.
pub const MIN_EDGE_SIZE: usize = 3;

/// Largest edge size a board may be created with.
pub const MAX_EDGE_SIZE: usize = 1024;

/// Marker placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Marker {
    /// First player's mark (moves first).
    X,
    /// Second player's mark.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Returns the character drawn on the board for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl TryFrom<char> for Marker {
    type Error = MarkerError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'X' => Ok(Marker::X),
            'O' => Ok(Marker::O),
            _ => Err(MarkerError::Unknown { symbol }),
        }
    }
}

/// Raw marker symbol outside the two defined variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MarkerError {
    /// The symbol is neither `X` nor `O`.
    #[display("Unknown marker {symbol:?} (expected 'X' or 'O')")]
    Unknown {
        /// Offending symbol.
        symbol: char,
    },
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unplayed cell, tagged with its 1-based number.
    Empty(usize),
    /// Cell holding a marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty(_) => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Returns true if the cell holds a marker.
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Marked(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty(number) => fmt::Display::fmt(number, f),
            Cell::Marked(marker) => fmt::Display::fmt(&marker.symbol(), f),
        }
    }
}

/// Errors raised by board construction and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Edge size too small to ever hold a line of three, or too large to
    /// allocate.
    #[display("Edge size {edge_size} is out of range (must be 3 to 1024)")]
    InvalidConfiguration {
        /// Requested edge size.
        edge_size: usize,
    },

    /// Index outside the board.
    #[display("Cell index {index} is out of range (board has {len} cells)")]
    IndexOutOfRange {
        /// Requested 0-based index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// Cell already holds a marker.
    #[display("Cell index {index} is already occupied")]
    CellOccupied {
        /// 0-based index of the occupied cell.
        index: usize,
    },
}

/// Square board of `edge_size²` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    edge_size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with cells numbered `1..=edge_size²`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] when `edge_size` is outside
    /// [`MIN_EDGE_SIZE`]`..=`[`MAX_EDGE_SIZE`].
    #[instrument]
    pub fn new(edge_size: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidConfiguration { edge_size };
        if !(MIN_EDGE_SIZE..=MAX_EDGE_SIZE).contains(&edge_size) {
            return Err(invalid);
        }

        let len = edge_size.checked_mul(edge_size).ok_or(invalid)?;
        debug!(len, "Creating board");
        Ok(Self {
            edge_size,
            cells: (1..=len).map(Cell::Empty).collect(),
        })
    }

    /// Number of cells along one side.
    pub fn edge_size(&self) -> usize {
        self.edge_size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the board has no cells; see [`Board::len`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `index` addresses a cell on this board.
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Gets the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true iff the cell at `index` holds a marker.
    ///
    /// Out-of-range indices report `false`; check [`Board::contains`] first.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_marked)
    }

    /// Places `marker` into the empty cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] or [`BoardError::CellOccupied`]
    /// when the placement precondition does not hold.
    #[instrument(skip(self), fields(edge_size = self.edge_size))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), BoardError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })?;

        if cell.is_marked() {
            return Err(BoardError::CellOccupied { index });
        }

        *cell = Cell::Marked(marker);
        Ok(())
    }

    /// Returns true iff every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_marked())
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_marked()).count()
    }

    /// 0-based indices of the cells still open for play.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_marked())
            .map(|(index, _)| index)
            .collect()
    }
}

/// Renders the board as a grid: each cell centred in five columns, cells
/// separated by `|`, rows separated by a dashed line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .cells
            .chunks(self.edge_size)
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{:^5}", cell.to_string()))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{}", "-".repeat(row.len()))?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
