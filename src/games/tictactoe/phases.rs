//! Terminal outcomes of a game.

use super::Marker;
use super::rules::Direction;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A player completed a run of three.
    Winner {
        /// Marker of the winning player.
        marker: Marker,
        /// Direction of the winning run.
        direction: Direction,
    },
    /// The board filled with no run of three.
    Draw,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner { marker, .. } => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { marker, direction } => {
                write!(f, "Player {} wins ({})", marker, direction)
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
