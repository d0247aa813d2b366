//! Grid tic-tac-toe: board model, win detection and game sessions.

mod action;
mod contracts;
mod invariants;
mod phases;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, IndexOnBoard, LegalMove, MarkersTurn, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, SessionInvariants,
};
pub use phases::Outcome;
pub use rules::{Direction, LineCheck};
pub use types::{Board, BoardError, Cell, MAX_EDGE_SIZE, MIN_EDGE_SIZE, Marker, MarkerError};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
