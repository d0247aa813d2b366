//! Strictly Grid library - tic-tac-toe on boards of any size.
//!
//! Players alternately mark cells on an `N × N` board (`N ≥ 3`). A game is
//! won by three markers in an unbroken horizontal, vertical or diagonal
//! line, and drawn when the board fills first.
//!
//! # Architecture
//!
//! - **Board**: cells in row-major order, each empty (showing its number)
//!   or holding a marker
//! - **Rules**: bounded line windows around the last move and the
//!   run-of-three test
//! - **Session**: typestate game phases with contract-checked moves
//! - **Console**: prompts, input validation and board rendering
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameResult, GameSetup, Marker, Move};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let game = GameSetup::new(5)?.start();
//! match game.make_move(Move::new(Marker::X, 12))? {
//!     GameResult::InProgress(game) => assert_eq!(game.to_move(), Marker::O),
//!     GameResult::Finished(_) => unreachable!(),
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front-end
pub use console::{Console, ConsoleError, Players, SessionEnd};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardError, Cell, Direction, GameFinished, GameInProgress, GameResult, GameSetup,
    LineCheck, MAX_EDGE_SIZE, MIN_EDGE_SIZE, Marker, MarkerError, Move, MoveError, Outcome,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::{
    AlternatingTurnInvariant, CellIsEmpty, Contract, HistoryConsistentInvariant, IndexOnBoard,
    Invariant, InvariantSet, InvariantViolation, LegalMove, MarkersTurn, MonotonicBoardInvariant,
    MoveContract, SessionInvariants,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;
