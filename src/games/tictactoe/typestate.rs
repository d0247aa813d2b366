//! Phase-specific typestate structs for a game session.
//!
//! Each phase is its own type with phase-specific fields. A `GameFinished`
//! always has an outcome, and only a `GameInProgress` accepts moves.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use super::rules::{self, LineCheck};
use super::{Board, BoardError, Marker};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - board sized, no moves yet.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game with an empty `edge_size × edge_size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] for edge sizes outside
    /// `3..=1024`.
    #[instrument]
    pub fn new(edge_size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(edge_size)?,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game; X always moves first.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        info!(edge_size = self.board.edge_size(), "Game started");
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: Marker::X,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) to_move: Marker,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// The move is checked for a win before the board is checked for
    /// fullness, so a winning last move is never reported as a draw.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (`LegalMove`)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the index is off the board, the cell is
    /// taken, or the marker is out of turn. `self` is consumed either way;
    /// clone first to keep playing after a rejected move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut game = self;
        game.board.place(action.index, action.marker)?;
        game.history.push(action);

        let check = rules::evaluate(&game.board, action.index, action.marker)?;
        if let LineCheck::Win(direction) = check {
            info!(marker = %action.marker, %direction, "Game won");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner {
                    marker: action.marker,
                    direction,
                },
            }));
        }

        if rules::is_draw(&game.board, check) {
            info!("Game drawn");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = game.to_move.opponent();
        debug!(next = %game.to_move, moves = game.history.len(), "Turn passed");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Returns the marker whose turn it is.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the 0-based indices still open for play.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.board.empty_indices()
    }

    /// Replays moves on a fresh board of the given size.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error, or a board configuration
    /// error for an invalid edge size.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(edge_size: usize, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(edge_size)?.start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts with an empty board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> Result<GameSetup, BoardError> {
        GameSetup::new(self.board.edge_size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::rules::Direction;

    #[test]
    fn test_restart_keeps_edge_size() {
        let moves = [
            Move::new(Marker::X, 0),
            Move::new(Marker::O, 5),
            Move::new(Marker::X, 1),
            Move::new(Marker::O, 6),
            Move::new(Marker::X, 2),
        ];
        let GameResult::Finished(game) = GameInProgress::replay(4, &moves).unwrap() else {
            panic!("Expected finished game");
        };
        assert_eq!(
            game.outcome(),
            &Outcome::Winner {
                marker: Marker::X,
                direction: Direction::Horizontal
            }
        );

        let setup = game.restart().unwrap();
        assert_eq!(setup.board().edge_size(), 4);
        assert_eq!(setup.board().marked_count(), 0);
    }

    #[test]
    fn test_winning_last_cell_reports_win() {
        // X O X / O X O / O X _ ; X plays 9 completing the main diagonal.
        let moves = [
            Move::new(Marker::X, 0),
            Move::new(Marker::O, 1),
            Move::new(Marker::X, 2),
            Move::new(Marker::O, 3),
            Move::new(Marker::X, 4),
            Move::new(Marker::O, 5),
            Move::new(Marker::X, 7),
            Move::new(Marker::O, 6),
            Move::new(Marker::X, 8),
        ];
        let GameResult::Finished(game) = GameInProgress::replay(3, &moves).unwrap() else {
            panic!("Expected finished game");
        };
        assert!(game.board().is_full());
        assert_eq!(game.outcome().winner(), Some(Marker::X));
    }

    #[test]
    fn test_valid_moves_shrink() {
        let game = GameSetup::new(3).unwrap().start();
        assert_eq!(game.valid_moves().len(), 9);

        let GameResult::InProgress(game) = game.make_move(Move::new(Marker::X, 4)).unwrap() else {
            panic!("Expected in-progress game");
        };
        assert_eq!(game.valid_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }
}
