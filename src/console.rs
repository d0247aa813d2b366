//! Console front-end: player setup, turn prompts and board redraws.
//!
//! All raw text handling lives here. The engine only ever receives indices
//! that are on the board and point at empty cells.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    Board, BoardError, GameResult, GameSetup, Marker, Move, MoveError, Outcome,
};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Names of the two players, keyed by marker.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Players {
    /// Player using `X`.
    x: String,
    /// Player using `O`.
    o: String,
}

impl Players {
    /// Creates the pair of players.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Name of the player using `marker`.
    pub fn name(&self, marker: Marker) -> &str {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a win or a draw.
    Finished(Outcome),
    /// Input closed before the game ended.
    Abandoned,
}

/// Errors that end a console session.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {_0}")]
    Io(io::Error),

    /// The configured board could not be created.
    #[display("Cannot set up board: {_0}")]
    Board(BoardError),

    /// A validated move was rejected by the engine.
    #[display("Move rejected: {_0}")]
    Move(MoveError),
}

/// Interactive game over a line-oriented reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator; `None` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts until a non-blank name is entered.
    #[instrument(skip(self))]
    pub fn ask_name(&mut self, player_number: usize) -> io::Result<Option<String>> {
        loop {
            writeln!(self.output, "Enter name for Player {}: ", player_number)?;
            write!(self.output, ">> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let name = line.trim();
            if !name.is_empty() {
                return Ok(Some(name.to_string()));
            }
        }
    }

    /// Resolves both player names from config, prompting for missing ones.
    #[instrument(skip(self, config))]
    pub fn players(&mut self, config: &GameConfig) -> io::Result<Option<Players>> {
        let x = match config.player_x() {
            Some(name) => name.clone(),
            None => match self.ask_name(1)? {
                Some(name) => name,
                None => return Ok(None),
            },
        };
        let o = match config.player_o() {
            Some(name) => name.clone(),
            None => match self.ask_name(2)? {
                Some(name) => name,
                None => return Ok(None),
            },
        };
        Ok(Some(Players::new(x, o)))
    }

    /// Clears the terminal if enabled, then draws the board.
    pub fn redraw(&mut self, board: &Board) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.output, "{}", board)?;
        self.output.flush()
    }

    /// Asks `name` for a cell until an empty cell on the board is chosen.
    ///
    /// Returns the 0-based index, or `None` once input is closed.
    #[instrument(skip(self, board))]
    pub fn ask_move(
        &mut self,
        board: &Board,
        name: &str,
        marker: Marker,
    ) -> io::Result<Option<usize>> {
        loop {
            writeln!(
                self.output,
                "{}, choose a box to place an '{}' into:",
                name,
                marker.symbol()
            )?;
            write!(self.output, ">> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let index = match line.trim().parse::<usize>() {
                Ok(number) if (1..=board.len()).contains(&number) => number - 1,
                _ => {
                    debug!(input = %line, "Rejected input");
                    writeln!(
                        self.output,
                        "Please enter a number between 1 and {}",
                        board.len()
                    )?;
                    continue;
                }
            };

            if board.is_occupied(index) {
                writeln!(
                    self.output,
                    "This box is already played, please select a new one"
                )?;
                continue;
            }

            return Ok(Some(index));
        }
    }

    /// Plays one full game with the given configuration.
    #[instrument(skip(self, config), fields(edge_size = config.edge_size()))]
    pub fn play(&mut self, config: &GameConfig) -> Result<SessionEnd, ConsoleError> {
        let Some(players) = self.players(config)? else {
            warn!("Input closed during setup");
            return Ok(SessionEnd::Abandoned);
        };

        let mut game = GameSetup::new(*config.edge_size())?.start();
        self.redraw(game.board())?;

        loop {
            let marker = game.to_move();
            let name = players.name(marker).to_string();

            let Some(index) = self.ask_move(game.board(), &name, marker)? else {
                warn!(player = %name, "Input closed mid-game");
                return Ok(SessionEnd::Abandoned);
            };

            match game.make_move(Move::new(marker, index))? {
                GameResult::InProgress(next) => {
                    self.redraw(next.board())?;
                    game = next;
                }
                GameResult::Finished(finished) => {
                    self.redraw(finished.board())?;
                    let outcome = *finished.outcome();
                    match outcome.winner() {
                        Some(winner) => writeln!(
                            self.output,
                            "Congratulations {}! You have won.",
                            players.name(winner)
                        )?,
                        None => writeln!(self.output, "Sorry guys but that's a draw")?,
                    }
                    self.output.flush()?;
                    info!(%outcome, moves = finished.history().len(), "Game over");
                    return Ok(SessionEnd::Finished(outcome));
                }
            }
        }
    }
}
