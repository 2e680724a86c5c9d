//! Turn loop between two seats.

use super::input::parse_coordinates;
use super::seat::{Seat, Seats};
use crate::config::GameConfig;
use crate::games::mnk::rules::{outcome, winning_line};
use crate::games::mnk::{Board, GameOutcome, Move, Symbol};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Runs one game, reading human moves from `input` and writing the board,
/// prompts and announcements to `output`.
pub struct Orchestrator<R, W> {
    board: Board,
    seats: Seats,
    to_move: Symbol,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator over an existing board.
    pub fn new(board: Board, seats: Seats, first: Symbol, input: R, output: W) -> Self {
        Self {
            board,
            seats,
            to_move: first,
            input,
            output,
        }
    }

    /// Creates an orchestrator for a fresh game described by `config`.
    ///
    /// # Errors
    ///
    /// Fails if the configured dimensions cannot form a board.
    #[instrument(skip_all, fields(size = config.size(), win_length = config.win_length()))]
    pub fn from_config(config: &GameConfig, input: R, output: W) -> Result<Self> {
        let board = config.new_board().context("Cannot start game")?;
        Ok(Self::new(
            board,
            Seats::from_config(config),
            *config.first(),
            input,
            output,
        ))
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays until someone wins or the board fills.
    ///
    /// # Errors
    ///
    /// Fails if input ends before a human moves, on I/O errors, or if the
    /// engine reports a broken contract.
    #[instrument(skip(self), fields(first = %self.to_move))]
    pub fn run(&mut self) -> Result<GameOutcome> {
        info!("Starting game");
        write!(self.output, "{}", self.board)?;

        loop {
            let state = outcome(&self.board);
            if state.is_over() {
                self.announce(state)?;
                info!(outcome = ?state, "Game over");
                return Ok(state);
            }

            let symbol = self.to_move;
            let seat = self.seats.get(symbol);
            debug!(player = %symbol, seat = seat.label(), "Waiting for move");

            let mv = match seat {
                Seat::Bot(engine) => {
                    let mv = engine
                        .choose_move(&mut self.board, symbol, symbol.opponent())
                        .context("Engine could not choose a move")?;
                    self.board
                        .play(mv, symbol)
                        .context("Engine chose an illegal move")?
                }
                Seat::Human => self.read_human_move(symbol)?,
            };

            info!(player = %symbol, row = mv.row, col = mv.col, "Move made");
            writeln!(self.output, "{} ({}) plays {}", symbol, seat.label(), mv)?;
            write!(self.output, "{}", self.board)?;

            self.to_move = symbol.opponent();
        }
    }

    /// Prompts until the human enters a legal move.
    fn read_human_move(&mut self, symbol: Symbol) -> Result<Move> {
        loop {
            write!(
                self.output,
                "Player {}, enter row and column (1-{}): ",
                symbol,
                self.board.size()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before player {} moved", symbol);
            }

            let (row, col) = match parse_coordinates(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    writeln!(self.output, "{}. Try again.", e)?;
                    continue;
                }
            };

            match self.board.place(row, col, symbol) {
                Ok(mv) => return Ok(mv),
                Err(e) if e.is_invalid_move() => {
                    warn!(error = %e.kind(), "Rejected human move");
                    writeln!(self.output, "{}. Try again.", e.kind())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn announce(&mut self, state: GameOutcome) -> Result<()> {
        match state {
            GameOutcome::Win(symbol) => {
                let line = winning_line(&self.board, symbol)
                    .unwrap_or_default()
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(
                    self.output,
                    "{} ({}) wins: {}",
                    symbol,
                    self.seats.get(symbol).label(),
                    line
                )?;
            }
            GameOutcome::Draw => writeln!(self.output, "Draw!")?,
            GameOutcome::InProgress => {}
        }
        Ok(())
    }
}
