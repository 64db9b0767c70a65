//! A game session: board plus end conditions plus the current outcome.

use rustc_hash::FxHashSet;
use tracing::{instrument, warn};

use crate::board::{Board, BoardSnapshot};
use crate::core::{EngineError, EngineResult, GameSetup, Location, Turn};
use crate::end::{EndConditionRunner, GameState};
use crate::moves::PieceCatalog;

/// One game in progress.
///
/// `play` runs the usual controller loop step: execute the move, then
/// evaluate the end conditions. Moves are refused once the game is over.
#[derive(Debug)]
pub struct Game {
    board: Board,
    runner: EndConditionRunner,
    state: GameState,
}

impl Game {
    /// Wrap an assembled board and its end conditions.
    #[must_use]
    pub fn new(board: Board, runner: EndConditionRunner) -> Self {
        Self {
            board,
            runner,
            state: GameState::Running,
        }
    }

    /// Assemble a game from the assembler's output.
    pub fn from_setup(setup: &GameSetup, catalog: &PieceCatalog) -> EngineResult<Self> {
        let board = Board::from_setup(setup, catalog)?;
        let runner = EndConditionRunner::from_config(&setup.end_conditions, &board)?;
        Ok(Self::new(board, runner))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Legal destinations for the piece on `location`.
    pub fn legal_moves(&self, location: Location) -> EngineResult<FxHashSet<Location>> {
        self.board.legal_moves(location)
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Execute a move and evaluate the end conditions.
    ///
    /// Move errors leave the game untouched. An error from an end condition
    /// is reported after the move has been executed: the turn is already in
    /// the board's history and the game keeps its previous state.
    #[instrument(skip(self), level = "debug")]
    pub fn play(&mut self, start: Location, end: Location) -> EngineResult<(Turn, GameState)> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let turn = self.board.move_piece(start, end)?;
        let state = self.runner.evaluate(&self.board).map_err(|err| {
            warn!(%err, from = %start, to = %end, "end condition failed after move");
            err
        })?;
        self.state = state;
        Ok((turn, self.state.clone()))
    }
}
