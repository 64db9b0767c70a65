//! Draw after a fixed number of turns.

use super::condition::{EndCondition, GameState};
use crate::board::Board;
use crate::core::EngineResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveLimitCondition {
    turns: usize,
}

impl MoveLimitCondition {
    #[must_use]
    pub fn new(turns: usize) -> Self {
        Self { turns }
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }
}

impl EndCondition for MoveLimitCondition {
    fn name(&self) -> &str {
        "move limit"
    }

    fn evaluate(&mut self, board: &Board) -> EngineResult<GameState> {
        if board.history().len() >= self.turns {
            Ok(GameState::Draw)
        } else {
            Ok(GameState::Running)
        }
    }
}
