//! Checkmate and stalemate for the player to move.

use super::condition::{EndCondition, GameState};
use crate::board::Board;
use crate::core::EngineResult;

/// The player to move loses when it has no legal move and is in check.
/// No legal move without check is a draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckmateCondition;

impl CheckmateCondition {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EndCondition for CheckmateCondition {
    fn name(&self) -> &str {
        "checkmate"
    }

    fn evaluate(&mut self, board: &Board) -> EngineResult<GameState> {
        let team = board.current_player().team();
        if board.has_legal_move(team)? {
            return Ok(GameState::Running);
        }
        if board.in_check(team)? {
            Ok(GameState::ended(team))
        } else {
            Ok(GameState::Draw)
        }
    }
}
