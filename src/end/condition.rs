//! Game outcome and the end-condition trait.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::EngineResult;

/// Outcome of evaluating the end conditions.
///
/// `Ended` and `Draw` are terminal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// The game continues.
    Running,
    /// The game is over and `loser` lost.
    Ended { loser: String },
    /// The game is over with no loser.
    Draw,
}

impl GameState {
    /// Shorthand for `Ended`.
    #[must_use]
    pub fn ended(loser: impl Into<String>) -> Self {
        GameState::Ended { loser: loser.into() }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, GameState::Running)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    /// Losing team, if the game ended with one.
    #[must_use]
    pub fn loser(&self) -> Option<&str> {
        match self {
            GameState::Ended { loser } => Some(loser),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Running => f.write_str("running"),
            GameState::Ended { loser } => write!(f, "ended, {} lost", loser),
            GameState::Draw => f.write_str("draw"),
        }
    }
}

/// A rule deciding when the game is over.
///
/// Evaluators are built once per game and called after every completed
/// turn, so they may keep state between calls. The board gives access to
/// the players and their pieces.
pub trait EndCondition: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Decide whether the game is over. Return `Running` if not.
    fn evaluate(&mut self, board: &Board) -> EngineResult<GameState>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_queries() {
        assert!(GameState::Running.is_running());
        assert!(!GameState::Running.is_terminal());
        assert!(GameState::Draw.is_terminal());

        let ended = GameState::ended("black");
        assert!(ended.is_terminal());
        assert_eq!(ended.loser(), Some("black"));
        assert_eq!(GameState::Draw.loser(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameState::Running.to_string(), "running");
        assert_eq!(GameState::ended("white").to_string(), "ended, white lost");
        assert_eq!(GameState::Draw.to_string(), "draw");
    }

    #[test]
    fn test_serialization() {
        let state = GameState::ended("black");
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
