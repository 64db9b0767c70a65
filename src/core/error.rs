//! Engine errors.
//!
//! Move errors (`NoPieceAtLocation`, `IllegalMove`, `OutOfTurnMove`,
//! `GameOver`) are expected during play; callers usually answer them with a
//! no-op. `MissingRoyalPiece` means the position is corrupt and the game
//! cannot continue. The remaining variants are setup errors raised while
//! building a board from assembler output.

use thiserror::Error;

use super::location::Location;

/// Errors reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no piece at {0}")]
    NoPieceAtLocation(Location),

    #[error("illegal move from {start} to {end}")]
    IllegalMove { start: Location, end: Location },

    #[error("team {team} moved out of turn, expected {expected}")]
    OutOfTurnMove { team: String, expected: String },

    #[error("game already over")]
    GameOver,

    #[error("team {team} has no royal piece")]
    MissingRoyalPiece { team: String },

    #[error("piece at {location} belongs to unknown team {team}")]
    UnknownTeam { team: String, location: Location },

    #[error("team {0} configured more than once")]
    DuplicateTeam(String),

    #[error("no move rules registered for kind {kind} of team {team}")]
    UnknownPieceKind { team: String, kind: String },

    #[error("location {0} is off the board")]
    OutOfBounds(Location),

    #[error("more than one piece placed on {0}")]
    SquareOccupied(Location),

    #[error("invalid end condition: {0}")]
    InvalidEndCondition(String),

    #[error("at least one player is required")]
    NoPlayers,

    #[error("invalid board size {rows}x{cols}")]
    InvalidBoard { rows: i32, cols: i32 },
}

impl EngineError {
    /// Check if this error is an invariant violation rather than a
    /// rejected request.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::MissingRoyalPiece { .. })
    }

    /// Check if this error rejects a single move and leaves the game playable.
    #[must_use]
    pub fn is_move_error(&self) -> bool {
        matches!(
            self,
            EngineError::NoPieceAtLocation(_)
                | EngineError::IllegalMove { .. }
                | EngineError::OutOfTurnMove { .. }
                | EngineError::GameOver
        )
    }
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
