//! # board-rules
//!
//! A rules engine for grid board games where piece kinds are data.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded piece kinds, board sizes or teams.
//!    An assembler describes the game through `GameSetup` and a
//!    `PieceCatalog`.
//!
//! 2. **N-Player First**: Players take turns in configured order. Teams with
//!    no pieces left are skipped.
//!
//! 3. **Legality Is Exact**: A move is legal only when its geometry allows it
//!    and it does not leave the mover's royal piece attacked.
//!
//! ## Modules
//!
//! - `core`: Locations, pieces, players, turns, configuration, errors
//! - `moves`: Move rules, candidate expansion and the piece catalog
//! - `board`: Position, legality filtering and move execution
//! - `rules`: Check detection
//! - `end`: End-condition evaluators and their runner
//! - `session`: A board and its end conditions as one game
//! - `games`: Ready-made games, currently standard chess

pub mod core;
pub mod moves;
pub mod board;
pub mod rules;
pub mod end;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Bounds, Location,
    Piece, PieceId, Player, ClockSettings,
    PieceMove, Turn,
    BoardConfig, PlayerSpec, PieceSpec, EndConditionConfig, EndConditionType, GameSetup,
    EngineError, EngineResult,
};

pub use crate::moves::{CaptureMode, MoveRule, MoveVector, RuleCondition, PieceCatalog, PieceDefinition};

pub use crate::board::{Board, BoardSnapshot, PieceView, Position};

pub use crate::rules::Check;

pub use crate::end::{
    EndCondition, GameState, EndConditionRunner,
    EliminationCondition, CheckmateCondition, MoveLimitCondition,
};

pub use crate::session::Game;
