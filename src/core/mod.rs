//! Core engine types: locations, pieces, players, turns, configuration, errors.
//!
//! These are the game-agnostic building blocks. Games describe themselves
//! through `GameSetup` rather than by changing anything here.

pub mod location;
pub mod piece;
pub mod player;
pub mod turn;
pub mod config;
pub mod error;

pub use location::{Bounds, Location};
pub use piece::{Piece, PieceId};
pub use player::{ClockSettings, Player};
pub use turn::{PieceMove, Turn};
pub use config::{
    BoardConfig, EndConditionConfig, EndConditionType, GameSetup, PieceSpec, PlayerSpec,
    DEFAULT_ROYAL_KIND,
};
pub use error::{EngineError, EngineResult};
