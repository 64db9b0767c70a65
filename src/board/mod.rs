//! Board state, legality filtering and move execution.
//!
//! - `Position`: grid plus piece arena, with exact apply/revert
//! - `Board`: players, history and the public move API
//! - `BoardSnapshot`: read-only view for rendering

mod board;
pub mod position;
pub mod snapshot;

pub use board::Board;
pub use position::{AppliedMove, Position};
pub use snapshot::{BoardSnapshot, PieceView};
