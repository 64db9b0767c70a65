//! End conditions: deciding when the game is over and who lost.
//!
//! Evaluators implement `EndCondition` and are composed in an
//! `EndConditionRunner`, which is consulted once per completed turn.
//!
//! Built-in evaluators:
//! - `EliminationCondition`: a team loses when its tracked pieces are gone
//! - `CheckmateCondition`: mate loses, stalemate draws
//! - `MoveLimitCondition`: draw after a fixed number of turns

pub mod condition;
pub mod elimination;
pub mod checkmate;
pub mod move_limit;
pub mod runner;

pub use condition::{EndCondition, GameState};
pub use elimination::EliminationCondition;
pub use checkmate::CheckmateCondition;
pub use move_limit::MoveLimitCondition;
pub use runner::EndConditionRunner;
