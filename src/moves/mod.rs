//! Move geometry: rules, candidate expansion and the piece catalog.
//!
//! Piece kinds are data. The engine only knows how to expand a rule into
//! destinations given the current occupancy.

pub mod rule;
pub mod catalog;

pub use rule::{
    candidates, symmetric_vectors, Candidate, CandidateKind, CaptureMode, MoveRule, MoveVector,
    RuleCondition,
};
pub use catalog::{PieceCatalog, PieceDefinition};
