//! Rules shared by every game: check detection.
//!
//! The board calls into `Check` for self-check filtering and to mark the
//! checked square of each turn. Nothing here depends on the legality
//! filter itself.

pub mod check;

pub use check::Check;
