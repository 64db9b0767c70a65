//! Turn records: the effect of one executed move.
//!
//! A `Turn` lists the piece movements, the squares whose pieces were
//! captured, and the royal square left in check (if any). Turns are
//! produced by the board and never modified afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::location::Location;

/// One piece moving from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMove {
    pub start: Location,
    pub end: Location,
}

impl PieceMove {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Square the piece left.
    #[must_use]
    pub const fn start_location(&self) -> Location {
        self.start
    }

    /// Square the piece landed on.
    #[must_use]
    pub const fn end_location(&self) -> Location {
        self.end
    }
}

/// Immutable record of one executed move.
///
/// SmallVec keeps the common case (one movement, at most one capture)
/// off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    moves: SmallVec<[PieceMove; 1]>,
    removed: SmallVec<[Location; 1]>,
    checked_square: Option<Location>,
}

impl Turn {
    pub(crate) fn new(
        moves: SmallVec<[PieceMove; 1]>,
        removed: SmallVec<[Location; 1]>,
        checked_square: Option<Location>,
    ) -> Self {
        Self {
            moves,
            removed,
            checked_square,
        }
    }

    /// Piece movements, in execution order.
    #[must_use]
    pub fn moves(&self) -> &[PieceMove] {
        &self.moves
    }

    /// Squares whose pieces were captured. Never contains duplicates.
    #[must_use]
    pub fn removed(&self) -> &[Location] {
        &self.removed
    }

    /// Royal square under attack after the move, if any.
    #[must_use]
    pub fn checked_square(&self) -> Option<Location> {
        self.checked_square
    }

    /// Check if the move captured anything.
    #[must_use]
    pub fn captured(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Check if the move left a royal piece in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.checked_square.is_some()
    }
}
