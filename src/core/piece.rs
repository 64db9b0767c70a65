//! Pieces and piece identifiers.
//!
//! Pieces live in an arena owned by the board's position. A `PieceId` is
//! the piece's index in that arena, so two pieces of the same team and kind
//! are always distinct entities even when every other field matches.
//!
//! Pieces do not point back at their player. The owning player is found by
//! team lookup on the board.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::moves::MoveRule;

/// Arena index of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece on (or captured from) the board.
///
/// `location` changes on every move; `alive` flips to `false` on capture
/// and never back.
#[derive(Clone, Debug)]
pub struct Piece {
    /// Arena identity.
    pub id: PieceId,

    /// Team this piece plays for.
    pub team: String,

    /// Kind identifier ("K", "P", ...). The engine never interprets it
    /// except to find royal pieces.
    pub kind: String,

    /// Current square. For captured pieces, the square it was captured on.
    pub location: Location,

    /// Move-generation rules shared by every piece of this kind and team.
    pub rules: Arc<[MoveRule]>,

    /// `false` once captured.
    pub alive: bool,

    /// Number of moves this piece has made. Drives conditional rules.
    pub moves_made: u32,
}

impl Piece {
    /// Create a fresh, unmoved piece.
    #[must_use]
    pub fn new(
        id: PieceId,
        team: impl Into<String>,
        kind: impl Into<String>,
        location: Location,
        rules: Arc<[MoveRule]>,
    ) -> Self {
        Self {
            id,
            team: team.into(),
            kind: kind.into(),
            location,
            rules,
            alive: true,
            moves_made: 0,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Check if the piece has moved at least once.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moves_made > 0
    }

    /// Check if this piece is on a different team than `team`.
    #[must_use]
    pub fn is_enemy_of(&self, team: &str) -> bool {
        self.team != team
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{CaptureMode, MoveRule};

    fn rook_rules() -> Arc<[MoveRule]> {
        Arc::from(vec![MoveRule::slide(1, 0, CaptureMode::Either)])
    }

    #[test]
    fn test_piece_id() {
        let id = PieceId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{}", id), "Piece(7)");
    }

    #[test]
    fn test_new_piece_is_alive_and_unmoved() {
        let piece = Piece::new(PieceId::new(0), "white", "R", Location::new(7, 0), rook_rules());
        assert!(piece.is_alive());
        assert!(!piece.has_moved());
        assert_eq!(piece.rules.len(), 1);
    }

    #[test]
    fn test_enemy_check() {
        let piece = Piece::new(PieceId::new(0), "white", "R", Location::new(7, 0), rook_rules());
        assert!(piece.is_enemy_of("black"));
        assert!(!piece.is_enemy_of("white"));
    }

    #[test]
    fn test_identity_is_by_id() {
        let a = Piece::new(PieceId::new(0), "white", "R", Location::new(7, 0), rook_rules());
        let b = Piece::new(PieceId::new(1), "white", "R", Location::new(7, 0), rook_rules());
        assert_ne!(a.id, b.id);
    }
}
