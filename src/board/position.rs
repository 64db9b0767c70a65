//! Piece placement: the grid and the piece arena.
//!
//! `Position` is the part of the board that move expansion and check
//! detection read. It supports applying a move and reverting it exactly,
//! which is how trial moves are played during legality filtering.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{Bounds, EngineError, EngineResult, Location, Piece, PieceId};
use crate::moves::MoveRule;

/// Undo record for one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub mover: PieceId,
    pub start: Location,
    pub end: Location,
    pub captured: Option<PieceId>,
}

/// Grid-to-piece mapping plus the arena holding every piece ever placed.
///
/// Captured pieces stay in the arena with `alive == false` so their ids
/// remain valid; they are no longer on the grid.
#[derive(Clone, Debug)]
pub struct Position {
    bounds: Bounds,
    grid: FxHashMap<Location, PieceId>,
    pieces: Vec<Piece>,
}

impl Position {
    /// Create an empty position.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            grid: FxHashMap::default(),
            pieces: Vec::new(),
        }
    }

    /// Place a new piece on an empty in-bounds square.
    pub fn place(
        &mut self,
        team: impl Into<String>,
        kind: impl Into<String>,
        location: Location,
        rules: Arc<[MoveRule]>,
    ) -> EngineResult<PieceId> {
        if !self.bounds.contains(location) {
            return Err(EngineError::OutOfBounds(location));
        }
        if self.grid.contains_key(&location) {
            return Err(EngineError::SquareOccupied(location));
        }

        let id = PieceId::new(self.pieces.len() as u32);
        self.pieces.push(Piece::new(id, team, kind, location, rules));
        self.grid.insert(location, id);
        Ok(id)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn in_bounds(&self, location: Location) -> bool {
        self.bounds.contains(location)
    }

    /// Look up a piece by id, alive or captured.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Id of the piece standing on a square.
    #[must_use]
    pub fn occupant(&self, location: Location) -> Option<PieceId> {
        self.grid.get(&location).copied()
    }

    /// The piece standing on a square.
    #[must_use]
    pub fn piece_at(&self, location: Location) -> Option<&Piece> {
        self.occupant(location).and_then(|id| self.piece(id))
    }

    /// Every piece still on the board.
    pub fn alive_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.alive)
    }

    /// Every piece ever placed, in placement order.
    #[must_use]
    pub fn all_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.len()
    }

    /// Move the piece on `start` to `end`, capturing whatever stands there.
    ///
    /// No rule checking happens here. Returns `None` if `start` is empty.
    pub fn apply(&mut self, start: Location, end: Location) -> Option<AppliedMove> {
        let mover = self.grid.remove(&start)?;
        let captured = self.grid.insert(end, mover);
        if let Some(victim) = captured {
            self.pieces[victim.index()].alive = false;
        }

        let piece = &mut self.pieces[mover.index()];
        piece.location = end;
        piece.moves_made += 1;

        Some(AppliedMove {
            mover,
            start,
            end,
            captured,
        })
    }

    /// Undo a move returned by `apply`. Moves must be reverted in reverse
    /// order of application.
    pub fn revert(&mut self, applied: AppliedMove) {
        let piece = &mut self.pieces[applied.mover.index()];
        piece.location = applied.start;
        piece.moves_made -= 1;

        self.grid.remove(&applied.end);
        self.grid.insert(applied.start, applied.mover);

        if let Some(victim) = applied.captured {
            self.pieces[victim.index()].alive = true;
            self.grid.insert(applied.end, victim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_rules() -> Arc<[MoveRule]> {
        Arc::from(Vec::new())
    }

    #[test]
    fn test_place() {
        let mut position = Position::new(Bounds::new(8, 8));
        let id = position.place("white", "K", Location::new(7, 4), no_rules()).unwrap();

        assert_eq!(id, PieceId::new(0));
        assert_eq!(position.occupant(Location::new(7, 4)), Some(id));
        assert_eq!(position.piece_at(Location::new(7, 4)).unwrap().kind, "K");
        assert!(position.piece_at(Location::new(0, 0)).is_none());
    }

    #[test]
    fn test_place_rejects_bad_squares() {
        let mut position = Position::new(Bounds::new(8, 8));
        position.place("white", "K", Location::new(7, 4), no_rules()).unwrap();

        assert_eq!(
            position.place("black", "K", Location::new(7, 4), no_rules()),
            Err(EngineError::SquareOccupied(Location::new(7, 4)))
        );
        assert_eq!(
            position.place("black", "K", Location::new(8, 4), no_rules()),
            Err(EngineError::OutOfBounds(Location::new(8, 4)))
        );
    }

    #[test]
    fn test_apply_and_revert_quiet_move() {
        let mut position = Position::new(Bounds::new(8, 8));
        let id = position.place("white", "R", Location::new(7, 0), no_rules()).unwrap();

        let applied = position.apply(Location::new(7, 0), Location::new(3, 0)).unwrap();
        assert_eq!(applied.captured, None);
        assert!(position.piece_at(Location::new(7, 0)).is_none());
        assert_eq!(position.piece(id).unwrap().location, Location::new(3, 0));
        assert!(position.piece(id).unwrap().has_moved());

        position.revert(applied);
        assert_eq!(position.occupant(Location::new(7, 0)), Some(id));
        assert!(position.piece_at(Location::new(3, 0)).is_none());
        assert!(!position.piece(id).unwrap().has_moved());
    }

    #[test]
    fn test_apply_and_revert_capture() {
        let mut position = Position::new(Bounds::new(8, 8));
        let rook = position.place("white", "R", Location::new(0, 1), no_rules()).unwrap();
        let victim = position.place("black", "R", Location::new(0, 7), no_rules()).unwrap();

        let applied = position.apply(Location::new(0, 1), Location::new(0, 7)).unwrap();
        assert_eq!(applied.captured, Some(victim));
        assert!(!position.piece(victim).unwrap().alive);
        assert_eq!(position.alive_pieces().count(), 1);
        assert_eq!(position.occupied_count(), 1);

        position.revert(applied);
        assert!(position.piece(victim).unwrap().alive);
        assert_eq!(position.occupant(Location::new(0, 7)), Some(victim));
        assert_eq!(position.occupant(Location::new(0, 1)), Some(rook));
        assert_eq!(position.occupied_count(), 2);
    }

    #[test]
    fn test_apply_from_empty_square() {
        let mut position = Position::new(Bounds::new(8, 8));
        assert!(position.apply(Location::new(0, 0), Location::new(1, 1)).is_none());
    }
}
