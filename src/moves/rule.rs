//! Move rules and their expansion into candidate destinations.
//!
//! A `MoveRule` is pure geometry data: a direction plus how far the piece
//! may travel and whether it may land on empty or enemy squares. Expansion
//! reads the current occupancy and never mutates anything.
//!
//! Candidates ignore check entirely. Filtering out moves that expose the
//! mover's royal piece is the board's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Position;
use crate::core::{Location, Piece};

/// A direction of travel, in rows and columns per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveVector {
    pub dr: i32,
    pub dc: i32,
}

impl MoveVector {
    #[must_use]
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    /// Apply this vector `times` times to a location. `None` when the
    /// result is not representable.
    #[must_use]
    pub const fn apply(self, from: Location, times: i32) -> Option<Location> {
        match (self.dr.checked_mul(times), self.dc.checked_mul(times)) {
            (Some(dr), Some(dc)) => from.offset(dr, dc),
            _ => None,
        }
    }
}

/// What a destination square must hold for the move to count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureMode {
    /// Destination must be empty (a pawn's forward push).
    MoveOnly,
    /// Destination must hold an enemy (a pawn's diagonal capture).
    CaptureOnly,
    /// Empty or enemy.
    #[default]
    Either,
}

impl CaptureMode {
    const fn allows_move(self) -> bool {
        matches!(self, CaptureMode::MoveOnly | CaptureMode::Either)
    }

    const fn allows_capture(self) -> bool {
        matches!(self, CaptureMode::CaptureOnly | CaptureMode::Either)
    }
}

/// Precondition for a conditional rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleCondition {
    /// The piece has never moved.
    Unmoved,
    /// The piece currently stands on this row.
    OnRow(i32),
    /// Every nested condition holds.
    All(Vec<RuleCondition>),
}

impl RuleCondition {
    /// Check the condition against a piece.
    #[must_use]
    pub fn holds(&self, piece: &Piece) -> bool {
        match self {
            RuleCondition::Unmoved => !piece.has_moved(),
            RuleCondition::OnRow(row) => piece.location.row == *row,
            RuleCondition::All(conditions) => conditions.iter().all(|c| c.holds(piece)),
        }
    }
}

/// One movement pattern of a piece kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRule {
    /// Exactly one application of `vector` (kings, knights, pawn pushes).
    Step { vector: MoveVector, mode: CaptureMode },

    /// Repeated application of `vector` until the edge of the board, the
    /// first occupied square, or `max_steps`.
    Slide {
        vector: MoveVector,
        mode: CaptureMode,
        #[serde(default)]
        max_steps: Option<u32>,
    },

    /// `rule`, but only while `condition` holds.
    Conditional {
        condition: RuleCondition,
        rule: Box<MoveRule>,
    },
}

/// Whether a candidate destination is empty or holds an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateKind {
    Move,
    Capture,
}

/// A destination reachable under some rule, ignoring check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub location: Location,
    pub kind: CandidateKind,
}

impl Candidate {
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, CandidateKind::Capture)
    }
}

/// Outcome of looking at one square during expansion.
enum Square {
    OffBoard,
    Empty,
    Friend,
    Enemy,
}

fn inspect(piece: &Piece, position: &Position, location: Location) -> Square {
    if !position.in_bounds(location) {
        return Square::OffBoard;
    }
    match position.piece_at(location) {
        None => Square::Empty,
        Some(other) if other.team == piece.team => Square::Friend,
        Some(_) => Square::Enemy,
    }
}

impl MoveRule {
    /// Single step in any capture mode.
    #[must_use]
    pub fn step(dr: i32, dc: i32, mode: CaptureMode) -> Self {
        MoveRule::Step {
            vector: MoveVector::new(dr, dc),
            mode,
        }
    }

    /// Unlimited slide.
    #[must_use]
    pub fn slide(dr: i32, dc: i32, mode: CaptureMode) -> Self {
        MoveRule::Slide {
            vector: MoveVector::new(dr, dc),
            mode,
            max_steps: None,
        }
    }

    /// Slide of at most `max_steps` squares.
    #[must_use]
    pub fn slide_up_to(dr: i32, dc: i32, mode: CaptureMode, max_steps: u32) -> Self {
        MoveRule::Slide {
            vector: MoveVector::new(dr, dc),
            mode,
            max_steps: Some(max_steps),
        }
    }

    /// Guard this rule with a condition.
    #[must_use]
    pub fn when(self, condition: RuleCondition) -> Self {
        MoveRule::Conditional {
            condition,
            rule: Box::new(self),
        }
    }

    /// Append this rule's candidates for `piece` to `out`.
    pub fn expand(&self, piece: &Piece, position: &Position, out: &mut Vec<Candidate>) {
        match self {
            MoveRule::Step { vector, mode } => {
                let Some(target) = vector.apply(piece.location, 1) else {
                    return;
                };
                match inspect(piece, position, target) {
                    Square::Empty if mode.allows_move() => out.push(Candidate {
                        location: target,
                        kind: CandidateKind::Move,
                    }),
                    Square::Enemy if mode.allows_capture() => out.push(Candidate {
                        location: target,
                        kind: CandidateKind::Capture,
                    }),
                    _ => {}
                }
            }
            MoveRule::Slide {
                vector,
                mode,
                max_steps,
            } => {
                // A zero vector would never leave the start square.
                if vector.dr == 0 && vector.dc == 0 {
                    return;
                }
                let limit = max_steps.map_or(i32::MAX, |m| m.min(i32::MAX as u32) as i32);
                for steps in 1..=limit {
                    let Some(target) = vector.apply(piece.location, steps) else {
                        break;
                    };
                    match inspect(piece, position, target) {
                        Square::OffBoard | Square::Friend => break,
                        Square::Empty => {
                            if mode.allows_move() {
                                out.push(Candidate {
                                    location: target,
                                    kind: CandidateKind::Move,
                                });
                            }
                        }
                        Square::Enemy => {
                            if mode.allows_capture() {
                                out.push(Candidate {
                                    location: target,
                                    kind: CandidateKind::Capture,
                                });
                            }
                            break;
                        }
                    }
                }
            }
            MoveRule::Conditional { condition, rule } => {
                if condition.holds(piece) {
                    rule.expand(piece, position, out);
                }
            }
        }
    }

    /// Candidates of this rule alone.
    #[must_use]
    pub fn candidates(&self, piece: &Piece, position: &Position) -> Vec<Candidate> {
        let mut out = Vec::new();
        self.expand(piece, position, &mut out);
        out
    }
}

/// Every distinct vector obtained by rotating and mirroring `(dr, dc)`.
///
/// `(1, 0)` gives the four rook directions, `(1, 1)` the four bishop
/// directions and `(2, 1)` the eight knight jumps.
#[must_use]
pub fn symmetric_vectors(dr: i32, dc: i32) -> SmallVec<[MoveVector; 8]> {
    let mut out: SmallVec<[MoveVector; 8]> = SmallVec::new();
    let (a, b) = (dr.saturating_abs(), dc.saturating_abs());
    for (r, c) in [(a, b), (b, a)] {
        for (sr, sc) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            let v = MoveVector::new(r * sr, c * sc);
            if (v.dr != 0 || v.dc != 0) && !out.contains(&v) {
                out.push(v);
            }
        }
    }
    out
}

/// The union of all of a piece's rule candidates, without duplicates.
///
/// This is the piece's raw candidate set: bounds, blocking and team
/// membership are respected, check is not.
#[must_use]
pub fn candidates(piece: &Piece, position: &Position) -> Vec<Candidate> {
    let mut out = Vec::new();
    for rule in piece.rules.iter() {
        rule.expand(piece, position, &mut out);
    }
    out.sort_by_key(|c| c.location);
    out.dedup_by_key(|c| c.location);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bounds, PieceId};
    use std::sync::Arc;

    fn rules(list: Vec<MoveRule>) -> Arc<[MoveRule]> {
        Arc::from(list)
    }

    fn rook() -> Arc<[MoveRule]> {
        rules(
            symmetric_vectors(1, 0)
                .into_iter()
                .map(|v| MoveRule::slide(v.dr, v.dc, CaptureMode::Either))
                .collect(),
        )
    }

    fn locations(cands: &[Candidate]) -> Vec<Location> {
        let mut locs: Vec<_> = cands.iter().map(|c| c.location).collect();
        locs.sort();
        locs
    }

    #[test]
    fn test_symmetric_vectors() {
        assert_eq!(symmetric_vectors(1, 0).len(), 4);
        assert_eq!(symmetric_vectors(1, 1).len(), 4);
        assert_eq!(symmetric_vectors(2, 1).len(), 8);
        assert_eq!(symmetric_vectors(0, 0).len(), 0);
    }

    #[test]
    fn test_rook_on_empty_board() {
        let mut position = Position::new(Bounds::new(4, 4));
        let id = position.place("a", "R", Location::new(1, 2), rook()).unwrap();

        let piece = position.piece(id).unwrap();
        let cands = candidates(piece, &position);
        assert_eq!(
            locations(&cands),
            vec![
                Location::new(0, 2),
                Location::new(1, 0),
                Location::new(1, 1),
                Location::new(1, 3),
                Location::new(2, 2),
                Location::new(3, 2),
            ]
        );
        assert!(cands.iter().all(|c| !c.is_capture()));
    }

    #[test]
    fn test_slide_blocked_by_friend_and_enemy() {
        let mut position = Position::new(Bounds::new(4, 4));
        let id = position.place("a", "R", Location::new(1, 2), rook()).unwrap();
        position.place("a", "R", Location::new(2, 2), rook()).unwrap();
        position.place("b", "R", Location::new(1, 1), rook()).unwrap();

        let piece = position.piece(id).unwrap();
        let cands = candidates(piece, &position);
        let locs = locations(&cands);

        assert!(!locs.contains(&Location::new(2, 2)));
        assert!(!locs.contains(&Location::new(3, 2)));
        assert!(locs.contains(&Location::new(1, 1)));
        assert!(!locs.contains(&Location::new(1, 0)));

        let capture = cands.iter().find(|c| c.location == Location::new(1, 1)).unwrap();
        assert!(capture.is_capture());
    }

    #[test]
    fn test_step_modes() {
        let mut position = Position::new(Bounds::new(8, 8));
        let pawn = rules(vec![
            MoveRule::step(1, 0, CaptureMode::MoveOnly),
            MoveRule::step(1, 1, CaptureMode::CaptureOnly),
            MoveRule::step(1, -1, CaptureMode::CaptureOnly),
        ]);
        let id = position.place("b", "P", Location::new(1, 3), pawn).unwrap();
        position.place("w", "P", Location::new(2, 3), rules(vec![])).unwrap();
        position.place("w", "P", Location::new(2, 4), rules(vec![])).unwrap();

        let piece = position.piece(id).unwrap();
        let cands = candidates(piece, &position);

        // Forward push is blocked; only the right-hand capture remains.
        assert_eq!(locations(&cands), vec![Location::new(2, 4)]);
    }

    #[test]
    fn test_slide_limit_and_condition() {
        let mut position = Position::new(Bounds::new(8, 8));
        let pawn = rules(vec![
            MoveRule::step(1, 0, CaptureMode::MoveOnly),
            MoveRule::slide_up_to(1, 0, CaptureMode::MoveOnly, 2).when(RuleCondition::Unmoved),
        ]);
        let id = position.place("b", "P", Location::new(1, 3), pawn).unwrap();

        let piece = position.piece(id).unwrap();
        let locs = locations(&candidates(piece, &position));
        assert_eq!(locs, vec![Location::new(2, 3), Location::new(3, 3)]);

        position.apply(Location::new(1, 3), Location::new(2, 3));
        let piece = position.piece(id).unwrap();
        let locs = locations(&candidates(piece, &position));
        assert_eq!(locs, vec![Location::new(3, 3)]);
    }

    #[test]
    fn test_capture_only_slide_skips_empty_squares() {
        let mut position = Position::new(Bounds::new(1, 6));
        let cannon = rules(vec![MoveRule::slide(0, 1, CaptureMode::CaptureOnly)]);
        let id = position.place("a", "C", Location::new(0, 0), cannon).unwrap();
        position.place("b", "X", Location::new(0, 3), rules(vec![])).unwrap();
        position.place("b", "X", Location::new(0, 5), rules(vec![])).unwrap();

        let piece = position.piece(id).unwrap();
        assert_eq!(locations(&candidates(piece, &position)), vec![Location::new(0, 3)]);
    }

    #[test]
    fn test_on_row_condition() {
        let mut position = Position::new(Bounds::new(8, 8));
        let piece_rules = rules(vec![MoveRule::step(0, 1, CaptureMode::Either).when(RuleCondition::All(vec![
            RuleCondition::OnRow(4),
            RuleCondition::Unmoved,
        ]))]);
        let on_row = position.place("a", "X", Location::new(4, 0), piece_rules.clone()).unwrap();
        let off_row = position.place("a", "X", Location::new(5, 0), piece_rules).unwrap();

        assert_eq!(candidates(position.piece(on_row).unwrap(), &position).len(), 1);
        assert!(candidates(position.piece(off_row).unwrap(), &position).is_empty());
    }

    #[test]
    fn test_duplicate_rules_are_merged() {
        let mut position = Position::new(Bounds::new(3, 3));
        let doubled = rules(vec![
            MoveRule::step(1, 0, CaptureMode::Either),
            MoveRule::slide_up_to(1, 0, CaptureMode::Either, 1),
        ]);
        let id = position.place("a", "X", Location::new(0, 0), doubled).unwrap();
        assert_eq!(candidates(position.piece(id).unwrap(), &position).len(), 1);
    }

    #[test]
    fn test_rule_serialization() {
        let rule = MoveRule::slide_up_to(-1, 0, CaptureMode::MoveOnly, 2).when(RuleCondition::Unmoved);
        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: MoveRule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }

    #[test]
    fn test_piece_id_unused_in_expansion() {
        // Expansion only depends on the piece's fields, not its arena slot.
        let position = Position::new(Bounds::new(3, 3));
        let piece = Piece::new(PieceId::new(42), "a", "R", Location::new(1, 1), rook());
        assert_eq!(candidates(&piece, &position).len(), 4);
    }

    #[test]
    fn test_huge_vectors_are_off_board() {
        let mut position = Position::new(Bounds::new(8, 8));
        let huge = rules(vec![
            MoveRule::step(i32::MAX, 0, CaptureMode::Either),
            MoveRule::step(0, i32::MIN, CaptureMode::Either),
            MoveRule::slide(i32::MAX / 2, 1, CaptureMode::Either),
            MoveRule::step(1, 0, CaptureMode::Either),
        ]);
        let id = position.place("a", "X", Location::new(3, 3), huge).unwrap();

        let cands = candidates(position.piece(id).unwrap(), &position);
        assert_eq!(locations(&cands), vec![Location::new(4, 3)]);
    }

    #[test]
    fn test_vector_apply_overflow() {
        let v = MoveVector::new(i32::MAX, 1);
        assert_eq!(v.apply(Location::new(0, 0), 1), Some(Location::new(i32::MAX, 1)));
        assert_eq!(v.apply(Location::new(1, 0), 1), None);
        assert_eq!(v.apply(Location::new(0, 0), 2), None);
        assert_eq!(symmetric_vectors(i32::MIN, 0).len(), 4);
    }
}
