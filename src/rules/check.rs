//! Check detection.
//!
//! A royal piece is attacked when its square is among the raw candidates
//! of any opposing piece. Only raw candidates are used here: the board's
//! legality filter calls into this module, so calling back into the filter
//! would never terminate.

use tracing::trace;

use crate::board::Position;
use crate::core::{EngineError, EngineResult, Location, Piece, Player};
use crate::moves;

/// Stateless check detector.
pub struct Check;

impl Check {
    /// The royal piece of `player`.
    ///
    /// Returns `Ok(None)` when the player has no pieces left at all, and
    /// `MissingRoyalPiece` when it has pieces but none of the royal kind.
    /// Among several royal pieces the one placed first is used.
    pub fn royal_of<'p>(
        player: &Player,
        position: &'p Position,
        royal_kind: &str,
    ) -> EngineResult<Option<&'p Piece>> {
        let mut any_alive = false;
        let mut royal: Option<&Piece> = None;

        for piece in player
            .pieces()
            .iter()
            .filter_map(|id| position.piece(*id))
            .filter(|p| p.alive)
        {
            any_alive = true;
            if piece.kind == royal_kind && royal.map_or(true, |r| piece.id < r.id) {
                royal = Some(piece);
            }
        }

        match (royal, any_alive) {
            (Some(piece), _) => Ok(Some(piece)),
            (None, false) => Ok(None),
            (None, true) => Err(EngineError::MissingRoyalPiece {
                team: player.team().to_string(),
            }),
        }
    }

    /// Check if any piece not on `team` can reach `target`.
    #[must_use]
    pub fn square_attacked(team: &str, target: Location, position: &Position) -> bool {
        position
            .alive_pieces()
            .filter(|p| p.is_enemy_of(team))
            .any(|attacker| {
                moves::candidates(attacker, position)
                    .iter()
                    .any(|c| c.location == target)
            })
    }

    /// Check if `player`'s royal piece is attacked.
    pub fn is_attacked(player: &Player, position: &Position, royal_kind: &str) -> EngineResult<bool> {
        Ok(Self::royal_of(player, position, royal_kind)?
            .map_or(false, |royal| Self::square_attacked(player.team(), royal.location, position)))
    }

    /// Squares of every attacked royal piece, in player order.
    pub fn attacked_royals(
        players: &[Player],
        position: &Position,
        royal_kind: &str,
    ) -> EngineResult<Vec<Location>> {
        let mut attacked = Vec::new();
        for player in players {
            if let Some(royal) = Self::royal_of(player, position, royal_kind)? {
                if Self::square_attacked(player.team(), royal.location, position) {
                    trace!(team = player.team(), square = %royal.location, "royal piece attacked");
                    attacked.push(royal.location);
                }
            }
        }
        Ok(attacked)
    }

    /// Check if any player's royal piece is attacked.
    pub fn exists(players: &[Player], position: &Position, royal_kind: &str) -> EngineResult<bool> {
        for player in players {
            if Self::is_attacked(player, position, royal_kind)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::moves::{symmetric_vectors, CaptureMode, MoveRule};
    use std::sync::Arc;

    fn rook() -> Arc<[MoveRule]> {
        symmetric_vectors(1, 0)
            .into_iter()
            .map(|v| MoveRule::slide(v.dr, v.dc, CaptureMode::Either))
            .collect::<Vec<_>>()
            .into()
    }

    fn king() -> Arc<[MoveRule]> {
        symmetric_vectors(1, 0)
            .into_iter()
            .chain(symmetric_vectors(1, 1))
            .map(|v| MoveRule::step(v.dr, v.dc, CaptureMode::Either))
            .collect::<Vec<_>>()
            .into()
    }

    /// White king on (7, 4), black king on (0, 0), black rook wherever asked.
    fn setup(rook_at: Location) -> (Vec<Player>, Position) {
        let mut position = Position::new(Bounds::new(8, 8));
        let mut white = Player::new("white");
        let mut black = Player::new("black");

        white.add_piece(position.place("white", "K", Location::new(7, 4), king()).unwrap());
        black.add_piece(position.place("black", "K", Location::new(0, 0), king()).unwrap());
        black.add_piece(position.place("black", "R", rook_at, rook()).unwrap());

        (vec![white, black], position)
    }

    #[test]
    fn test_no_check() {
        let (players, position) = setup(Location::new(3, 3));
        assert!(!Check::exists(&players, &position, "K").unwrap());
        assert!(Check::attacked_royals(&players, &position, "K").unwrap().is_empty());
    }

    #[test]
    fn test_rook_gives_check() {
        let (players, position) = setup(Location::new(3, 4));
        assert!(Check::exists(&players, &position, "K").unwrap());
        assert!(Check::is_attacked(&players[0], &position, "K").unwrap());
        assert!(!Check::is_attacked(&players[1], &position, "K").unwrap());
        assert_eq!(
            Check::attacked_royals(&players, &position, "K").unwrap(),
            vec![Location::new(7, 4)]
        );
    }

    #[test]
    fn test_blocked_line_is_not_check() {
        let (mut players, mut position) = setup(Location::new(3, 4));
        let blocker = position.place("white", "R", Location::new(5, 4), rook()).unwrap();
        players[0].add_piece(blocker);

        assert!(!Check::is_attacked(&players[0], &position, "K").unwrap());
    }

    #[test]
    fn test_missing_royal_fails_fast() {
        let (players, position) = setup(Location::new(3, 3));
        assert_eq!(
            Check::exists(&players, &position, "General"),
            Err(EngineError::MissingRoyalPiece { team: "white".into() })
        );
    }

    #[test]
    fn test_team_without_pieces_is_skipped() {
        let (mut players, position) = setup(Location::new(3, 3));
        players.push(Player::new("green"));
        assert!(!Check::exists(&players, &position, "K").unwrap());
    }

    #[test]
    fn test_captured_royal_during_trial_counts_as_missing() {
        let (mut players, mut position) = setup(Location::new(7, 0));
        let pawn = position.place("white", "P", Location::new(6, 0), Arc::from(Vec::new())).unwrap();
        players[0].add_piece(pawn);

        position.apply(Location::new(7, 0), Location::new(7, 4));
        assert!(matches!(
            Check::exists(&players, &position, "K"),
            Err(EngineError::MissingRoyalPiece { .. })
        ));
    }
}
