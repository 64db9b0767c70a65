//! Players: team identity, owned pieces and clock settings.
//!
//! Players are created once at setup from the assembler's player list.
//! Each piece is handed to the player whose team matches, exactly once;
//! captured pieces are removed from the owning player's set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::PlayerSpec;
use super::piece::PieceId;

/// A participant in the game.
///
/// Pieces are referenced by `PieceId`; the piece data itself lives in the
/// board's arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    team: String,
    pieces: FxHashSet<PieceId>,
    clock_seconds: u32,
    increment_seconds: u32,
}

impl Player {
    /// Create a player with no pieces and no clock.
    #[must_use]
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            pieces: FxHashSet::default(),
            clock_seconds: 0,
            increment_seconds: 0,
        }
    }

    /// Create a player from the assembler's description.
    #[must_use]
    pub fn from_spec(spec: &PlayerSpec) -> Self {
        Self::new(spec.team.clone()).with_clock(spec.clock_seconds, spec.increment_seconds)
    }

    /// Set the configured clock values.
    #[must_use]
    pub fn with_clock(mut self, clock_seconds: u32, increment_seconds: u32) -> Self {
        self.clock_seconds = clock_seconds;
        self.increment_seconds = increment_seconds;
        self
    }

    /// Team identifier.
    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Ids of the pieces this player still owns.
    #[must_use]
    pub fn pieces(&self) -> &FxHashSet<PieceId> {
        &self.pieces
    }

    /// Check if the player owns a piece.
    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }

    /// Number of pieces still owned.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Configured starting clock, in seconds.
    #[must_use]
    pub fn clock_seconds(&self) -> u32 {
        self.clock_seconds
    }

    /// Configured per-move increment, in seconds.
    #[must_use]
    pub fn increment_seconds(&self) -> u32 {
        self.increment_seconds
    }

    /// Give a piece to this player.
    ///
    /// Returns `false` if the player already owned it.
    pub(crate) fn add_piece(&mut self, piece: PieceId) -> bool {
        self.pieces.insert(piece)
    }

    /// Take a captured piece away.
    pub(crate) fn remove_piece(&mut self, piece: PieceId) -> bool {
        self.pieces.remove(&piece)
    }
}

/// Clock values as exposed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    pub clock_seconds: u32,
    pub increment_seconds: u32,
}

impl From<&Player> for ClockSettings {
    fn from(player: &Player) -> Self {
        Self {
            clock_seconds: player.clock_seconds,
            increment_seconds: player.increment_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_new() {
        let player = Player::new("white");
        assert_eq!(player.team(), "white");
        assert_eq!(player.piece_count(), 0);
        assert_eq!(player.clock_seconds(), 0);
    }

    #[test]
    fn test_player_from_spec() {
        let spec = PlayerSpec::new("black").with_clock(300, 5);
        let player = Player::from_spec(&spec);

        assert_eq!(player.team(), "black");
        assert_eq!(player.clock_seconds(), 300);
        assert_eq!(player.increment_seconds(), 5);
        assert_eq!(ClockSettings::from(&player), ClockSettings { clock_seconds: 300, increment_seconds: 5 });
    }

    #[test]
    fn test_pieces_added_once() {
        let mut player = Player::new("white");
        assert!(player.add_piece(PieceId::new(3)));
        assert!(!player.add_piece(PieceId::new(3)));
        assert_eq!(player.piece_count(), 1);
        assert!(player.owns(PieceId::new(3)));
    }

    #[test]
    fn test_remove_piece() {
        let mut player = Player::new("white");
        player.add_piece(PieceId::new(1));
        player.add_piece(PieceId::new(2));

        assert!(player.remove_piece(PieceId::new(1)));
        assert!(!player.remove_piece(PieceId::new(1)));
        assert!(!player.owns(PieceId::new(1)));
        assert!(player.owns(PieceId::new(2)));
    }
}
