//! The board: legality queries and move execution.
//!
//! `Board` owns the position, the players (in turn order) and the turn
//! history. Every move request is validated here, whether or not the caller
//! already asked for legal moves.

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, instrument, trace, warn};

use super::position::Position;
use super::snapshot::BoardSnapshot;
use crate::core::{
    BoardConfig, EngineError, EngineResult, GameSetup, Location, Piece, PieceId, PieceMove,
    PieceSpec, Player, PlayerSpec, Turn,
};
use crate::moves::{self, PieceCatalog};
use crate::rules::Check;

/// Board state and the operations that change it.
///
/// ## Example
///
/// ```
/// use board_rules::games::chess;
/// use board_rules::core::Location;
///
/// let mut board = chess::standard_board().unwrap();
/// let legal = board.legal_moves(Location::new(6, 4)).unwrap();
/// assert!(legal.contains(&Location::new(4, 4)));
///
/// let turn = board.move_piece(Location::new(6, 4), Location::new(4, 4)).unwrap();
/// assert_eq!(turn.moves()[0].end_location(), Location::new(4, 4));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    position: Position,
    players: Vec<Player>,
    history: Vector<Turn>,
    current: usize,
}

impl Board {
    /// Build a board from the assembler's player and piece lists.
    ///
    /// Pieces are handed to the player with the matching team. When check
    /// detection is enabled, every team holding pieces must hold a royal
    /// piece.
    pub fn new(
        config: BoardConfig,
        catalog: &PieceCatalog,
        players: &[PlayerSpec],
        pieces: &[PieceSpec],
    ) -> EngineResult<Self> {
        if config.rows <= 0 || config.cols <= 0 {
            return Err(EngineError::InvalidBoard {
                rows: config.rows,
                cols: config.cols,
            });
        }
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }

        let mut roster: Vec<Player> = Vec::with_capacity(players.len());
        for spec in players {
            if roster.iter().any(|p| p.team() == spec.team) {
                return Err(EngineError::DuplicateTeam(spec.team.clone()));
            }
            roster.push(Player::from_spec(spec));
        }

        let mut position = Position::new(config.bounds());
        for spec in pieces {
            let owner = roster
                .iter()
                .position(|p| p.team() == spec.team)
                .ok_or_else(|| EngineError::UnknownTeam {
                    team: spec.team.clone(),
                    location: spec.location,
                })?;
            let rules = catalog.rules_for(&spec.team, &spec.kind)?;
            let id = position.place(spec.team.clone(), spec.kind.clone(), spec.location, rules)?;
            roster[owner].add_piece(id);
        }

        if let Some(royal_kind) = config.royal_kind.as_deref() {
            for player in &roster {
                Check::royal_of(player, &position, royal_kind)?;
            }
        }

        debug!(
            rows = config.rows,
            cols = config.cols,
            players = roster.len(),
            pieces = pieces.len(),
            "board assembled"
        );

        // Players without pieces never get the move, the first one included.
        let current = roster.iter().position(|p| p.piece_count() > 0).unwrap_or(0);

        Ok(Self {
            config,
            position,
            players: roster,
            history: Vector::new(),
            current,
        })
    }

    /// Build a board from a complete setup.
    pub fn from_setup(setup: &GameSetup, catalog: &PieceCatalog) -> EngineResult<Self> {
        Self::new(setup.board.clone(), catalog, &setup.players, &setup.pieces)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Grid and piece arena.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by team.
    #[must_use]
    pub fn player(&self, team: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.team() == team)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Executed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Turn> {
        &self.history
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.position.piece(id)
    }

    #[must_use]
    pub fn piece_at(&self, location: Location) -> Option<&Piece> {
        self.position.piece_at(location)
    }

    /// Every piece still on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.position.alive_pieces()
    }

    /// Alive pieces of one team.
    pub fn team_pieces<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'a Piece> {
        self.position.alive_pieces().filter(move |p| p.team == team)
    }

    #[must_use]
    pub fn in_bounds(&self, location: Location) -> bool {
        self.position.in_bounds(location)
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }

    // === Legality ===

    /// Legal destinations for the piece on `location`.
    ///
    /// Raw candidates are filtered by playing each one on a scratch copy of
    /// the position and rejecting those that leave the mover's royal piece
    /// attacked. Squares holding an enemy royal piece are attacks, never
    /// destinations. The board itself is not modified.
    #[instrument(skip(self), level = "trace")]
    pub fn legal_moves(&self, location: Location) -> EngineResult<FxHashSet<Location>> {
        let piece = self
            .position
            .piece_at(location)
            .ok_or(EngineError::NoPieceAtLocation(location))?;
        let raw = moves::candidates(piece, &self.position);

        let Some(royal_kind) = self.config.royal_kind.as_deref() else {
            return Ok(raw.into_iter().map(|c| c.location).collect());
        };
        let Some(owner) = self.player(&piece.team) else {
            return Err(EngineError::UnknownTeam {
                team: piece.team.clone(),
                location,
            });
        };

        let mut scratch = self.position.clone();
        let mut legal = FxHashSet::default();

        for candidate in raw {
            if scratch
                .piece_at(candidate.location)
                .map_or(false, |target| target.kind == royal_kind)
            {
                continue;
            }

            let Some(applied) = scratch.apply(location, candidate.location) else {
                continue;
            };
            let exposed = Check::is_attacked(owner, &scratch, royal_kind);
            scratch.revert(applied);

            match exposed {
                Ok(false) => {
                    legal.insert(candidate.location);
                }
                Ok(true) => {
                    trace!(to = %candidate.location, "candidate leaves royal piece attacked");
                }
                Err(err) => {
                    warn!(%err, from = %location, to = %candidate.location, "check failed during trial move");
                    return Err(err);
                }
            }
        }

        Ok(legal)
    }

    /// Every legal `(start, end)` pair for a team, ordered by start then end.
    pub fn all_legal_moves(&self, team: &str) -> EngineResult<Vec<PieceMove>> {
        let mut starts: Vec<Location> = self.team_pieces(team).map(|p| p.location).collect();
        starts.sort();

        let mut out = Vec::new();
        for start in starts {
            let mut ends: Vec<Location> = self.legal_moves(start)?.into_iter().collect();
            ends.sort();
            out.extend(ends.into_iter().map(|end| PieceMove::new(start, end)));
        }
        Ok(out)
    }

    /// Check if a team has at least one legal move.
    pub fn has_legal_move(&self, team: &str) -> EngineResult<bool> {
        for piece in self.team_pieces(team) {
            if !self.legal_moves(piece.location)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Check if a team's royal piece is attacked. Always `false` when check
    /// detection is disabled or the team is unknown.
    pub fn in_check(&self, team: &str) -> EngineResult<bool> {
        match (self.config.royal_kind.as_deref(), self.player(team)) {
            (Some(royal_kind), Some(player)) => Check::is_attacked(player, &self.position, royal_kind),
            _ => Ok(false),
        }
    }

    // === Execution ===

    /// Execute a move and return its record.
    ///
    /// Fails without touching the board when the square is empty, the piece
    /// moves out of turn (if enforced), or `end` is not a legal destination.
    #[instrument(skip(self), level = "debug")]
    pub fn move_piece(&mut self, start: Location, end: Location) -> EngineResult<Turn> {
        let piece = self
            .position
            .piece_at(start)
            .ok_or(EngineError::NoPieceAtLocation(start))?;

        if self.config.enforce_turn_order {
            let expected = self.players[self.current].team();
            if piece.team != expected {
                return Err(EngineError::OutOfTurnMove {
                    team: piece.team.clone(),
                    expected: expected.to_string(),
                });
            }
        }

        if !self.legal_moves(start)?.contains(&end) {
            return Err(EngineError::IllegalMove { start, end });
        }

        let applied = self
            .position
            .apply(start, end)
            .ok_or(EngineError::NoPieceAtLocation(start))?;

        let checked_square = match self.config.royal_kind.as_deref() {
            Some(royal_kind) => match Check::attacked_royals(&self.players, &self.position, royal_kind) {
                Ok(attacked) => attacked.first().copied(),
                Err(err) => {
                    self.position.revert(applied);
                    return Err(err);
                }
            },
            None => None,
        };

        let mut removed: SmallVec<[Location; 1]> = SmallVec::new();
        if let Some(victim) = applied.captured {
            let victim_team = self.position.piece(victim).map(|p| p.team.clone());
            if let Some(owner) = victim_team
                .as_deref()
                .and_then(|team| self.players.iter_mut().find(|p| p.team() == team))
            {
                owner.remove_piece(victim);
            }
            removed.push(end);
            debug!(%victim, square = %end, "piece captured");
        }

        let turn = Turn::new(smallvec![PieceMove::new(start, end)], removed, checked_square);
        self.history.push_back(turn.clone());
        self.advance_turn();

        debug!(
            from = %start,
            to = %end,
            check = ?checked_square,
            next = self.current_player().team(),
            "move executed"
        );
        Ok(turn)
    }

    /// Hand the move to the next player who still has pieces.
    fn advance_turn(&mut self) {
        let count = self.players.len();
        for step in 1..=count {
            let candidate = (self.current + step) % count;
            if self.players[candidate].piece_count() > 0 {
                self.current = candidate;
                return;
            }
        }
    }
}
