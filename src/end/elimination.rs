//! Elimination: a team loses once all of its own tracked pieces are gone.
//!
//! For every team and every tracked kind, the evaluator remembers how many
//! such pieces the team started with. Each evaluation diffs the alive pieces
//! against the previous evaluation and decrements the `(team, kind)` entry of
//! every piece that disappeared. The count is keyed by the captured piece's
//! own team, so the team that runs out is the loser.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::condition::{EndCondition, GameState};
use crate::board::Board;
use crate::core::{EngineError, EngineResult, PieceId};

/// Elimination end condition.
#[derive(Clone, Debug)]
pub struct EliminationCondition {
    /// Remaining pieces per `(team, kind)`.
    remaining: FxHashMap<(String, String), i64>,
    /// Alive pieces seen on the previous evaluation.
    previous: FxHashSet<PieceId>,
    /// Teams in player order, for a deterministic loser.
    teams: Vec<String>,
}

fn alive_pieces(board: &Board) -> FxHashSet<PieceId> {
    board
        .players()
        .iter()
        .flat_map(|p| p.pieces().iter().copied())
        .collect()
}

impl EliminationCondition {
    /// Track the given kinds for every team on the board.
    ///
    /// Team/kind pairs with no pieces at setup are not tracked.
    pub fn new<S: AsRef<str>>(kinds: &[S], board: &Board) -> EngineResult<Self> {
        if kinds.is_empty() {
            return Err(EngineError::InvalidEndCondition(
                "elimination needs at least one piece kind".to_string(),
            ));
        }

        let teams: Vec<String> = board.players().iter().map(|p| p.team().to_string()).collect();
        let mut remaining = FxHashMap::default();
        for team in &teams {
            for kind in kinds {
                let kind = kind.as_ref();
                let count = board.team_pieces(team).filter(|p| p.kind == kind).count() as i64;
                if count > 0 {
                    remaining.insert((team.clone(), kind.to_string()), count);
                }
            }
        }

        Ok(Self {
            remaining,
            previous: alive_pieces(board),
            teams,
        })
    }

    /// Remaining tracked pieces of one team and kind.
    #[must_use]
    pub fn remaining(&self, team: &str, kind: &str) -> Option<i64> {
        self.remaining
            .get(&(team.to_string(), kind.to_string()))
            .copied()
    }

    /// Sum of remaining tracked pieces of a team, or `None` if the team
    /// has nothing tracked.
    #[must_use]
    pub fn remaining_for_team(&self, team: &str) -> Option<i64> {
        let mut tracked = false;
        let mut total = 0;
        for ((t, _), count) in &self.remaining {
            if t == team {
                tracked = true;
                total += count;
            }
        }
        tracked.then_some(total)
    }
}

impl EndCondition for EliminationCondition {
    fn name(&self) -> &str {
        "elimination"
    }

    fn evaluate(&mut self, board: &Board) -> EngineResult<GameState> {
        let alive = alive_pieces(board);
        if alive.len() == self.previous.len() {
            return Ok(GameState::Running);
        }

        for id in self.previous.difference(&alive) {
            let Some(piece) = board.piece(*id) else {
                continue;
            };
            if let Some(count) = self
                .remaining
                .get_mut(&(piece.team.clone(), piece.kind.clone()))
            {
                *count -= 1;
                debug!(team = %piece.team, kind = %piece.kind, remaining = *count, "tracked piece eliminated");
            }
        }
        self.previous = alive;

        for team in &self.teams {
            if self.remaining_for_team(team).map_or(false, |left| left <= 0) {
                return Ok(GameState::ended(team.clone()));
            }
        }
        Ok(GameState::Running)
    }
}
