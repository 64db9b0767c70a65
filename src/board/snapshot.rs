//! Read-only board view for rendering.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::core::{Bounds, Location};

/// One alive piece as the view layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    pub team: String,
    pub kind: String,
    pub location: Location,
}

/// Every alive piece, sorted by location, plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub bounds: Bounds,
    pub pieces: Vec<PieceView>,
    pub to_move: String,
    pub turns_played: usize,
}

impl BoardSnapshot {
    pub(crate) fn capture(board: &Board) -> Self {
        let mut pieces: Vec<PieceView> = board
            .pieces()
            .map(|p| PieceView {
                team: p.team.clone(),
                kind: p.kind.clone(),
                location: p.location,
            })
            .collect();
        pieces.sort_by_key(|p| p.location);

        Self {
            bounds: board.position().bounds(),
            pieces,
            to_move: board.current_player().team().to_string(),
            turns_played: board.history().len(),
        }
    }

    /// The piece on a square, if any.
    #[must_use]
    pub fn piece_at(&self, location: Location) -> Option<&PieceView> {
        self.pieces
            .binary_search_by_key(&location, |p| p.location)
            .ok()
            .map(|i| &self.pieces[i])
    }

    /// Number of alive pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Render as text, one line per row. Empty squares are `.`, pieces show
    /// their kind. Every cell is as wide as the longest kind, so columns
    /// line up; cells wider than one character are separated by a space.
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self
            .pieces
            .iter()
            .map(|p| p.kind.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);

        let mut out = String::new();
        for row in 0..self.bounds.rows {
            for col in 0..self.bounds.cols {
                if col > 0 && width > 1 {
                    out.push(' ');
                }
                let cell = self
                    .piece_at(Location::new(row, col))
                    .map_or(".", |piece| piece.kind.as_str());
                out.push_str(&format!("{cell:<width$}"));
            }
            out.push('\n');
        }
        out
    }
}
