//! Grid coordinates.
//!
//! A `Location` is an immutable `(row, col)` pair. Rows grow downward from
//! row 0 at the top of the board; columns grow to the right.

use serde::{Deserialize, Serialize};

/// A square on the board.
///
/// Equality and hashing are by value. Locations off the board are
/// representable (move expansion produces them before bounds checks);
/// the board rejects them wherever a real square is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Row index, 0 at the top.
    pub row: i32,
    /// Column index, 0 at the left.
    pub col: i32,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The location `(dr, dc)` away from this one, or `None` if a
    /// coordinate overflows `i32`.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        match (self.row.checked_add(dr), self.col.checked_add(dc)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular board extent: rows `0..rows`, columns `0..cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    #[must_use]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Check whether a location lies on the board.
    #[must_use]
    pub const fn contains(&self, location: Location) -> bool {
        location.row >= 0 && location.row < self.rows && location.col >= 0 && location.col < self.cols
    }

    /// Iterate over every square, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Location> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Location::new(row, col)))
    }
}
