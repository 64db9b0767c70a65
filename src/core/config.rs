//! Game configuration types.
//!
//! The external board assembler hands the engine:
//! - `BoardConfig`: board size, royal kind, turn-order policy
//! - `PlayerSpec`: one entry per player, in turn order
//! - `PieceSpec`: one entry per starting piece
//! - `EndConditionConfig`: ordered end-condition evaluators
//!
//! `GameSetup` bundles all of them. Every type is plain serde data so the
//! assembler may produce it from whatever file format it owns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::location::{Bounds, Location};

/// Royal kind used when the configuration does not name one.
pub const DEFAULT_ROYAL_KIND: &str = "K";

fn default_royal_kind() -> Option<String> {
    Some(DEFAULT_ROYAL_KIND.to_string())
}

fn default_enforce_turn_order() -> bool {
    true
}

/// Board-level rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: i32,

    /// Number of columns.
    pub cols: i32,

    /// Kind whose attack constitutes check. `None` disables check detection
    /// (and with it self-check prevention).
    #[serde(default = "default_royal_kind")]
    pub royal_kind: Option<String>,

    /// Reject moves by pieces whose team is not the current player's.
    #[serde(default = "default_enforce_turn_order")]
    pub enforce_turn_order: bool,
}

impl BoardConfig {
    /// Create a board configuration with the default royal kind and turn
    /// order enforced.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            royal_kind: default_royal_kind(),
            enforce_turn_order: true,
        }
    }

    /// Set the royal kind.
    #[must_use]
    pub fn with_royal_kind(mut self, kind: impl Into<String>) -> Self {
        self.royal_kind = Some(kind.into());
        self
    }

    /// Disable check detection.
    #[must_use]
    pub fn without_royal(mut self) -> Self {
        self.royal_kind = None;
        self
    }

    /// Enable or disable turn-order enforcement.
    #[must_use]
    pub fn with_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }

    /// Board extent.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }
}

/// One player as described by the assembler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub team: String,
    #[serde(default)]
    pub clock_seconds: u32,
    #[serde(default)]
    pub increment_seconds: u32,
}

impl PlayerSpec {
    #[must_use]
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            clock_seconds: 0,
            increment_seconds: 0,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock_seconds: u32, increment_seconds: u32) -> Self {
        self.clock_seconds = clock_seconds;
        self.increment_seconds = increment_seconds;
        self
    }
}

/// One starting piece as described by the assembler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSpec {
    pub team: String,
    pub kind: String,
    pub location: Location,
}

impl PieceSpec {
    #[must_use]
    pub fn new(team: impl Into<String>, kind: impl Into<String>, location: impl Into<Location>) -> Self {
        Self {
            team: team.into(),
            kind: kind.into(),
            location: location.into(),
        }
    }
}

/// Built-in end-condition evaluators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndConditionType {
    /// A team loses once all of its own tracked pieces are captured.
    /// Property `kinds`: the tracked piece kinds.
    Elimination,
    /// The player to move loses when mated; stalemate is a draw.
    Checkmate,
    /// Draw after a fixed number of turns. Property `turns`: one integer.
    MoveLimit,
}

impl std::fmt::Display for EndConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EndConditionType::Elimination => "elimination",
            EndConditionType::Checkmate => "checkmate",
            EndConditionType::MoveLimit => "move limit",
        };
        f.write_str(name)
    }
}

/// Configuration of one end-condition evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndConditionConfig {
    pub condition_type: EndConditionType,
    #[serde(default)]
    pub properties: FxHashMap<String, Vec<String>>,
}

impl EndConditionConfig {
    #[must_use]
    pub fn new(condition_type: EndConditionType) -> Self {
        Self {
            condition_type,
            properties: FxHashMap::default(),
        }
    }

    /// Elimination of the listed kinds.
    #[must_use]
    pub fn elimination<S: Into<String>>(kinds: impl IntoIterator<Item = S>) -> Self {
        Self::new(EndConditionType::Elimination).with_property("kinds", kinds)
    }

    /// Set a property list.
    #[must_use]
    pub fn with_property<S: Into<String>>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.properties
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Get a property list.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&[String]> {
        self.properties.get(key).map(Vec::as_slice)
    }
}

/// Everything the assembler produces for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub board: BoardConfig,
    pub players: Vec<PlayerSpec>,
    pub pieces: Vec<PieceSpec>,
    #[serde(default)]
    pub end_conditions: Vec<EndConditionConfig>,
}

impl GameSetup {
    #[must_use]
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            players: Vec::new(),
            pieces: Vec::new(),
            end_conditions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_player(mut self, player: PlayerSpec) -> Self {
        self.players.push(player);
        self
    }

    #[must_use]
    pub fn with_piece(mut self, piece: PieceSpec) -> Self {
        self.pieces.push(piece);
        self
    }

    #[must_use]
    pub fn with_end_condition(mut self, condition: EndConditionConfig) -> Self {
        self.end_conditions.push(condition);
        self
    }
}
