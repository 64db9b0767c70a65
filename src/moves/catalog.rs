//! Piece catalog: move rules per piece kind.
//!
//! The assembler registers one `PieceDefinition` per kind. Kinds whose
//! geometry depends on the team (pawns moving "forward") get a per-team
//! override; lookups try the override first.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rule::MoveRule;
use crate::core::{EngineError, EngineResult};

/// Movement rules for one piece kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceDefinition {
    /// Kind identifier, matched against `PieceSpec::kind`.
    pub kind: String,
    /// Ordered rules; the piece's candidates are their union.
    pub rules: Vec<MoveRule>,
}

impl PieceDefinition {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: MoveRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add several rules.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = MoveRule>) -> Self {
        self.rules.extend(rules);
        self
    }
}

/// Registry of piece definitions.
///
/// Rules are stored behind `Arc` so every piece of a kind shares one
/// allocation.
///
/// ## Example
///
/// ```
/// use board_rules::moves::{CaptureMode, MoveRule, PieceCatalog, PieceDefinition};
///
/// let catalog = PieceCatalog::new()
///     .with_kind(PieceDefinition::new("K").with_rule(MoveRule::step(1, 0, CaptureMode::Either)))
///     .with_team_kind("white", PieceDefinition::new("P").with_rule(MoveRule::step(-1, 0, CaptureMode::MoveOnly)));
///
/// assert!(catalog.rules_for("black", "K").is_ok());
/// assert!(catalog.rules_for("white", "P").is_ok());
/// assert!(catalog.rules_for("black", "P").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PieceCatalog {
    kinds: FxHashMap<String, Arc<[MoveRule]>>,
    team_kinds: FxHashMap<(String, String), Arc<[MoveRule]>>,
}

impl PieceCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition for every team.
    ///
    /// Returns the rules previously registered for the kind, if any.
    pub fn register(&mut self, definition: PieceDefinition) -> Option<Arc<[MoveRule]>> {
        self.kinds.insert(definition.kind, Arc::from(definition.rules))
    }

    /// Register a definition used only for `team`.
    pub fn register_for_team(
        &mut self,
        team: impl Into<String>,
        definition: PieceDefinition,
    ) -> Option<Arc<[MoveRule]>> {
        self.team_kinds
            .insert((team.into(), definition.kind), Arc::from(definition.rules))
    }

    /// Builder form of `register`.
    #[must_use]
    pub fn with_kind(mut self, definition: PieceDefinition) -> Self {
        self.register(definition);
        self
    }

    /// Builder form of `register_for_team`.
    #[must_use]
    pub fn with_team_kind(mut self, team: impl Into<String>, definition: PieceDefinition) -> Self {
        self.register_for_team(team, definition);
        self
    }

    /// Rules for a piece of `kind` playing for `team`.
    pub fn rules_for(&self, team: &str, kind: &str) -> EngineResult<Arc<[MoveRule]>> {
        self.team_kinds
            .get(&(team.to_string(), kind.to_string()))
            .or_else(|| self.kinds.get(kind))
            .cloned()
            .ok_or_else(|| EngineError::UnknownPieceKind {
                team: team.to_string(),
                kind: kind.to_string(),
            })
    }

    /// Check if a kind is known for a team.
    #[must_use]
    pub fn contains(&self, team: &str, kind: &str) -> bool {
        self.rules_for(team, kind).is_ok()
    }

    /// Number of registered definitions, overrides included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len() + self.team_kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.team_kinds.is_empty()
    }
}

impl FromIterator<PieceDefinition> for PieceCatalog {
    fn from_iter<I: IntoIterator<Item = PieceDefinition>>(iter: I) -> Self {
        let mut catalog = PieceCatalog::new();
        for definition in iter {
            catalog.register(definition);
        }
        catalog
    }
}
