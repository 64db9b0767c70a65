//! Ordered evaluation of end conditions.

use tracing::info;

use super::checkmate::CheckmateCondition;
use super::condition::{EndCondition, GameState};
use super::elimination::EliminationCondition;
use super::move_limit::MoveLimitCondition;
use crate::board::Board;
use crate::core::{EndConditionConfig, EndConditionType, EngineError, EngineResult};

/// Runs end conditions in configured order after every turn.
///
/// The first evaluator reporting something other than `Running` decides the
/// result. Once a terminal result is reported it is returned forever
/// without consulting the evaluators again.
#[derive(Default)]
pub struct EndConditionRunner {
    conditions: Vec<Box<dyn EndCondition>>,
    outcome: Option<GameState>,
}

impl EndConditionRunner {
    /// Create a runner with no conditions. It reports `Running` forever.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configured evaluators against the initial board.
    pub fn from_config(configs: &[EndConditionConfig], board: &Board) -> EngineResult<Self> {
        let mut runner = Self::new();
        for config in configs {
            runner.push(build_condition(config, board)?);
        }
        Ok(runner)
    }

    /// Append an evaluator.
    pub fn push(&mut self, condition: Box<dyn EndCondition>) {
        self.conditions.push(condition);
    }

    /// Builder form of `push`.
    #[must_use]
    pub fn with_condition(mut self, condition: impl EndCondition + 'static) -> Self {
        self.push(Box::new(condition));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Names of the evaluators, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|c| c.name())
    }

    /// The terminal result, once one has been reported.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameState> {
        self.outcome.as_ref()
    }

    /// Evaluate every condition in order and report the first result that is
    /// not `Running`.
    pub fn evaluate(&mut self, board: &Board) -> EngineResult<GameState> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.clone());
        }

        for condition in &mut self.conditions {
            let state = condition.evaluate(board)?;
            if state.is_terminal() {
                info!(condition = condition.name(), %state, turns = board.history().len(), "game over");
                self.outcome = Some(state.clone());
                return Ok(state);
            }
        }
        Ok(GameState::Running)
    }
}

impl std::fmt::Debug for EndConditionRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndConditionRunner")
            .field("conditions", &self.names().collect::<Vec<_>>())
            .field("outcome", &self.outcome)
            .finish()
    }
}

fn build_condition(config: &EndConditionConfig, board: &Board) -> EngineResult<Box<dyn EndCondition>> {
    match config.condition_type {
        EndConditionType::Elimination => {
            let kinds = config.property("kinds").unwrap_or_default();
            Ok(Box::new(EliminationCondition::new(kinds, board)?))
        }
        EndConditionType::Checkmate => Ok(Box::new(CheckmateCondition::new())),
        EndConditionType::MoveLimit => {
            let turns = match config.property("turns") {
                Some([value]) => value.trim().parse::<usize>().map_err(|_| {
                    EngineError::InvalidEndCondition(format!("move limit turns is not a number: {value}"))
                })?,
                _ => {
                    return Err(EngineError::InvalidEndCondition(
                        "move limit needs exactly one turns value".to_string(),
                    ))
                }
            };
            Ok(Box::new(MoveLimitCondition::new(turns)))
        }
    }
}
