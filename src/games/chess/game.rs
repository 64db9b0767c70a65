//! Chess piece definitions and opening layout.

use crate::board::Board;
use crate::core::{
    BoardConfig, EndConditionConfig, EndConditionType, EngineResult, GameSetup, PieceSpec, PlayerSpec,
};
use crate::moves::{symmetric_vectors, CaptureMode, MoveRule, PieceCatalog, PieceDefinition, RuleCondition};
use crate::session::Game;

pub const WHITE: &str = "white";
pub const BLACK: &str = "black";

const BACK_RANK: [&str; 8] = ["R", "N", "B", "Q", "K", "B", "N", "R"];

fn slides(vectors: &[(i32, i32)]) -> Vec<MoveRule> {
    vectors
        .iter()
        .map(|&(dr, dc)| MoveRule::slide(dr, dc, CaptureMode::Either))
        .collect()
}

/// Pawns only differ by direction.
fn pawn(forward: i32) -> PieceDefinition {
    PieceDefinition::new("P").with_rules([
        MoveRule::step(forward, 0, CaptureMode::MoveOnly),
        MoveRule::slide_up_to(forward, 0, CaptureMode::MoveOnly, 2).when(RuleCondition::Unmoved),
        MoveRule::step(forward, -1, CaptureMode::CaptureOnly),
        MoveRule::step(forward, 1, CaptureMode::CaptureOnly),
    ])
}

/// Move rules for K, Q, R, B, N and the two pawn directions.
#[must_use]
pub fn standard_catalog() -> PieceCatalog {
    const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
    let all: Vec<(i32, i32)> = ORTHOGONAL.iter().chain(DIAGONAL.iter()).copied().collect();

    let king = all
        .iter()
        .map(|&(dr, dc)| MoveRule::step(dr, dc, CaptureMode::Either));
    let knight = symmetric_vectors(2, 1)
        .into_iter()
        .map(|v| MoveRule::step(v.dr, v.dc, CaptureMode::Either));

    PieceCatalog::new()
        .with_kind(PieceDefinition::new("K").with_rules(king))
        .with_kind(PieceDefinition::new("Q").with_rules(slides(&all)))
        .with_kind(PieceDefinition::new("R").with_rules(slides(&ORTHOGONAL)))
        .with_kind(PieceDefinition::new("B").with_rules(slides(&DIAGONAL)))
        .with_kind(PieceDefinition::new("N").with_rules(knight))
        .with_team_kind(WHITE, pawn(-1))
        .with_team_kind(BLACK, pawn(1))
}

/// The opening position with checkmate as the only end condition.
#[must_use]
pub fn standard_setup() -> GameSetup {
    StandardChessBuilder::new().setup()
}

/// A fresh board in the opening position.
pub fn standard_board() -> EngineResult<Board> {
    StandardChessBuilder::new().build_board()
}

/// Builder for a chess game.
#[derive(Clone, Debug)]
pub struct StandardChessBuilder {
    enforce_turn_order: bool,
    clock: Option<(u32, u32)>,
    end_conditions: Vec<EndConditionConfig>,
}

impl Default for StandardChessBuilder {
    fn default() -> Self {
        Self {
            enforce_turn_order: true,
            clock: None,
            end_conditions: vec![EndConditionConfig::new(EndConditionType::Checkmate)],
        }
    }
}

impl StandardChessBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }

    /// Give both players the same clock.
    #[must_use]
    pub fn with_clock(mut self, clock_seconds: u32, increment_seconds: u32) -> Self {
        self.clock = Some((clock_seconds, increment_seconds));
        self
    }

    /// Add an end condition after the default checkmate check.
    #[must_use]
    pub fn with_end_condition(mut self, condition: EndConditionConfig) -> Self {
        self.end_conditions.push(condition);
        self
    }

    /// Replace the end conditions entirely.
    #[must_use]
    pub fn end_conditions(mut self, conditions: Vec<EndConditionConfig>) -> Self {
        self.end_conditions = conditions;
        self
    }

    /// The assembler output for this game.
    #[must_use]
    pub fn setup(&self) -> GameSetup {
        let mut setup = GameSetup::new(BoardConfig::new(8, 8).with_turn_order(self.enforce_turn_order));

        for team in [WHITE, BLACK] {
            let player = PlayerSpec::new(team);
            setup = setup.with_player(match self.clock {
                Some((clock, increment)) => player.with_clock(clock, increment),
                None => player,
            });
        }

        for (team, back, pawns) in [(BLACK, 0, 1), (WHITE, 7, 6)] {
            for (col, kind) in (0..).zip(BACK_RANK) {
                setup = setup
                    .with_piece(PieceSpec::new(team, kind, (back, col)))
                    .with_piece(PieceSpec::new(team, "P", (pawns, col)));
            }
        }

        setup.end_conditions = self.end_conditions.clone();
        setup
    }

    /// Assemble the board only.
    pub fn build_board(&self) -> EngineResult<Board> {
        Board::from_setup(&self.setup(), &standard_catalog())
    }

    /// Assemble a playable game.
    pub fn build(&self) -> EngineResult<Game> {
        Game::from_setup(&self.setup(), &standard_catalog())
    }
}
