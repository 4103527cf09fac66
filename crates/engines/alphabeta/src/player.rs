//! The alpha-beta player: round clock + iterative deepening + evaluation.

use checkers_core::{Board, Color, Player, Position};
use tracing::{debug, warn};

use crate::budget::TimeBudget;
use crate::config::{AgentConfig, ConfigError};
use crate::deepening::{DeepeningReport, IterativeDeepening};
use crate::eval::CheckersEvaluator;
use crate::search::{AlphaBeta, NeverDeepen};

/// Checkers player that searches as deep as its share of the round allows.
pub struct AlphaBetaPlayer<G: Board = Position> {
    name: String,
    color: Color,
    config: AgentConfig,
    budget: TimeBudget,
    driver: IterativeDeepening<G, CheckersEvaluator, NeverDeepen>,
    last_report: Option<DeepeningReport<G::Move>>,
}

impl<G: Board> AlphaBetaPlayer<G> {
    /// Builds a player for `color` under the given match contract.
    pub fn new(color: Color, config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = AlphaBeta::new(CheckersEvaluator::new(color), NeverDeepen);
        Ok(Self {
            name: format!("AlphaBeta ({color})"),
            color,
            budget: TimeBudget::new(
                config.turns_per_round,
                config.time_per_round,
                config.safety_margin,
            ),
            driver: IterativeDeepening::new(engine, config.deepening()),
            config,
            last_report: None,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn budget(&self) -> &TimeBudget {
        &self.budget
    }

    /// Search report of the most recent decision.
    pub fn last_report(&self) -> Option<&DeepeningReport<G::Move>> {
        self.last_report.as_ref()
    }
}

impl<G: Board> Player<G> for AlphaBetaPlayer<G> {
    /// # Panics
    /// Panics if `legal_moves` is empty.
    fn decide_move(&mut self, position: &G, legal_moves: &[G::Move]) -> G::Move {
        let Some(fallback) = legal_moves.first() else {
            panic!("decide_move called without legal moves");
        };

        let deadline = self.budget.begin_move();
        let report = if legal_moves.len() == 1 {
            DeepeningReport::single(fallback.clone())
        } else {
            self.driver.decide(position, legal_moves, &deadline)
        };
        self.budget.end_move();

        debug!(
            color = %self.color,
            allowance = deadline.allowance(),
            depth = ?report.completed_depth,
            score = report.best_score,
            reason = ?report.stop_reason,
            "move decided"
        );

        let chosen = if legal_moves.contains(&report.best_move) {
            report.best_move.clone()
        } else {
            warn!(best_move = ?report.best_move, "searched move not among supplied moves");
            fallback.clone()
        };
        self.last_report = Some(report);
        chosen
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.budget.reset();
        self.last_report = None;
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
