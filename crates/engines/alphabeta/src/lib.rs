//! Alpha-Beta Checkers Player
//!
//! Time-bounded iterative-deepening minimax for checkers.
//!
//! This engine uses:
//! - Minimax with alpha-beta pruning and a selective-deepening hook
//! - Iterative deepening from depth 2, each depth on a worker thread that is
//!   abandoned when the move's deadline passes
//! - Material/advancement evaluation normalized by piece count
//! - A round clock that turns "K turns per T seconds" into per-move deadlines

mod budget;
mod config;
mod deepening;
mod eval;
mod player;
mod search;

pub use budget::TimeBudget;
pub use config::{AgentConfig, ConfigError};
pub use deepening::{
    DeepeningConfig, DeepeningReport, Iteration, IterationResult, IterativeDeepening,
    SearchOutcome, StopReason,
};
pub use eval::{CheckersEvaluator, Evaluator};
pub use player::AlphaBetaPlayer;
pub use search::{AlphaBeta, DeepeningCriterion, NeverDeepen};
