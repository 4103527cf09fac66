//! Iterative deepening under a per-move deadline.
//!
//! Each depth is searched on its own worker thread. The driver waits for the
//! answer with a timeout; a search that misses the deadline is abandoned and
//! the best result from the previous depth stands.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use checkers_core::{Deadline, GameState, Score, StopFlag, INFINITY};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::eval::Evaluator;
use crate::search::{AlphaBeta, DeepeningCriterion};

/// Depth schedule for iterative deepening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepeningConfig {
    /// First depth searched. Depth 1 is too shallow to be worth a worker.
    pub start_depth: u32,
    /// Stop after this depth even if time remains (None = until the deadline).
    pub max_depth: Option<u32>,
}

impl Default for DeepeningConfig {
    fn default() -> Self {
        Self {
            start_depth: 2,
            max_depth: None,
        }
    }
}

/// What came back from one time-limited search call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<M> {
    Completed { score: Score, best_move: Option<M> },
    TimedOut,
    ResourceExhausted,
}

/// How one depth's search ended, as recorded in the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    /// Completed in time and became the new best result.
    Adopted(Score),
    /// Completed, but only after the deadline had passed; discarded.
    Late,
    TimedOut,
    ResourceExhausted,
    /// Completed without a move (root is terminal); nothing to adopt.
    NoMove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub depth: u32,
    pub result: IterationResult,
}

/// Why the driver stopped deepening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    SingleMove,
    ProvenWin,
    ProvenLoss,
    TimedOut,
    ResourceExhausted,
    DeadlinePassed,
    MaxDepth,
    Terminal,
}

/// Outcome of one decision, including every search the driver started.
#[derive(Debug, Clone)]
pub struct DeepeningReport<M> {
    pub best_move: M,
    /// `-INFINITY` until a depth completes.
    pub best_score: Score,
    /// Deepest depth whose result was adopted.
    pub completed_depth: Option<u32>,
    pub iterations: Vec<Iteration>,
    pub stop_reason: StopReason,
}

impl<M> DeepeningReport<M> {
    /// Report for a decision made without searching.
    pub fn single(best_move: M) -> Self {
        Self {
            best_move,
            best_score: -INFINITY,
            completed_depth: None,
            iterations: Vec::new(),
            stop_reason: StopReason::SingleMove,
        }
    }
}

/// Repeats alpha-beta searches at increasing depth until the deadline.
pub struct IterativeDeepening<G, E, D> {
    engine: Arc<AlphaBeta<G, E, D>>,
    config: DeepeningConfig,
}

impl<G, E, D> IterativeDeepening<G, E, D>
where
    G: GameState,
    E: Evaluator<G>,
    D: DeepeningCriterion<G>,
{
    pub fn new(engine: AlphaBeta<G, E, D>, config: DeepeningConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config,
        }
    }

    pub fn config(&self) -> &DeepeningConfig {
        &self.config
    }

    pub fn engine(&self) -> &AlphaBeta<G, E, D> {
        &self.engine
    }

    /// Picks a move for `position` before `deadline`.
    ///
    /// The first entry of `legal_moves` is the fallback, returned when no
    /// depth completes in time. Timeouts and worker failures end the loop but
    /// are never surfaced as errors.
    ///
    /// # Panics
    /// Panics if `legal_moves` is empty.
    pub fn decide(
        &self,
        position: &G,
        legal_moves: &[G::Move],
        deadline: &Deadline,
    ) -> DeepeningReport<G::Move> {
        let Some(first) = legal_moves.first() else {
            panic!("decide called without legal moves");
        };
        if legal_moves.len() == 1 {
            return DeepeningReport::single(first.clone());
        }

        let mut report = DeepeningReport {
            best_move: first.clone(),
            best_score: -INFINITY,
            completed_depth: None,
            iterations: Vec::new(),
            stop_reason: StopReason::TimedOut,
        };
        let mut depth = self.config.start_depth.max(1);

        report.stop_reason = loop {
            if self.config.max_depth.is_some_and(|max| depth > max) {
                break StopReason::MaxDepth;
            }
            let Some(remaining) = deadline.remaining() else {
                break StopReason::TimedOut;
            };

            debug!(
                depth,
                remaining_ms = remaining.as_millis() as u64,
                best_score = report.best_score,
                best_move = ?report.best_move,
                "going to depth"
            );

            let result = match self.search_limited(position, depth, remaining) {
                SearchOutcome::TimedOut => {
                    debug!(depth, "no more time");
                    report.iterations.push(Iteration {
                        depth,
                        result: IterationResult::TimedOut,
                    });
                    break StopReason::TimedOut;
                }
                SearchOutcome::ResourceExhausted => {
                    report.iterations.push(Iteration {
                        depth,
                        result: IterationResult::ResourceExhausted,
                    });
                    break StopReason::ResourceExhausted;
                }
                SearchOutcome::Completed { score, best_move } => (score, best_move),
            };

            if deadline.is_expired() {
                debug!(depth, "search finished after the deadline, discarded");
                report.iterations.push(Iteration {
                    depth,
                    result: IterationResult::Late,
                });
                break StopReason::DeadlinePassed;
            }

            let (score, Some(mv)) = result else {
                report.iterations.push(Iteration {
                    depth,
                    result: IterationResult::NoMove,
                });
                break StopReason::Terminal;
            };

            report.best_score = score;
            report.best_move = mv;
            report.completed_depth = Some(depth);
            report.iterations.push(Iteration {
                depth,
                result: IterationResult::Adopted(score),
            });

            if score >= INFINITY {
                info!(depth, best_move = ?report.best_move, "move guarantees victory");
                break StopReason::ProvenWin;
            }
            if score <= -INFINITY {
                info!(depth, "all lines lose");
                break StopReason::ProvenLoss;
            }

            depth += 1;
        };

        report
    }

    /// Runs one depth-bounded search on a worker thread, waiting at most `limit`.
    fn search_limited(&self, position: &G, depth: u32, limit: Duration) -> SearchOutcome<G::Move> {
        let (tx, rx) = mpsc::channel();
        let stop = StopFlag::new();

        let engine = Arc::clone(&self.engine);
        let root = position.clone();
        let worker_stop = stop.clone();
        let spawned = thread::Builder::new()
            .name(format!("alphabeta-depth-{depth}"))
            .spawn(move || {
                let result =
                    engine.search_with_stop(&root, depth, -INFINITY, INFINITY, true, &worker_stop);
                // The driver may have stopped listening.
                let _ = tx.send(result);
            });
        if let Err(err) = spawned {
            warn!(depth, error = %err, "could not start search worker");
            return SearchOutcome::ResourceExhausted;
        }

        match rx.recv_timeout(limit) {
            Ok((score, best_move)) => SearchOutcome::Completed { score, best_move },
            Err(RecvTimeoutError::Timeout) => {
                stop.stop();
                SearchOutcome::TimedOut
            }
            // A worker that panics (allocation failure included) drops `tx`.
            Err(RecvTimeoutError::Disconnected) => {
                warn!(depth, "search worker died before reporting");
                SearchOutcome::ResourceExhausted
            }
        }
    }
}

#[cfg(test)]
#[path = "deepening_tests.rs"]
mod deepening_tests;
