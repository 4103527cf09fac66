//! Minimax with alpha-beta pruning and a selective-deepening hook.

use std::marker::PhantomData;

use checkers_core::{GameState, Score, StopFlag};

use crate::eval::Evaluator;

/// Decides whether a node should be searched one ply past its nominal depth.
///
/// Consulted exactly once per visited node. Must not have side effects.
pub trait DeepeningCriterion<G: GameState>: Send + Sync + 'static {
    fn should_deepen(&self, state: &G) -> bool;
}

/// The criterion used in play: never extends.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverDeepen;

impl<G: GameState> DeepeningCriterion<G> for NeverDeepen {
    fn should_deepen(&self, _state: &G) -> bool {
        false
    }
}

/// Depth-bounded minimax search from a fixed player's point of view.
///
/// The search itself never reads a clock. A caller that stops waiting for a
/// result raises the `StopFlag`; the search then unwinds as fast as it can and
/// its answer is meaningless.
pub struct AlphaBeta<G, E, D = NeverDeepen> {
    evaluator: E,
    deepening: D,
    _game: PhantomData<fn() -> G>,
}

impl<G, E, D> AlphaBeta<G, E, D>
where
    G: GameState,
    E: Evaluator<G>,
    D: DeepeningCriterion<G>,
{
    pub fn new(evaluator: E, deepening: D) -> Self {
        Self {
            evaluator,
            deepening,
            _game: PhantomData,
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn deepening(&self) -> &D {
        &self.deepening
    }

    /// Searches `state` to `depth` plies and returns the minimax score with
    /// the move that achieves it.
    ///
    /// The move is `None` only at terminal nodes (depth exhausted, no legal
    /// moves, or no-progress draw). Whenever `state` has a legal move and
    /// `depth > 0`, a move is returned even if every line scores as a loss.
    pub fn search(
        &self,
        state: &G,
        depth: u32,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> (Score, Option<G::Move>) {
        self.search_with_stop(state, depth, alpha, beta, maximizing, &StopFlag::new())
    }

    /// Like [`search`](Self::search), abandoning work once `stop` is raised.
    pub fn search_with_stop(
        &self,
        state: &G,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        stop: &StopFlag,
    ) -> (Score, Option<G::Move>) {
        if stop.is_stopped() {
            return (0.0, None);
        }

        let deepen = self.deepening.should_deepen(state);
        if (depth == 0 && !deepen) || state.is_no_progress_draw() {
            return (self.evaluator.evaluate(state), None);
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return (self.evaluator.evaluate(state), None);
        }

        let child_depth = if deepen { depth } else { depth - 1 };
        let mut best: Option<(Score, G::Move)> = None;

        for mv in moves {
            let child = state.apply(&mv);
            let (score, _) =
                self.search_with_stop(&child, child_depth, alpha, beta, !maximizing, stop);

            let improves = match &best {
                None => true,
                Some((best_score, _)) if maximizing => score > *best_score,
                Some((best_score, _)) => score < *best_score,
            };
            if improves {
                best = Some((score, mv));
            }

            let best_score = best.as_ref().map_or(score, |(s, _)| *s);
            if maximizing {
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    break;
                }
            } else {
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None => (self.evaluator.evaluate(state), None),
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
