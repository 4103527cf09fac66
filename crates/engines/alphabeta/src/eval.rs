//! Material and advancement evaluation for checkers.

use checkers_core::{Board, Color, Coord, GameState, Occupant, Score, BOARD_SIZE, INFINITY};

/// A king is worth the same wherever it stands.
const KING_VALUE: i32 = 10;
/// A man that has crossed into the enemy half.
const ADVANCED_MAN_VALUE: i32 = 7;
/// A man still in its own half.
const HOME_MAN_VALUE: i32 = 5;

/// Scores a position from a fixed player's point of view.
///
/// Implementations must be pure: the same position always gets the same score.
pub trait Evaluator<G: GameState>: Send + Sync + 'static {
    fn evaluate(&self, state: &G) -> Score;
}

/// Checkers evaluation for one side.
///
/// - Side to move has no legal moves: `INFINITY` if that side is the opponent,
///   `-INFINITY` if it is the agent.
/// - No-progress draw reached: exactly `0.0`.
/// - Otherwise: kings ±10, men ±7 in the enemy half and ±5 at home, summed over
///   the board and divided by the number of pieces. The result lies in
///   `[-10, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckersEvaluator {
    agent: Color,
}

impl CheckersEvaluator {
    pub fn new(agent: Color) -> Self {
        Self { agent }
    }

    pub fn agent(&self) -> Color {
        self.agent
    }

    fn piece_value(&self, coord: Coord, occ: Occupant) -> i32 {
        let Some(side) = occ.color() else {
            return 0;
        };
        let sign = if side == self.agent { 1 } else { -1 };
        if occ.is_king() {
            return sign * KING_VALUE;
        }
        if in_enemy_half(side, coord) {
            sign * ADVANCED_MAN_VALUE
        } else {
            sign * HOME_MAN_VALUE
        }
    }
}

impl<G: Board> Evaluator<G> for CheckersEvaluator {
    /// # Panics
    /// Panics if the position still has legal moves but no pieces; such a
    /// position cannot come from a valid game.
    fn evaluate(&self, state: &G) -> Score {
        if state.legal_moves().is_empty() {
            return if state.side_to_move() != self.agent {
                INFINITY
            } else {
                -INFINITY
            };
        }
        if state.is_no_progress_draw() {
            return 0.0;
        }

        let mut score = 0i32;
        let mut pieces = 0i32;
        for (coord, occ) in state.occupants() {
            if occ.is_empty() {
                continue;
            }
            pieces += 1;
            score += self.piece_value(coord, occ);
        }
        assert!(pieces > 0, "evaluated a position with moves but no pieces");

        f64::from(score) / f64::from(pieces)
    }
}

/// Red advances toward higher rows, black toward row 0.
fn in_enemy_half(side: Color, coord: Coord) -> bool {
    match side {
        Color::Red => coord.row >= BOARD_SIZE / 2,
        Color::Black => coord.row < BOARD_SIZE / 2,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
