//! Collaborator contract between a game implementation and the players that
//! search it.

use std::fmt;

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::*;

/// Position score from a fixed player's point of view.
pub type Score = f64;

/// Proven-win sentinel. Heuristic scores stay far inside `(-INFINITY, INFINITY)`,
/// so `INFINITY + 1.0` and `-INFINITY - 1.0` are still distinct values.
pub const INFINITY: Score = 1_000_000.0;

/// The operations a searcher may perform on a game position.
///
/// Implementations must be persistent: `apply` returns a fresh value and never
/// mutates the receiver, so positions can be handed to worker threads freely.
pub trait GameState: Clone + Send + Sync + 'static {
    type Move: Clone + PartialEq + fmt::Debug + Send + 'static;

    /// Turns without a capture after which the game is a forced draw.
    const NO_PROGRESS_LIMIT: u32;

    fn side_to_move(&self) -> Color;

    /// Legal moves in generator order. Empty means the side to move has lost.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&self, mv: &Self::Move) -> Self;

    fn turns_since_last_capture(&self) -> u32;

    fn is_no_progress_draw(&self) -> bool {
        self.turns_since_last_capture() >= Self::NO_PROGRESS_LIMIT
    }
}

/// A game state that also exposes its square contents.
pub trait Board: GameState {
    fn occupants(&self) -> Vec<(Coord, Occupant)>;
}

/// Uniform decision interface shared by every kind of player.
pub trait Player<G: GameState = Position>: Send {
    /// Pick one of `legal_moves` for `position`.
    ///
    /// # Panics
    /// Implementations may panic when `legal_moves` is empty; the caller
    /// promised at least one move.
    fn decide_move(&mut self, position: &G, legal_moves: &[G::Move]) -> G::Move;

    /// Name used in match reports.
    fn name(&self) -> &str;

    /// Reset per-game state (clocks, counters).
    fn new_game(&mut self) {}
}

impl GameState for Position {
    type Move = Move;

    const NO_PROGRESS_LIMIT: u32 = MAX_TURNS_NO_CAPTURE;

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    fn apply(&self, mv: &Move) -> Self {
        Position::apply(self, mv)
    }

    fn turns_since_last_capture(&self) -> u32 {
        self.turns_since_last_capture
    }
}

impl Board for Position {
    fn occupants(&self) -> Vec<(Coord, Occupant)> {
        self.pieces().collect()
    }
}
