//! Random Move Checkers Player
//!
//! A simple player that selects uniformly at random from the legal moves it
//! is handed. Useful for:
//! - Testing the match harness
//! - Baseline comparisons (any searching player should easily beat this)

use checkers_core::{GameState, Player, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that picks a random legal move.
///
/// No evaluation, no clock. It is the simplest implementation of [`Player`].
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence, for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Player<G> for RandomPlayer {
    /// # Panics
    /// Panics if `legal_moves` is empty.
    fn decide_move(&mut self, _position: &G, legal_moves: &[G::Move]) -> G::Move {
        match legal_moves.choose(&mut self.rng) {
            Some(mv) => mv.clone(),
            None => panic!("decide_move called without legal moves"),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

/// Convenience for the common case of a checkers position.
pub fn random_move(position: &Position, seed: u64) -> Option<checkers_core::Move> {
    let moves = checkers_core::legal_moves(position);
    if moves.is_empty() {
        return None;
    }
    Some(RandomPlayer::with_seed(seed).decide_move(position, &moves))
}
