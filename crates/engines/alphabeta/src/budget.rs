//! Splits a "K turns per T seconds" round allowance into per-move deadlines.

use std::time::{Duration, Instant};

use checkers_core::Deadline;

/// Round clock owned by one player.
///
/// Each move gets `time_remaining / turns_remaining - safety_margin` seconds.
/// When the last turn of a round ends, the full allowance comes back no matter
/// how much of it was used. Overruns are not clamped: `time_remaining` may go
/// negative, which makes the next deadlines zero or negative.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    turns_per_round: u32,
    time_per_round: f64,
    safety_margin: f64,
    turns_remaining: u32,
    time_remaining: f64,
    current: Option<Deadline>,
}

impl TimeBudget {
    /// # Panics
    /// Panics if `turns_per_round` is zero.
    pub fn new(turns_per_round: u32, time_per_round: f64, safety_margin: f64) -> Self {
        assert!(turns_per_round > 0, "a round needs at least one turn");
        Self {
            turns_per_round,
            time_per_round,
            safety_margin,
            turns_remaining: turns_per_round,
            time_remaining: time_per_round,
            current: None,
        }
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Seconds left in the current round. Negative after an overrun.
    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    /// Deadline of the move in progress, if any.
    pub fn current_deadline(&self) -> Option<&Deadline> {
        self.current.as_ref()
    }

    /// Allowance the next move would get, in seconds.
    pub fn move_allowance(&self) -> f64 {
        self.time_remaining / f64::from(self.turns_remaining) - self.safety_margin
    }

    /// Starts the clock for a move and returns its deadline.
    pub fn begin_move(&mut self) -> Deadline {
        let deadline = Deadline::starting_at(Instant::now(), self.move_allowance());
        self.current = Some(deadline);
        deadline
    }

    /// Closes the move started by [`begin_move`](Self::begin_move), charging
    /// the time it actually took.
    pub fn end_move(&mut self) {
        let elapsed = self
            .current
            .take()
            .map(|d| d.elapsed())
            .unwrap_or(Duration::ZERO);
        self.charge(elapsed);
    }

    /// Books one finished turn that took `elapsed`.
    pub fn charge(&mut self, elapsed: Duration) {
        if self.turns_remaining == 1 {
            self.reset();
        } else {
            self.turns_remaining -= 1;
            self.time_remaining -= elapsed.as_secs_f64();
        }
    }

    /// Starts a fresh round with the full allowance.
    pub fn reset(&mut self) {
        self.turns_remaining = self.turns_per_round;
        self.time_remaining = self.time_per_round;
        self.current = None;
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod budget_tests;
