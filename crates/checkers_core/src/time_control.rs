//! Per-move deadlines and the stop flag used to abandon background searches.
//!
//! Deadlines are measured on the monotonic wall clock (`Instant`). A deadline
//! carries a signed allowance in seconds: a round that overran its budget
//! produces a zero or negative allowance, which reads as "already expired".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared flag telling a search worker that nobody is waiting for its result.
///
/// Cheap to clone; `is_stopped()` is a relaxed atomic load and can be polled at
/// every node.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    stopped: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Time allowance for one move, anchored at the moment the move started.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    /// Seconds available for this move. May be zero or negative.
    allowance: f64,
}

impl Deadline {
    /// A deadline starting now.
    pub fn new(allowance: f64) -> Self {
        Self::starting_at(Instant::now(), allowance)
    }

    pub fn starting_at(start: Instant, allowance: f64) -> Self {
        Self { start, allowance }
    }

    /// A deadline that never expires in practice. Used by fixed-depth searches.
    pub fn unbounded() -> Self {
        Self::new(f64::MAX)
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn allowance(&self) -> f64 {
        self.allowance
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds left, negative once the deadline has passed.
    pub fn remaining_secs(&self) -> f64 {
        self.allowance - self.elapsed().as_secs_f64()
    }

    /// Time left, or `None` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        let left = self.remaining_secs();
        if left > 0.0 {
            Some(Duration::try_from_secs_f64(left).unwrap_or(Duration::MAX))
        } else {
            None
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs() <= 0.0
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
