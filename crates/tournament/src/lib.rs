//! Match harness for checkers players
//!
//! This crate provides infrastructure for:
//! - Playing games between any two [`checkers_core::Player`] implementations
//! - Recording results and per-player thinking time
//! - Text and JSON match reports
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline
//! cargo run -p tournament -- match alphabeta random --games 20
//!
//! # With clock settings from a file, JSON output
//! cargo run -p tournament -- match alphabeta alphabeta --config match.toml --json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
