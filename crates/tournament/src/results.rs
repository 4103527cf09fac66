//! Match results and reporting

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from player1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Thinking time spent by one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub moves: u32,
    pub total_secs: f64,
    pub max_secs: f64,
}

impl PlayerStats {
    pub fn record(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        self.moves += 1;
        self.total_secs += secs;
        self.max_secs = self.max_secs.max(secs);
    }

    pub fn merge(&mut self, other: &PlayerStats) {
        self.moves += other.moves;
        self.total_secs += other.total_secs;
        self.max_secs = self.max_secs.max(other.max_secs);
    }

    pub fn mean_secs(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.total_secs / self.moves as f64
        }
    }
}

/// Everything a finished match reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub player1: String,
    pub player2: String,
    pub result: MatchResult,
    pub player1_stats: PlayerStats,
    pub player2_stats: PlayerStats,
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.player1, self.player2
        ));
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws\n",
            self.player1, self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n\n", self.result.score() * 100.0));

        report.push_str(&format!(
            "{:<20} {:>8} {:>12} {:>12}\n",
            "Player", "Moves", "Mean (s)", "Max (s)"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');
        for (name, stats) in [
            (&self.player1, &self.player1_stats),
            (&self.player2, &self.player2_stats),
        ] {
            report.push_str(&format!(
                "{:<20} {:>8} {:>12.3} {:>12.3}\n",
                name,
                stats.moves,
                stats.mean_secs(),
                stats.max_secs
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
