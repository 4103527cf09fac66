//! Match runner for playing games between players

use std::path::Path;
use std::time::{Duration, Instant};

use alphabeta_engine::{AgentConfig, ConfigError};
use checkers_core::{legal_moves, Color, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::results::{GameResult, MatchResult, PlayerStats};

/// Builds a fresh player for one game, given the color it will play.
pub type PlayerFactory<'a> = &'a dyn Fn(Color) -> Box<dyn Player>;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Clock and search settings handed to alpha-beta players
    pub agent: AgentConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            agent: AgentConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(s)?;
        config.agent.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The side to move had no legal move and lost.
    NoMoves(ColorName),
    /// Too many turns without a capture.
    NoProgress,
    /// `max_moves` reached.
    MoveLimit,
    /// A player answered with a move that was not offered; it loses.
    IllegalMove(ColorName),
}

/// Serializable stand-in for `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorName {
    Red,
    Black,
}

impl From<Color> for ColorName {
    fn from(c: Color) -> Self {
        match c {
            Color::Red => ColorName::Red,
            Color::Black => ColorName::Black,
        }
    }
}

/// One finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub termination: Termination,
    pub plies: u32,
    pub red: PlayerStats,
    pub black: PlayerStats,
}

impl GameRecord {
    /// Result from red's perspective
    pub fn red_result(&self) -> GameResult {
        match self.termination {
            Termination::NoMoves(loser) | Termination::IllegalMove(loser) => {
                if loser == ColorName::Red {
                    GameResult::Loss
                } else {
                    GameResult::Win
                }
            }
            Termination::NoProgress | Termination::MoveLimit => GameResult::Draw,
        }
    }
}

/// Runs matches between two players
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two players
    ///
    /// Returns the result from player1's perspective along with the thinking
    /// time each side used.
    pub fn run_match(
        &self,
        player1: PlayerFactory<'_>,
        player2: PlayerFactory<'_>,
    ) -> (MatchResult, PlayerStats, PlayerStats) {
        let mut result = MatchResult::new();
        let mut stats1 = PlayerStats::default();
        let mut stats2 = PlayerStats::default();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let player1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let (record, p1_result) = if player1_red {
                let mut red = player1(Color::Red);
                let mut black = player2(Color::Black);
                let record = self.play_game(red.as_mut(), black.as_mut());
                stats1.merge(&record.red);
                stats2.merge(&record.black);
                let r = record.red_result();
                (record, r)
            } else {
                let mut red = player2(Color::Red);
                let mut black = player1(Color::Black);
                let record = self.play_game(red.as_mut(), black.as_mut());
                stats1.merge(&record.black);
                stats2.merge(&record.red);
                let r = record.red_result().flipped();
                (record, r)
            };

            result.record(p1_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                player1_color = if player1_red { "red" } else { "black" },
                outcome = ?p1_result,
                termination = ?record.termination,
                plies = record.plies,
                score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                "game finished"
            );
        }

        (result, stats1, stats2)
    }

    /// Play a single game from the standard start.
    pub fn play_game(&self, red: &mut dyn Player, black: &mut dyn Player) -> GameRecord {
        self.play_from(Position::startpos(), red, black)
    }

    /// Play a single game from `start`.
    pub fn play_from(
        &self,
        start: Position,
        red: &mut dyn Player,
        black: &mut dyn Player,
    ) -> GameRecord {
        red.new_game();
        black.new_game();

        let mut pos = start;
        let mut red_stats = PlayerStats::default();
        let mut black_stats = PlayerStats::default();
        let mut plies = 0;

        let termination = loop {
            if plies >= self.config.max_moves {
                break Termination::MoveLimit;
            }
            let moves = legal_moves(&pos);
            if moves.is_empty() {
                break Termination::NoMoves(pos.side_to_move.into());
            }
            if pos.is_no_progress_draw() {
                break Termination::NoProgress;
            }

            let side = pos.side_to_move;
            let player: &mut dyn Player = match side {
                Color::Red => &mut *red,
                Color::Black => &mut *black,
            };
            let stats = match side {
                Color::Red => &mut red_stats,
                Color::Black => &mut black_stats,
            };

            let started = Instant::now();
            let mv = player.decide_move(&pos, &moves);
            stats.record(started.elapsed());

            if !moves.contains(&mv) {
                warn!(player = player.name(), %mv, "illegal move");
                break Termination::IllegalMove(side.into());
            }
            debug!(ply = plies, %side, %mv, "move played");

            pos = pos.apply(&mv);
            plies += 1;
        };

        GameRecord {
            termination,
            plies,
            red: red_stats,
            black: black_stats,
        }
    }
}

/// Quick utility to run a single match with default settings
pub fn quick_match(
    player1: PlayerFactory<'_>,
    player2: PlayerFactory<'_>,
    num_games: u32,
    time_per_move: Duration,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        agent: AgentConfig {
            turns_per_round: 1,
            time_per_round: time_per_move.as_secs_f64(),
            ..AgentConfig::default()
        },
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(player1, player2).0
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
