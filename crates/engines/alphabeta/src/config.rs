//! Player configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deepening::DeepeningConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("turns_per_round must be at least 1")]
    ZeroTurns,
    #[error("time_per_round must be a positive number of seconds, got {0}")]
    BadRoundTime(f64),
    #[error("safety_margin must be a non-negative number of seconds, got {0}")]
    BadSafetyMargin(f64),
    #[error("max_depth {max} is below start_depth {start}")]
    DepthRange { start: u32, max: u32 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Match contract and search schedule for an alpha-beta player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Turns per round (K).
    pub turns_per_round: u32,
    /// Seconds shared by the turns of one round (T).
    pub time_per_round: f64,
    /// Seconds held back from every move for non-search overhead.
    pub safety_margin: f64,
    pub start_depth: u32,
    pub max_depth: Option<u32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            turns_per_round: 5,
            time_per_round: 10.0,
            safety_margin: 0.05,
            start_depth: 2,
            max_depth: None,
        }
    }
}

impl AgentConfig {
    pub fn new(turns_per_round: u32, time_per_round: f64) -> Self {
        Self {
            turns_per_round,
            time_per_round,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turns_per_round == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if !(self.time_per_round.is_finite() && self.time_per_round > 0.0) {
            return Err(ConfigError::BadRoundTime(self.time_per_round));
        }
        if !(self.safety_margin.is_finite() && self.safety_margin >= 0.0) {
            return Err(ConfigError::BadSafetyMargin(self.safety_margin));
        }
        if let Some(max) = self.max_depth {
            if max < self.start_depth {
                return Err(ConfigError::DepthRange {
                    start: self.start_depth,
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn deepening(&self) -> DeepeningConfig {
        DeepeningConfig {
            start_depth: self.start_depth,
            max_depth: self.max_depth,
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
