//! Match configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use baghchal_core::RuleConfig;
use mcts_engine::MctsConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a match
///
/// ```toml
/// num_games = 20
/// max_plies = 300
///
/// [mcts]
/// iterations = 500
///
/// [rules]
/// no_progress_limit = 80
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies after which an unfinished game is adjudicated a draw
    pub max_plies: u32,
    /// Swap sides every game; engine1 takes the tigers in even games
    pub alternate_sides: bool,
    /// Log every finished game at info level
    pub verbose: bool,
    /// Search settings; `iterations` is the per-move budget for every engine
    pub mcts: MctsConfig,
    pub rules: RuleConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 400,
            alternate_sides: true,
            verbose: true,
            mcts: MctsConfig::default(),
            rules: RuleConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
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

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
