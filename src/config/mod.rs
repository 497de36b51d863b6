//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::RESERVED_NAME_CHAR;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// League roster rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Fewest teams the roster may shrink to
    #[serde(default = "default_min_teams")]
    pub min_teams: usize,

    /// Most teams the roster may grow to
    #[serde(default = "default_max_teams")]
    pub max_teams: usize,

    /// Roster used for a fresh league and for "reset order"
    #[serde(default = "default_teams")]
    pub default_teams: Vec<String>,
}

fn default_min_teams() -> usize {
    2
}

fn default_max_teams() -> usize {
    9
}

fn default_teams() -> Vec<String> {
    ["青森A60", "青森B60", "八戸A60", "八戸B60", "七戸60", "BonSagesse"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            min_teams: default_min_teams(),
            max_teams: default_max_teams(),
            default_teams: default_teams(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub league: LeagueConfig,
}

fn default_state_path() -> PathBuf {
    PathBuf::from("./data/league_state.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            log_level: default_log_level(),
            league: LeagueConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let league = &self.league;

        if league.min_teams < 2 {
            return Err(ConfigError::ValidationError(
                "min_teams must be at least 2".to_string(),
            ));
        }

        if league.max_teams < league.min_teams {
            return Err(ConfigError::ValidationError(format!(
                "max_teams ({}) must not be below min_teams ({})",
                league.max_teams, league.min_teams
            )));
        }

        let count = league.default_teams.len();
        if count < league.min_teams || count > league.max_teams {
            return Err(ConfigError::ValidationError(format!(
                "default_teams has {} teams, expected {} to {}",
                count, league.min_teams, league.max_teams
            )));
        }

        let mut seen = HashSet::new();
        for name in &league.default_teams {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "default_teams contains a blank name".to_string(),
                ));
            }
            if name.contains(RESERVED_NAME_CHAR) {
                return Err(ConfigError::ValidationError(format!(
                    "default team '{}' must not contain '{}'",
                    name, RESERVED_NAME_CHAR
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "default_teams contains '{}' twice",
                    name
                )));
            }
        }

        Ok(())
    }
}
