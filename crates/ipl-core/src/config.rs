// Configuration loading and parsing (dashboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name of the dashboard config inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataPaths,
    pub limits: Limits,
}

/// Locations of the two source CSV files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataPaths {
    pub matches: String,
    pub deliveries: String,
}

/// Top-N row counts for each ranked section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Limits {
    pub top_winning_teams: usize,
    pub top_team_venues: usize,
    pub top_players: usize,
    pub min_players: usize,
    pub max_players: usize,
    pub top_venues: usize,
    pub top_cities: usize,
    pub top_dismissal_kinds: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            top_winning_teams: 5,
            top_team_venues: 5,
            top_players: 10,
            min_players: 5,
            max_players: 20,
            top_venues: 10,
            top_cities: 10,
            top_dismissal_kinds: 8,
        }
    }
}

impl Limits {
    /// Check a requested player-table size against the configured range.
    pub fn check_players(&self, n: usize) -> Result<usize, ConfigError> {
        if n < self.min_players || n > self.max_players {
            return Err(ConfigError::ValidationError {
                field: "limits.top_players".into(),
                message: format!(
                    "must be between {} and {} inclusive, got {n}",
                    self.min_players, self.max_players
                ),
            });
        }
        Ok(n)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/dashboard.toml` relative to
/// `base_dir`. Does not copy defaults; see `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy `defaults/dashboard.toml` into `config/` unless a config file is
/// already there. Returns whether a copy was made.
pub fn ensure_config_files(base_dir: &Path) -> Result<bool, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(false);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither config/{CONFIG_FILE} nor defaults/{CONFIG_FILE} found in {}; \
                 run from the project root or pass --base-dir",
                base_dir.display()
            ),
        });
    }

    let copy = || -> std::io::Result<()> {
        std::fs::create_dir_all(base_dir.join("config"))?;
        std::fs::copy(&source, &target)?;
        Ok(())
    };
    copy().map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", source.display()),
    })?;
    info!("Created {} from defaults", target.display());
    Ok(true)
}

/// Load config relative to `base_dir`, copying defaults first.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let path_fields: &[(&str, &str)] = &[
        ("data.matches", config.data.matches.as_str()),
        ("data.deliveries", config.data.deliveries.as_str()),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    let l = &config.limits;
    let limit_fields: &[(&str, usize)] = &[
        ("limits.top_winning_teams", l.top_winning_teams),
        ("limits.top_team_venues", l.top_team_venues),
        ("limits.top_players", l.top_players),
        ("limits.min_players", l.min_players),
        ("limits.max_players", l.max_players),
        ("limits.top_venues", l.top_venues),
        ("limits.top_cities", l.top_cities),
        ("limits.top_dismissal_kinds", l.top_dismissal_kinds),
    ];
    for (name, val) in limit_fields {
        if *val == 0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must be > 0".into(),
            });
        }
    }

    if l.min_players > l.max_players {
        return Err(ConfigError::ValidationError {
            field: "limits.min_players".into(),
            message: format!(
                "must not exceed limits.max_players ({} > {})",
                l.min_players, l.max_players
            ),
        });
    }
    l.check_players(l.top_players)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
