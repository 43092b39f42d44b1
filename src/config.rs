//! Application configuration
//!
//! Read from `$HOME/.seat-tui/config.json`. Every field is optional; a
//! missing file means all defaults.

use crate::model::source::{
    DEFAULT_COLS, DEFAULT_OCCUPANT_NAMES, DEFAULT_ROWS, MAX_COLS, MAX_ROWS,
};
use crate::model::{FixtureSeatSource, RandomSeatSource, SeatSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows of the generated demo grid
    pub rows: u16,
    /// Columns of the generated demo grid
    pub cols: u16,
    /// Names handed out to randomly reserved/occupied seats
    pub occupant_names: Vec<String>,
    /// Seed for the demo generator; random when absent
    pub seed: Option<u64>,
    /// JSON seat fixture to load instead of generating seats
    pub fixture_path: Option<PathBuf>,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            occupant_names: DEFAULT_OCCUPANT_NAMES.iter().map(|n| n.to_string()).collect(),
            seed: None,
            fixture_path: None,
            tick_rate_ms: 250,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".seat-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults
    ///
    /// A malformed file is logged and ignored rather than blocking startup.
    pub fn load() -> Config {
        let Some(config_path) = Self::config_path() else {
            return Config::default();
        };
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Config::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", config_path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config: {:#}", e);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Clamp grid sizes to something the seat grid can show
    fn sanitized(mut self) -> Self {
        if self.rows == 0 {
            self.rows = DEFAULT_ROWS;
        }
        if self.cols == 0 {
            self.cols = DEFAULT_COLS;
        }
        if self.rows > MAX_ROWS || self.cols > MAX_COLS {
            tracing::warn!(
                "Grid {}x{} exceeds the {}x{} limit, clamping",
                self.rows,
                self.cols,
                MAX_ROWS,
                MAX_COLS
            );
            self.rows = self.rows.min(MAX_ROWS);
            self.cols = self.cols.min(MAX_COLS);
        }
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = Config::default().tick_rate_ms;
        }
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Build the seat source this config asks for
    pub fn seat_source(&self) -> Box<dyn SeatSource> {
        if let Some(path) = &self.fixture_path {
            return Box::new(FixtureSeatSource::new(path));
        }

        let mut source =
            RandomSeatSource::new(self.rows, self.cols).with_names(self.occupant_names.clone());
        if let Some(seed) = self.seed {
            source = source.with_seed(seed);
        }
        Box::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rows": 2, "seed": 9}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.rows, 2);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.occupant_names.len(), 4);
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rows": 0, "cols": 0, "tick_rate_ms": 0}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_oversized_grid_is_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rows": 65535, "cols": 30000}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.rows, MAX_ROWS);
        assert_eq!(config.cols, MAX_COLS);
        let seats = config.seat_source().load().unwrap();
        assert_eq!(seats.len(), MAX_ROWS as usize * MAX_COLS as usize);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_seat_source_selection() {
        let config = Config {
            rows: 2,
            cols: 3,
            seed: Some(5),
            ..Config::default()
        };
        let mut source = config.seat_source();
        assert_eq!(source.name(), "random");
        assert_eq!(source.load().unwrap().len(), 6);

        let config = Config {
            fixture_path: Some(PathBuf::from("seats.json")),
            ..Config::default()
        };
        assert_eq!(config.seat_source().name(), "fixture");
    }
}
