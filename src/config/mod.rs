// src/config/mod.rs
pub mod types;

pub use self::types::{Config, LoadOptions, OrphanPolicy, SalaryPolicy, Thresholds};

use crate::error::{Result, RosterError};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "orgchart.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `path`, or from `orgchart.toml` in the current
    /// directory when no path is given.
    ///
    /// An explicitly requested file must exist. The implicit one is optional.
    ///
    /// # Errors
    /// Returns `RosterError::Config` if the file is unreadable, is not valid
    /// TOML, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(config_error(path, "file not found"));
            }
            tracing::debug!("no {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| config_error(path, &e.to_string()))?;
        let config = Self::parse_toml(&content).map_err(|msg| config_error(path, &msg))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns a human-readable message if parsing or validation fails.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Validates threshold values.
    ///
    /// # Errors
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let t = &self.thresholds;
        for (name, value) in [
            ("min_manager_ratio", t.min_manager_ratio),
            ("max_manager_ratio", t.max_manager_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        if t.min_manager_ratio > t.max_manager_ratio {
            return Err(format!(
                "min_manager_ratio ({}) exceeds max_manager_ratio ({})",
                t.min_manager_ratio, t.max_manager_ratio
            ));
        }
        Ok(())
    }
}

fn config_error(path: &Path, message: &str) -> RosterError {
    RosterError::Config {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
