//! Run configuration loaded from an optional TOML file.
//!
//! ```toml
//! [selection]
//! total_budget = 2400000
//! selection_threshold = 0.99
//!
//! [selection.low]
//! min_count = 2
//! cost_cap = 1200000
//!
//! [solver]
//! backend = "highs"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```
//!
//! Every key is optional; missing sections fall back to their defaults.

use super::logging::LoggingConfig;
use crate::domain::{selection::SelectionConfig, value_objects::SolverBackend};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    pub backend: SolverBackend,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub selection: SelectionConfig,
    pub solver: SolverSettings,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&data)
    }

    /// Defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(data: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection
            .validate()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "selection.selection_threshold",
                reason,
            })?;
        self.logging
            .validate()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "logging.format",
                reason,
            })
    }
}
