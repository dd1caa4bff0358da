//! Snapshot configuration.

use crate::snapshot::DEFAULT_ARTIFACT_PATH;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where and whether to write the summary artifact.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Path of the summary artifact.
    #[serde(default = "default_artifact_path")]
    artifact_path: PathBuf,

    /// Whether projections write the artifact at all.
    #[serde(default = "default_record_artifact")]
    record_artifact: bool,
}

#[instrument]
fn default_artifact_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_PATH)
}

#[instrument]
fn default_record_artifact() -> bool {
    true
}

impl SnapshotConfig {
    /// Creates a configuration recording to `artifact_path`.
    #[instrument(skip(artifact_path))]
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            record_artifact: default_record_artifact(),
        }
    }

    /// Returns a copy with artifact recording switched on or off.
    pub fn with_record_artifact(mut self, record_artifact: bool) -> Self {
        self.record_artifact = record_artifact;
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(
            artifact_path = %config.artifact_path.display(),
            record_artifact = config.record_artifact,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self::new(default_artifact_path())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
