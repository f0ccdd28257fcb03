//! Module configuration.

use std::{fs, path::PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capability the host must grant before the package list can be changed.
pub const DEFAULT_MANAGE_CAPABILITY: &str = "manage_options";

fn default_db_path() -> PathBuf {
    PathBuf::from("repotrack.db")
}

fn default_manage_capability() -> String {
    DEFAULT_MANAGE_CAPABILITY.to_string()
}

/// Configuration for the settings module.
///
/// Hosts embed this in their own configuration or load it from a small
/// TOML file; every field has a usable default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Path to the SQLite database file holding the package table.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Capability required to update the package list.
    #[serde(default = "default_manage_capability")]
    pub manage_capability: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            manage_capability: default_manage_capability(),
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Configuration error type.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Unable to read configuration file: {0}")]
    #[diagnostic(
        code(repotrack::config::read),
        help("Check that the file exists and is readable")
    )]
    Read(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(repotrack::config::parse),
        help("Check your configuration syntax")
    )]
    Parse(#[from] toml::de::Error),
}
