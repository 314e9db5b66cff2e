use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VersionError};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "buildversion.toml";

/// Represents the complete configuration for build-version.
///
/// Only `append_timestamp` influences formatting; the other settings choose
/// where and how `git describe` is run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Whether semver output carries a build timestamp when no
    /// environment override is set.
    #[serde(default = "default_append_timestamp")]
    pub append_timestamp: bool,

    /// Directory resolvers describe when no explicit path is given.
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    #[serde(default)]
    pub backend: Backend,
}

/// Which implementation runs the describe operation.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Spawn the `git` executable.
    #[default]
    Command,
    /// Use libgit2 in-process.
    Git2,
}

fn default_append_timestamp() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            append_timestamp: default_append_timestamp(),
            project_root: None,
            backend: Backend::default(),
        }
    }
}

impl Config {
    /// Directory a resolver describes when constructed without a path.
    pub fn project_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildversion.toml` in current directory
/// 3. `buildversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| VersionError::config(e.to_string()))
}
