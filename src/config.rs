use crate::error::{FluxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gitflux.toml";

/// Represents the complete configuration for git-flux.
///
/// Contains the compatibility settings, legacy tag mappings and output options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub compatibility: CompatibilityConfig,

    #[serde(default)]
    pub legacy_tags: Vec<LegacyTagRule>,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings feeding the compatibility decision.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CompatibilityConfig {
    /// Version the artifact was first published in, as a bare `X.Y.Z`
    #[serde(default)]
    pub since: Option<String>,
}

/// A regex mapping a pre-adoption tag name onto a release version.
///
/// The first three capture groups are read as major, minor and patch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LegacyTagRule {
    pub pattern: String,
}

/// Where the derived version is written.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub version_file: Option<PathBuf>,
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| FluxError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitflux.toml` in current directory
/// 3. `.gitflux.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
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
