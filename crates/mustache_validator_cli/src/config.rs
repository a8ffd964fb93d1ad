//! Configuration management for the Mustache validator CLI.
//!
//! The configuration is stored in TOML format and can be loaded from a
//! specified file path or from the default location in the current directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mustache_validator::ValidatorConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mustache-validator.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the Mustache validator CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// [validator]
/// max_depth = 128
/// on_missing = "fail"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings passed to the path-tracking validator.
    #[serde(default)]
    pub validator: ValidatorConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// The file is parsed into an `AppConfig` and then checked with
    /// [`validate`](Self::validate). Missing sections fall back to their
    /// defaults, so an empty file is a valid configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path to the configuration file to load
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(AppConfig)` - Successfully loaded and validated configuration
    /// - `Err(Error::Config)` - If the file doesn't exist, can't be read, or is invalid
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The specified file does not exist
    /// - The file cannot be read due to permissions or I/O issues
    /// - The file contains invalid TOML syntax
    /// - A value is out of range, such as `validator.max_depth = 0`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use mustache_validator_cli::config::AppConfig;
    ///
    /// let config_path = Path::new("./mustache-validator.toml");
    /// match AppConfig::load(config_path) {
    ///     Ok(config) => println!("Max depth: {}", config.validator.max_depth),
    ///     Err(e) => eprintln!("Failed to load config: {}", e),
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration at `path`, or the default file if one exists.
    ///
    /// Falls back to the default configuration when no path is given and no
    /// file exists at the default location. An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` under the same conditions as [`load`](Self::load).
    pub fn load_or_default(path: Option<&str>) -> Result<Self, Error> {
        let config_path = get_config_path(path);
        if path.is_none() && !config_path.exists() {
            debug!("No configuration file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the configuration file should be saved
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration cannot be serialized to TOML
    /// - Parent directories cannot be created due to permissions
    /// - The file cannot be written due to permissions or disk space issues
    ///
    /// # Behaviour
    ///
    /// - Creates parent directories automatically if they don't exist
    /// - Overwrites existing files at the target path
    /// - Uses pretty-formatted TOML output for readability
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use mustache_validator_cli::config::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// if let Err(e) = config.save(Path::new("./mustache-validator.toml")) {
    ///     eprintln!("Failed to save config: {}", e);
    /// }
    /// ```
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
            }
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Checks values that TOML alone cannot constrain.
    ///
    /// Also called by the `check` command after command line overrides are
    /// merged in.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `validator.max_depth` is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.validator.max_depth == 0 {
            return Err(Error::Config(
                "validator.max_depth must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolves the configuration file path, defaulting to the current directory.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
