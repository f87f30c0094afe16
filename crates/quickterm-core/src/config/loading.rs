//! Configuration loading.
//!
//! The config file lives at `$XDG_CONFIG_HOME/i3/i3-quickterm.toml` unless an
//! explicit path is given. A missing file is not an error: the built-in
//! defaults are used.

use crate::config::types::QuicktermConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "i3-quickterm.toml";

/// Default location of the user config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("i3").join(CONFIG_FILE_NAME))
}

/// Load and validate the configuration.
///
/// Uses `path` when given, the default location otherwise.
///
/// # Errors
///
/// Parse errors and validation errors are returned. A missing file at the
/// default location falls back to defaults; a missing explicit path is an
/// error.
pub fn load(path: Option<&Path>) -> Result<QuicktermConfig, ConfigError> {
    let config = match path {
        Some(explicit) => load_config_file(explicit)?,
        None => match default_config_path() {
            Some(default_path) if default_path.exists() => load_config_file(&default_path)?,
            _ => {
                debug!(event = "core.config.file_not_found", "Using default configuration");
                QuicktermConfig::default()
            }
        },
    };

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path without validating it.
pub fn load_config_file(path: &Path) -> Result<QuicktermConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;

    info!(
        event = "core.config.file_loaded",
        path = %path.display()
    );

    Ok(config)
}

/// Parse TOML configuration text.
pub fn parse_config(content: &str) -> Result<QuicktermConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
        message: e.to_string(),
    })
}
