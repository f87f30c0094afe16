//! Configuration validation.

use crate::config::types::QuicktermConfig;
use crate::errors::ConfigError;
use crate::geometry::{Edge, Ratio};

/// Validate the configuration.
///
/// # Errors
///
/// Returns `ConfigError` when the ratio is outside (0, 1], the position is not
/// top or bottom, the terminal is empty, the spawn timeout is zero, or no
/// shells are configured.
pub fn validate_config(config: &QuicktermConfig) -> Result<(), ConfigError> {
    Ratio::new(config.ratio)?;
    config.pos.parse::<Edge>()?;

    if config.term.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "term cannot be empty".to_string(),
        });
    }

    // A zero wait never sees the new window, so nothing would ever be tagged.
    if config.spawn_timeout_ms == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "spawn_timeout_ms must be greater than 0".to_string(),
        });
    }

    if config.shells.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "at least one shell must be configured".to_string(),
        });
    }

    if let Some((name, _)) = config.shells.iter().find(|(_, cmd)| cmd.trim().is_empty()) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("shell '{}' has an empty command", name),
        });
    }

    Ok(())
}
