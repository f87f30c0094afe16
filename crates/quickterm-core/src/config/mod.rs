//! # Configuration System
//!
//! TOML configuration for i3-quickterm.
//!
//! Configuration is resolved in this order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `$XDG_CONFIG_HOME/i3/i3-quickterm.toml`, or the file
//!    passed with `--config`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use quickterm_core::config::QuicktermConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QuicktermConfig::load(None)?;
//!     let command = config.shell_command("python")?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::ConfigError;
use crate::geometry::{Edge, Overlay, Ratio};
use crate::template;

// Public API exports
pub use types::QuicktermConfig;
pub use validation::validate_config;

impl QuicktermConfig {
    /// Load configuration from `path`, or from the default location.
    ///
    /// See [`loading::load`] for details.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loading::load(path)
    }

    /// Launch command configured for `shell`.
    ///
    /// # Errors
    ///
    /// `ConfigError::UnknownShell` naming the configured shells.
    pub fn shell_command(&self, shell: &str) -> Result<&str, ConfigError> {
        self.shells
            .get(shell)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownShell {
                shell: shell.to_string(),
                available: self.shell_names().join(", "),
            })
    }

    /// Configured shell names, sorted.
    pub fn shell_names(&self) -> Vec<String> {
        self.shells.keys().cloned().collect()
    }

    pub fn overlay_ratio(&self) -> Result<Ratio, ConfigError> {
        Ratio::new(self.ratio)
    }

    pub fn overlay_edge(&self) -> Result<Edge, ConfigError> {
        self.pos.parse()
    }

    /// Validated overlay placement.
    pub fn overlay(&self) -> Result<Overlay, ConfigError> {
        Ok(Overlay::new(self.overlay_ratio()?, self.overlay_edge()?))
    }

    /// Bounded wait for a spawned terminal window.
    pub fn spawn_timeout(&self) -> Duration {
        Duration::from_millis(self.spawn_timeout_ms)
    }

    /// Expanded history file path, or `None` when history is disabled.
    pub fn history_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        if self.history.trim().is_empty() {
            return Ok(None);
        }
        let expanded = template::expand(&self.history, &Default::default())?;
        Ok(Some(PathBuf::from(expanded)))
    }
}
