//! Configuration type definitions for i3-quickterm.
//!
//! # Example Configuration
//!
//! ```toml
//! term = "kitty"
//! ratio = 0.3
//! pos = "bottom"
//!
//! [shells]
//! python = "ipython3 --no-banner"
//! shell = "{$SHELL}"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration loaded from the TOML config file.
///
/// Every key is optional. Keys present in the file replace the built-in
/// defaults; `[shells]` replaces the default shell table as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuicktermConfig {
    /// Menu program used by the selector. Receives shell names on stdin and
    /// prints the chosen one on stdout.
    #[serde(default = "super::defaults::default_menu")]
    pub menu: String,

    /// Terminal name from the known list, or a full command template.
    #[serde(default = "super::defaults::default_term")]
    pub term: String,

    /// History file path. Empty disables history.
    #[serde(default = "super::defaults::default_history")]
    pub history: String,

    /// Fraction of the workspace height used by the terminal.
    #[serde(default = "super::defaults::default_ratio")]
    pub ratio: f64,

    /// Edge the terminal is attached to: top or bottom.
    #[serde(default = "super::defaults::default_pos")]
    pub pos: String,

    /// How long to wait for a freshly spawned terminal window to get focus.
    #[serde(default = "super::defaults::default_spawn_timeout_ms")]
    pub spawn_timeout_ms: u64,

    /// Shell name to launch command.
    #[serde(default = "super::defaults::default_shells")]
    pub shells: BTreeMap<String, String>,
}
