//! Default implementations for configuration types.
//!
//! Used by serde `#[serde(default = "...")]` attributes and by
//! `QuicktermConfig::default()`.

use crate::config::types::QuicktermConfig;
use std::collections::BTreeMap;

pub fn default_menu() -> String {
    "rofi -dmenu -p 'quickterm: ' -no-custom -auto-select".to_string()
}

pub fn default_term() -> String {
    "urxvt".to_string()
}

pub fn default_history() -> String {
    "{$HOME}/.cache/i3/i3-quickterm.order".to_string()
}

pub fn default_ratio() -> f64 {
    0.25
}

pub fn default_pos() -> String {
    "top".to_string()
}

/// Returns the default wait for the spawned window (2000ms).
///
/// Terminals usually map their window well within a second; past this the
/// window is left untagged and the next toggle spawns again.
pub fn default_spawn_timeout_ms() -> u64 {
    2000
}

pub fn default_shells() -> BTreeMap<String, String> {
    [
        ("haskell", "ghci"),
        ("js", "node"),
        ("python", "ipython3 --no-banner"),
        ("shell", "{$SHELL}"),
    ]
    .into_iter()
    .map(|(name, command)| (name.to_string(), command.to_string()))
    .collect()
}

impl Default for QuicktermConfig {
    fn default() -> Self {
        Self {
            menu: default_menu(),
            term: default_term(),
            history: default_history(),
            ratio: default_ratio(),
            pos: default_pos(),
            spawn_timeout_ms: default_spawn_timeout_ms(),
            shells: default_shells(),
        }
    }
}
