//! quickterm-core: drop-down terminals for i3 and sway
//!
//! This library holds all of i3-quickterm's behavior. The CLI crate only
//! parses arguments, loads configuration and calls into the toggle handlers.
//!
//! # Main Entry Points
//!
//! - [`toggle`] - Toggle a shell's drop-down terminal, or pick one from a menu
//! - [`ipc`] - i3 IPC connection, queries and the window event loop
//! - [`config`] - Configuration management
//! - [`history`] - Most-recently-used shell order

pub mod config;
pub mod errors;
pub mod escape;
pub mod events;
pub mod geometry;
pub mod history;
pub mod ipc;
pub mod logging;
pub mod menu;
pub mod scratchpad;
pub mod spawn;
pub mod template;
pub mod terminal;
pub mod toggle;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types at crate root for convenience
pub use config::QuicktermConfig;
pub use errors::QuicktermError;
pub use geometry::{Edge, OverlayGeometry, Ratio};
pub use ipc::{I3Connection, IpcError, WindowManager};
pub use spawn::SpawnOutcome;
pub use toggle::{ToggleError, ToggleOutcome};

// Re-export handler modules as the primary API
pub use toggle::handler as toggle_ops;

// Re-export logging initialization
pub use logging::init_logging;
