pub mod registry;
pub mod types;

// Re-export commonly used types and functions
pub use registry::{get_terminal, resolve_template};
pub use types::{ExecFormat, TerminalSpec};
