pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

// Re-export commonly used types and functions
pub use errors::ToggleError;
pub use handler::{toggle_select, toggle_shell};
pub use operations::{classify, decide};
pub use types::{ToggleAction, ToggleOutcome, ToggleState};
