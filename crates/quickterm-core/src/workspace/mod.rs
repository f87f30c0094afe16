pub mod errors;
pub mod operations;
pub mod types;

// Re-export commonly used types and functions
pub use errors::WorkspaceError;
pub use operations::{SCRATCHPAD_WORKSPACE, current_workspace, find_tagged, focused_workspace};
pub use types::{MarkPattern, TAG_PREFIX, WindowHandle, WindowTag};
