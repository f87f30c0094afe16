pub mod errors;
pub mod operations;

// Re-export commonly used types and functions
pub use errors::HistoryError;
pub use operations::{HistoryFile, promote, shell_order};
