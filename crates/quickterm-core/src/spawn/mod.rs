pub mod errors;
pub mod operations;
pub mod types;

// Re-export commonly used types and functions
pub use errors::SpawnError;
pub use operations::{build_launch_command, spawn, terminal_program};
pub use types::{InstanceMatcher, PendingSpawn, SpawnOutcome, SpawnRequest};
