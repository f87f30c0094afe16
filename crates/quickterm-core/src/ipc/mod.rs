pub mod connection;
pub mod errors;
pub mod event_loop;
pub mod protocol;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use connection::{I3Connection, I3EventStream, socket_path};
pub use errors::IpcError;
pub use event_loop::run_event_loop;
pub use traits::{EventSource, WindowManager};
pub use types::{CommandOutcome, ConId, Node, WindowEvent, WindowProperties, Workspace};
