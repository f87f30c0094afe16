use std::time::Duration;

use crate::ipc::errors::IpcError;
use crate::ipc::types::{Node, WindowEvent, Workspace};

/// The window manager operations i3-quickterm relies on.
///
/// Implemented by [`crate::ipc::I3Connection`] for i3 and sway.
pub trait WindowManager {
    /// Run a command. Fails if the window manager rejects any part of it.
    fn command(&mut self, command: &str) -> Result<(), IpcError>;

    /// Snapshot of all workspaces.
    fn workspaces(&mut self) -> Result<Vec<Workspace>, IpcError>;

    /// Snapshot of the full layout tree.
    fn tree(&mut self) -> Result<Node, IpcError>;

    /// Start receiving window events.
    ///
    /// Events that happen after this returns are delivered, so subscribe
    /// before triggering the change you want to observe.
    fn subscribe_window_events(&mut self) -> Result<Box<dyn EventSource>, IpcError>;
}

/// A stream of window events.
pub trait EventSource {
    /// Wait up to `timeout` for the next window event.
    ///
    /// Returns `Ok(None)` if nothing arrived in time.
    fn next_window_event(&mut self, timeout: Duration) -> Result<Option<WindowEvent>, IpcError>;
}
