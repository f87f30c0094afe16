//! Blocking i3 IPC client over a Unix socket.
//!
//! Commands and queries share one connection. Window events are read from a
//! second, subscribed connection so they never interleave with replies.

use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::ipc::errors::IpcError;
use crate::ipc::protocol::{self, Frame};
use crate::ipc::traits::{EventSource, WindowManager};
use crate::ipc::types::{CommandOutcome, Node, SubscribeReply, WindowEvent, Workspace};

const READ_TIMEOUT: Duration = Duration::from_secs(5);
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolve the IPC socket path.
///
/// Checks `I3SOCK`, then `SWAYSOCK`, then asks `i3 --get-socketpath`.
pub fn socket_path() -> Result<PathBuf, IpcError> {
    for var in ["I3SOCK", "SWAYSOCK"] {
        if let Ok(path) = std::env::var(var)
            && !path.is_empty()
        {
            debug!(event = "core.ipc.socket_from_env", var, path);
            return Ok(PathBuf::from(path));
        }
    }

    let output = Command::new("i3")
        .arg("--get-socketpath")
        .output()
        .map_err(|e| IpcError::NotRunning {
            message: format!("I3SOCK and SWAYSOCK are unset and `i3 --get-socketpath` failed: {}", e),
        })?;

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !output.status.success() || path.is_empty() {
        return Err(IpcError::NotRunning {
            message: "`i3 --get-socketpath` returned no socket path".to_string(),
        });
    }

    Ok(PathBuf::from(path))
}

/// Connect to the socket with read/write timeouts.
fn connect_stream(socket_path: &Path) -> Result<UnixStream, IpcError> {
    if !socket_path.exists() {
        return Err(IpcError::NotRunning {
            message: format!("socket not found at {}", socket_path.display()),
        });
    }

    let stream = UnixStream::connect(socket_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::ConnectionRefused {
            IpcError::NotRunning {
                message: format!("connection refused at {}", socket_path.display()),
            }
        } else {
            IpcError::ConnectionFailed {
                message: e.to_string(),
            }
        }
    })?;

    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;

    Ok(stream)
}

/// A session with the window manager.
#[derive(Debug)]
pub struct I3Connection {
    stream: UnixStream,
    socket_path: PathBuf,
}

impl I3Connection {
    /// Connect to the running window manager.
    pub fn connect() -> Result<Self, IpcError> {
        let path = socket_path()?;
        Self::connect_to(&path)
    }

    /// Connect to an explicit socket path.
    pub fn connect_to(socket_path: &Path) -> Result<Self, IpcError> {
        let stream = connect_stream(socket_path)?;

        info!(
            event = "core.ipc.connected",
            socket_path = %socket_path.display()
        );

        Ok(Self {
            stream,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Send one message and read its reply.
    fn request(&mut self, message_type: u32, payload: &str) -> Result<Frame, IpcError> {
        protocol::write_message(&mut self.stream, message_type, payload.as_bytes())?;
        let reply = protocol::read_message(&mut self.stream)?;

        if reply.message_type != message_type {
            return Err(IpcError::protocol(format!(
                "expected reply type {}, got {}",
                message_type, reply.message_type
            )));
        }

        Ok(reply)
    }

    fn request_json<T: serde::de::DeserializeOwned>(
        &mut self,
        message_type: u32,
        payload: &str,
    ) -> Result<T, IpcError> {
        let reply = self.request(message_type, payload)?;
        serde_json::from_slice(&reply.payload)
            .map_err(|e| IpcError::protocol(format!("invalid JSON reply: {}", e)))
    }
}

impl WindowManager for I3Connection {
    fn command(&mut self, command: &str) -> Result<(), IpcError> {
        debug!(event = "core.ipc.command", command);

        let outcomes: Vec<CommandOutcome> = self.request_json(protocol::RUN_COMMAND, command)?;

        if let Some(failed) = outcomes.iter().find(|outcome| !outcome.success) {
            let message = failed
                .error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string());
            warn!(event = "core.ipc.command_rejected", command, error = message);
            return Err(IpcError::CommandRejected {
                command: command.to_string(),
                message,
            });
        }

        Ok(())
    }

    fn workspaces(&mut self) -> Result<Vec<Workspace>, IpcError> {
        self.request_json(protocol::GET_WORKSPACES, "")
    }

    fn tree(&mut self) -> Result<Node, IpcError> {
        self.request_json(protocol::GET_TREE, "")
    }

    fn subscribe_window_events(&mut self) -> Result<Box<dyn EventSource>, IpcError> {
        let events = I3EventStream::subscribe(&self.socket_path, &["window"])?;
        Ok(Box::new(events))
    }
}

/// A connection subscribed to window events.
#[derive(Debug)]
pub struct I3EventStream {
    stream: UnixStream,
}

impl I3EventStream {
    /// Open a new connection and subscribe it to `events`.
    pub fn subscribe(socket_path: &Path, events: &[&str]) -> Result<Self, IpcError> {
        let mut stream = connect_stream(socket_path)?;

        let payload = serde_json::to_string(events)
            .map_err(|e| IpcError::protocol(format!("serialization failed: {}", e)))?;
        protocol::write_message(&mut stream, protocol::SUBSCRIBE, payload.as_bytes())?;

        let reply = protocol::read_message(&mut stream)?;
        if reply.message_type != protocol::SUBSCRIBE {
            return Err(IpcError::protocol(format!(
                "expected subscribe reply, got type {}",
                reply.message_type
            )));
        }

        let parsed: SubscribeReply = serde_json::from_slice(&reply.payload)
            .map_err(|e| IpcError::protocol(format!("invalid JSON reply: {}", e)))?;
        if !parsed.success {
            return Err(IpcError::protocol(format!(
                "subscription to {:?} refused",
                events
            )));
        }

        debug!(event = "core.ipc.subscribed", events = ?events);

        Ok(Self { stream })
    }
}

impl EventSource for I3EventStream {
    fn next_window_event(&mut self, timeout: Duration) -> Result<Option<WindowEvent>, IpcError> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(None);
            }
            self.stream.set_read_timeout(Some(remaining))?;

            let frame = match protocol::read_message(&mut self.stream) {
                Ok(frame) => frame,
                Err(e) if e.is_timeout() => return Ok(None),
                Err(e) => return Err(e),
            };

            if frame.message_type != protocol::EVENT_WINDOW {
                debug!(
                    event = "core.ipc.unexpected_frame",
                    message_type = frame.message_type
                );
                continue;
            }

            let event: WindowEvent = serde_json::from_slice(&frame.payload)
                .map_err(|e| IpcError::protocol(format!("invalid window event: {}", e)))?;
            return Ok(Some(event));
        }
    }
}
