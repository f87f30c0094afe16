use crate::errors::QuicktermError;

/// Error communicating with the window manager.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Window manager is not running: {message}")]
    NotRunning { message: String },

    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Command '{command}' was rejected: {message}")]
    CommandRejected { command: String, message: String },

    #[error("IPC protocol error: {message}")]
    ProtocolError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IpcError {
    pub fn protocol(msg: impl std::fmt::Display) -> Self {
        Self::ProtocolError {
            message: msg.to_string(),
        }
    }

    /// Whether this is a read that ran into the socket timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            IpcError::Io(e) if matches!(
                e.kind(),
                std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
            )
        )
    }
}

impl QuicktermError for IpcError {
    fn error_code(&self) -> &'static str {
        match self {
            IpcError::NotRunning { .. } => "WM_NOT_RUNNING",
            IpcError::ConnectionFailed { .. } => "WM_CONNECTION_FAILED",
            IpcError::CommandRejected { .. } => "WM_COMMAND_REJECTED",
            IpcError::ProtocolError { .. } => "WM_PROTOCOL_ERROR",
            IpcError::Io(_) => "WM_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, IpcError::NotRunning { .. })
    }
}
