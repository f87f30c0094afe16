use crate::errors::{ConfigError, QuicktermError};
use crate::ipc::IpcError;
use crate::workspace::WorkspaceError;

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("Failed to build terminal command: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("Window manager command failed: {source}")]
    IpcError {
        #[from]
        source: IpcError,
    },

    #[error("Failed to show spawned terminal: {source}")]
    WorkspaceError {
        #[from]
        source: WorkspaceError,
    },
}

impl QuicktermError for SpawnError {
    fn error_code(&self) -> &'static str {
        match self {
            SpawnError::ConfigError { .. } => "SPAWN_CONFIG_ERROR",
            SpawnError::IpcError { .. } => "SPAWN_IPC_ERROR",
            SpawnError::WorkspaceError { .. } => "SPAWN_WORKSPACE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SpawnError::ConfigError { .. })
    }
}
