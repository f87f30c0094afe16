use crate::errors::{ConfigError, QuicktermError};
use crate::history::HistoryError;
use crate::ipc::IpcError;
use crate::menu::MenuError;
use crate::spawn::SpawnError;
use crate::workspace::WorkspaceError;

#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error(transparent)]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("Window manager error: {source}")]
    IpcError {
        #[from]
        source: IpcError,
    },

    #[error(transparent)]
    WorkspaceError {
        #[from]
        source: WorkspaceError,
    },

    #[error(transparent)]
    SpawnError {
        #[from]
        source: SpawnError,
    },

    #[error(transparent)]
    HistoryError {
        #[from]
        source: HistoryError,
    },

    #[error(transparent)]
    MenuError {
        #[from]
        source: MenuError,
    },
}

impl QuicktermError for ToggleError {
    fn error_code(&self) -> &'static str {
        match self {
            ToggleError::ConfigError { source } => source.error_code(),
            ToggleError::IpcError { .. } => "TOGGLE_IPC_ERROR",
            ToggleError::WorkspaceError { .. } => "TOGGLE_WORKSPACE_ERROR",
            ToggleError::SpawnError { source } => source.error_code(),
            ToggleError::HistoryError { source } => source.error_code(),
            ToggleError::MenuError { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ToggleError::ConfigError { source } => source.is_user_error(),
            ToggleError::IpcError { source } => source.is_user_error(),
            ToggleError::SpawnError { source } => source.is_user_error(),
            ToggleError::MenuError { source } => source.is_user_error(),
            _ => false,
        }
    }
}
