use crate::errors::QuicktermError;
use crate::ipc::IpcError;

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("No focused workspace reported by the window manager")]
    NoFocusedWorkspace,

    #[error("{count} workspaces reported as focused, expected exactly one")]
    MultipleFocused { count: usize },

    #[error("Focused workspace '{name}' not found in the layout tree")]
    NotInTree { name: String },

    #[error("Window manager query failed: {source}")]
    IpcError {
        #[from]
        source: IpcError,
    },
}

impl QuicktermError for WorkspaceError {
    fn error_code(&self) -> &'static str {
        match self {
            WorkspaceError::NoFocusedWorkspace => "NO_FOCUSED_WORKSPACE",
            WorkspaceError::MultipleFocused { .. } => "MULTIPLE_FOCUSED_WORKSPACES",
            WorkspaceError::NotInTree { .. } => "WORKSPACE_NOT_IN_TREE",
            WorkspaceError::IpcError { .. } => "WORKSPACE_IPC_ERROR",
        }
    }
}
