use std::path::PathBuf;

use crate::errors::QuicktermError;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to open history file {}: {message}", path.display())]
    OpenFailed { path: PathBuf, message: String },

    #[error("Failed to lock history file {}: {message}", path.display())]
    LockFailed { path: PathBuf, message: String },

    #[error("Failed to serialize shell history: {message}")]
    SerializeFailed { message: String },

    #[error("IO error on history file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl QuicktermError for HistoryError {
    fn error_code(&self) -> &'static str {
        match self {
            HistoryError::OpenFailed { .. } => "HISTORY_OPEN_FAILED",
            HistoryError::LockFailed { .. } => "HISTORY_LOCK_FAILED",
            HistoryError::SerializeFailed { .. } => "HISTORY_SERIALIZE_FAILED",
            HistoryError::IoError { .. } => "HISTORY_IO_ERROR",
        }
    }
}
