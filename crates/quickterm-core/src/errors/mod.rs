use std::error::Error;

/// Base trait for all application errors
pub trait QuicktermError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid ratio {ratio}: must be greater than 0 and at most 1")]
    InvalidRatio { ratio: f64 },

    #[error("Invalid position '{pos}'. Supported positions: top, bottom")]
    InvalidPosition { pos: String },

    #[error("Unknown shell '{shell}' (available shells: {available})")]
    UnknownShell { shell: String, available: String },

    #[error("Invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl QuicktermError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidRatio { .. } => "INVALID_RATIO",
            ConfigError::InvalidPosition { .. } => "INVALID_POSITION",
            ConfigError::UnknownShell { .. } => "UNKNOWN_SHELL",
            ConfigError::InvalidTemplate { .. } => "INVALID_TEMPLATE",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::IoError { .. })
    }
}
