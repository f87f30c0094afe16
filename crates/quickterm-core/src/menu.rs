//! The external selection menu (rofi, dmenu, ...).

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::errors::{ConfigError, QuicktermError};
use crate::template;

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Invalid menu command '{command}': {message}")]
    InvalidCommand { command: String, message: String },

    #[error("Failed to run menu '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Menu template error: {source}")]
    TemplateError {
        #[from]
        source: ConfigError,
    },
}

impl QuicktermError for MenuError {
    fn error_code(&self) -> &'static str {
        match self {
            MenuError::InvalidCommand { .. } => "MENU_INVALID_COMMAND",
            MenuError::SpawnFailed { .. } => "MENU_SPAWN_FAILED",
            MenuError::TemplateError { .. } => "MENU_TEMPLATE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, MenuError::SpawnFailed { .. })
    }
}

/// Something that lets the user pick one of several shells.
pub trait ShellMenu {
    /// Offer `options` in order; `None` when nothing was chosen.
    fn choose(&mut self, options: &[String]) -> Result<Option<String>, MenuError>;
}

/// A menu program fed one option per line on stdin, answering on stdout.
#[derive(Debug, Clone)]
pub struct CommandMenu {
    command: String,
}

impl CommandMenu {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl ShellMenu for CommandMenu {
    fn choose(&mut self, options: &[String]) -> Result<Option<String>, MenuError> {
        run_menu(&self.command, options)
    }
}

/// Run `command` with `options` on stdin and return its trimmed answer.
pub fn run_menu(command: &str, options: &[String]) -> Result<Option<String>, MenuError> {
    let expanded = template::expand(command, &HashMap::new())?;
    let argv = shell_words::split(&expanded).map_err(|e| MenuError::InvalidCommand {
        command: command.to_string(),
        message: e.to_string(),
    })?;
    let (program, args) = argv.split_first().ok_or_else(|| MenuError::InvalidCommand {
        command: command.to_string(),
        message: "empty command".to_string(),
    })?;

    debug!(event = "core.menu.spawn_started", program = program, options = options.len());

    let spawn_failed = |source| MenuError::SpawnFailed {
        command: command.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(spawn_failed)?;

    if let Some(mut stdin) = child.stdin.take() {
        let mut input = options.join("\n");
        input.push('\n');
        // A menu that exits without reading its input closes the pipe early.
        if let Err(e) = stdin.write_all(input.as_bytes()) {
            debug!(event = "core.menu.stdin_closed", error = %e);
        }
    }

    let output = child.wait_with_output().map_err(spawn_failed)?;
    let answer = String::from_utf8_lossy(&output.stdout).trim().to_string();

    info!(
        event = "core.menu.completed",
        status = ?output.status.code(),
        answer = answer
    );

    Ok((!answer.is_empty()).then_some(answer))
}
