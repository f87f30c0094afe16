use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{info, warn};

use quickterm_core::config::QuicktermConfig;
use quickterm_core::errors::ConfigError;
use quickterm_core::events;
use quickterm_core::menu::CommandMenu;
use quickterm_core::{I3Connection, toggle_ops};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches.get_one::<String>("shell").map(String::as_str);
    events::log_app_startup(shell);

    let config_path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let config = load_config_with_warning(config_path)?;

    match shell {
        Some(shell) => handle_toggle_command(&config, shell),
        None => handle_select_command(&config),
    }
}

/// Load configuration with warning on errors.
///
/// A file that cannot be read or parsed falls back to defaults, with:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
///
/// A file that parses but holds invalid values is an error.
fn load_config_with_warning(path: Option<&Path>) -> Result<QuicktermConfig, ConfigError> {
    match QuicktermConfig::load(path) {
        Ok(config) => Ok(config),
        Err(e @ (ConfigError::ConfigParseError { .. } | ConfigError::IoError { .. })) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check {} for syntax errors.",
                e,
                describe_config_path(path)
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            Ok(QuicktermConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn describe_config_path(path: Option<&Path>) -> String {
    path.map(Path::to_path_buf)
        .or_else(quickterm_core::config::loading::default_config_path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "the configuration file".to_string())
}

fn handle_toggle_command(
    config: &QuicktermConfig,
    shell: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Reject unknown shells before touching the window manager.
    config.shell_command(shell)?;

    let mut connection = I3Connection::connect()?;
    let outcome = toggle_ops::toggle_shell(&mut connection, config, shell)?;

    info!(
        event = "cli.toggle_completed",
        shell = shell,
        outcome = ?outcome
    );
    Ok(())
}

fn handle_select_command(config: &QuicktermConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut connection = I3Connection::connect()?;
    let mut menu = CommandMenu::new(config.menu.clone());
    let outcome = toggle_ops::toggle_select(&mut connection, config, &mut menu)?;

    info!(event = "cli.select_completed", outcome = ?outcome);
    Ok(())
}
