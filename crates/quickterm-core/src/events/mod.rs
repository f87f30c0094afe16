use tracing::{error, info};

/// Log which entry point the invocation takes: toggling `shell`, or the
/// selector when no shell was given.
pub fn log_app_startup(shell: Option<&str>) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        entry = if shell.is_some() { "toggle" } else { "select" },
        shell = shell.unwrap_or_default()
    );
}

/// Log a failed invocation with its chain of causes.
pub fn log_app_error(error: &dyn std::error::Error, exit_code: i32) {
    let causes: Vec<String> = std::iter::successors(error.source(), |e| e.source())
        .map(ToString::to_string)
        .collect();
    error!(
        event = "core.app.error_occurred",
        error = %error,
        causes = ?causes,
        exit_code = exit_code
    );
}
