use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the `-v` level.
pub const LOG_TARGETS: &[&str] = &["quickterm_core", "i3_quickterm"];

/// Map the number of `-v` flags to a level.
///
/// No flag keeps warnings and errors, one flag adds info, two or more add debug.
pub fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Filter directives for the given verbosity, one per target.
pub fn verbosity_directives(verbosity: u8) -> Vec<String> {
    let level = verbosity_level(verbosity);
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect()
}

/// Initialize logging for the given verbosity level.
///
/// Events are emitted as JSON on stderr so stdout stays free for user output.
pub fn init_logging(verbosity: u8) {
    let filter = verbosity_directives(verbosity)
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive.parse().expect("Invalid log directive"))
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
