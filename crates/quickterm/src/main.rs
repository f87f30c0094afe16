use quickterm_core::{events, init_logging};

mod app;
mod commands;

fn main() {
    let matches = app::build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let exit_code = match commands::run_command(&matches) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("i3-quickterm: {}", e);
            events::log_app_error(e.as_ref(), 1);
            1
        }
    };
    std::process::exit(exit_code);
}
