use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("i3-quickterm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A small drop-down terminal for i3 and sway")
        .long_about(
            "Toggle a drop-down terminal running SHELL on the focused workspace. \
             Without SHELL, hide the drop-down terminal shown on the focused workspace \
             or pick a shell from the configured menu.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging output (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Configuration file (default: $XDG_CONFIG_HOME/i3/i3-quickterm.toml)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("shell")
                .value_name("SHELL")
                .help("Shell to toggle, as named in the [shells] table")
                .index(1),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_shell_is_optional() {
        let matches = build_cli().try_get_matches_from(["i3-quickterm"]).unwrap();
        assert!(matches.get_one::<String>("shell").is_none());
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_shell_and_flags() {
        let matches = build_cli()
            .try_get_matches_from(["i3-quickterm", "-vv", "--config", "/tmp/qt.toml", "python"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("shell").map(String::as_str),
            Some("python")
        );
        assert_eq!(matches.get_count("verbose"), 2);
        assert_eq!(
            matches.get_one::<PathBuf>("config"),
            Some(&PathBuf::from("/tmp/qt.toml"))
        );
    }

    #[test]
    fn test_short_config_flag() {
        let matches = build_cli()
            .try_get_matches_from(["i3-quickterm", "-c", "qt.toml"])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("config"),
            Some(&PathBuf::from("qt.toml"))
        );
    }

    #[test]
    fn test_extra_positional_rejected() {
        let result = build_cli().try_get_matches_from(["i3-quickterm", "python", "js"]);
        assert!(result.is_err());
    }
}
