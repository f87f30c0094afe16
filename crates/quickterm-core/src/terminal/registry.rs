//! Known terminal emulators.

use crate::terminal::types::{ExecFormat, TerminalSpec};

static TERMINALS: &[(&str, TerminalSpec)] = &[
    ("alacritty", TerminalSpec::new("alacritty").title_option(Some("-t"))),
    (
        "kitty",
        TerminalSpec::new("kitty").class_option(Some("--class")),
    ),
    (
        "gnome-terminal",
        TerminalSpec::new("gnome-terminal")
            .exec_option("--")
            .title_option(None),
    ),
    ("roxterm", TerminalSpec::new("roxterm")),
    ("st", TerminalSpec::new("st")),
    (
        "termite",
        TerminalSpec::new("termite")
            .exec_format(ExecFormat::String)
            .title_option(Some("-t")),
    ),
    ("urxvt", TerminalSpec::new("urxvt")),
    ("urxvtc", TerminalSpec::new("urxvtc")),
    (
        "xfce4-terminal",
        TerminalSpec::new("xfce4-terminal").exec_format(ExecFormat::String),
    ),
    ("xterm", TerminalSpec::new("xterm")),
];

/// Look up a known terminal by name.
pub fn get_terminal(name: &str) -> Option<&'static TerminalSpec> {
    TERMINALS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, spec)| spec)
}

/// Launch template for `term`.
///
/// Known terminal names resolve to their template; anything else is taken to
/// be a full template already.
pub fn resolve_template(term: &str) -> String {
    match get_terminal(term) {
        Some(spec) => spec.template(),
        None => term.to_string(),
    }
}
