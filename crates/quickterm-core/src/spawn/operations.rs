use std::collections::HashMap;

use tracing::{info, warn};

use crate::errors::ConfigError;
use crate::escape::{double_quote, shell_escape};
use crate::ipc::{WindowManager, run_event_loop};
use crate::scratchpad;
use crate::spawn::errors::SpawnError;
use crate::spawn::types::{
    InstanceMatcher, PendingSpawn, SpawnOutcome, SpawnRequest, class_name, term_title,
};
use crate::template;
use crate::terminal;
use crate::workspace::{WindowHandle, WindowTag};

/// Name of the terminal program behind `term`.
///
/// Known terminals are their own name. For a full template it is the file
/// name of the first word, so `/usr/bin/foot --app-id {class_name} {expanded}`
/// gives `foot`.
pub fn terminal_program(term: &str) -> String {
    if terminal::get_terminal(term).is_some() {
        return term.to_string();
    }
    let first = term.split_whitespace().next().unwrap_or(term);
    first.rsplit('/').next().unwrap_or(first).to_string()
}

/// Build the command that launches `shell_command` in the configured terminal.
pub fn build_launch_command(
    shell: &str,
    shell_command: &str,
    term: &str,
) -> Result<String, ConfigError> {
    let template = terminal::resolve_template(term);
    let program = terminal_program(term);
    let expanded = template::expand(shell_command, &HashMap::new())?;

    let mut values = HashMap::new();
    values.insert("title", double_quote(&term_title(shell)));
    values.insert("class_name", double_quote(&class_name(&program)));
    values.insert("string", shell_escape(&expanded));
    values.insert("expanded", expanded);

    template::expand(&template, &values)
}

/// Launch the terminal for a shell and tag its window.
///
/// The window event subscription is opened before the `exec` so the focus
/// event of the new window cannot be missed. The wait is bounded by
/// `request.timeout`; if it expires the window is left untagged.
pub fn spawn(
    wm: &mut dyn WindowManager,
    request: &SpawnRequest<'_>,
) -> Result<SpawnOutcome, SpawnError> {
    let tag = WindowTag::for_shell(request.shell);
    let command = build_launch_command(request.shell, request.shell_command, request.term)?;
    let pending = PendingSpawn::new(
        tag.clone(),
        InstanceMatcher::new(&terminal_program(request.term)),
    );

    let mut events = wm.subscribe_window_events()?;

    info!(
        event = "core.spawn.exec_started",
        shell = request.shell,
        command = command
    );
    wm.command(&format!("exec {}", command))?;

    let arrived = run_event_loop(events.as_mut(), request.timeout, |event| {
        pending.on_focus(event)
    })?;
    drop(events);

    let Some(window_id) = arrived else {
        warn!(
            event = "core.spawn.timed_out",
            shell = request.shell,
            tag = tag.as_str(),
            timeout_ms = request.timeout.as_millis() as u64,
            message = "Terminal window did not appear in time - left untagged"
        );
        return Ok(SpawnOutcome::TimedOut { tag });
    };

    let handle = WindowHandle {
        id: window_id,
        workspace: None,
    };
    wm.command(&format!(
        "{} mark {}",
        handle.selector(),
        double_quote(tag.as_str())
    ))?;
    scratchpad::hide(wm, &handle.selector())?;
    scratchpad::show_on_current_workspace(wm, &tag, request.overlay)?;

    info!(
        event = "core.spawn.completed",
        shell = request.shell,
        tag = tag.as_str(),
        con_id = window_id
    );

    Ok(SpawnOutcome::Tagged { window_id, tag })
}
