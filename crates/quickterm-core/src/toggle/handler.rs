use tracing::info;

use crate::config::QuicktermConfig;
use crate::history::{HistoryFile, promote, shell_order};
use crate::ipc::WindowManager;
use crate::menu::ShellMenu;
use crate::scratchpad;
use crate::spawn::{self, SpawnRequest};
use crate::toggle::errors::ToggleError;
use crate::toggle::operations::decide;
use crate::toggle::types::{ToggleAction, ToggleOutcome};
use crate::workspace::{MarkPattern, WindowTag, current_workspace, find_tagged, focused_workspace};

/// Toggle the drop-down terminal of `shell`.
///
/// Hides it when it is on the focused workspace, brings it to the focused
/// workspace when it is anywhere else, and launches it when no window carries
/// its tag.
pub fn toggle_shell(
    wm: &mut dyn WindowManager,
    config: &QuicktermConfig,
    shell: &str,
) -> Result<ToggleOutcome, ToggleError> {
    info!(event = "core.toggle.shell_started", shell = shell);

    let shell_command = config.shell_command(shell)?;
    let overlay = config.overlay()?;
    let tag = WindowTag::for_shell(shell);

    let workspace = focused_workspace(wm.workspaces()?)?;
    let tree = wm.tree()?;
    let tagged = find_tagged(&tree, &MarkPattern::Exact(tag.clone()))
        .into_iter()
        .next();

    let outcome = match decide(tagged, &workspace.name) {
        ToggleAction::Hide(handle) => {
            scratchpad::hide(wm, &handle.selector())?;
            ToggleOutcome::Hidden {
                window_id: handle.id,
            }
        }
        ToggleAction::Relocate(handle) => {
            scratchpad::hide(wm, &handle.selector())?;
            scratchpad::show(wm, &tag, &overlay.plan(workspace.rect))?;
            ToggleOutcome::Shown {
                window_id: handle.id,
            }
        }
        ToggleAction::Spawn => {
            let request = SpawnRequest {
                shell,
                shell_command,
                term: &config.term,
                overlay,
                timeout: config.spawn_timeout(),
            };
            ToggleOutcome::Spawned(spawn::spawn(wm, &request)?)
        }
    };

    info!(
        event = "core.toggle.shell_completed",
        shell = shell,
        workspace = workspace.name,
        outcome = ?outcome
    );

    Ok(outcome)
}

/// Hide the quickterm on the focused workspace, or let the user pick a shell
/// to toggle.
///
/// The history file stays locked from before the menu is shown until the new
/// order is written.
pub fn toggle_select(
    wm: &mut dyn WindowManager,
    config: &QuicktermConfig,
    menu: &mut dyn ShellMenu,
) -> Result<ToggleOutcome, ToggleError> {
    info!(event = "core.toggle.select_started");

    let (workspace, subtree) = current_workspace(wm)?;
    if let Some(handle) = find_tagged(&subtree, &MarkPattern::AnyQuickterm)
        .into_iter()
        .next()
    {
        scratchpad::hide(wm, &handle.selector())?;
        info!(
            event = "core.toggle.select_completed",
            workspace = workspace.name,
            hidden = handle.id
        );
        return Ok(ToggleOutcome::Hidden {
            window_id: handle.id,
        });
    }

    let mut history = config
        .history_path()?
        .as_deref()
        .map(HistoryFile::open_locked)
        .transpose()?;

    let stored = history.as_mut().map(HistoryFile::read).unwrap_or_default();
    let order = shell_order(&stored, &config.shell_names());

    let Some(choice) = menu.choose(&order)? else {
        info!(event = "core.toggle.select_completed", selection = "none");
        return Ok(ToggleOutcome::NoSelection);
    };

    if !config.shells.contains_key(&choice) {
        info!(
            event = "core.toggle.select_completed",
            selection = "unknown",
            answer = choice
        );
        return Ok(ToggleOutcome::NoSelection);
    }

    if let Some(file) = history.as_mut() {
        file.write(&promote(&order, &choice))?;
    }
    drop(history);

    info!(event = "core.toggle.select_completed", selection = choice);

    toggle_shell(wm, config, &choice)
}
