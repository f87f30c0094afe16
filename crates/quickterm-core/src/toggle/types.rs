use crate::ipc::ConId;
use crate::spawn::SpawnOutcome;
use crate::workspace::WindowHandle;

/// Where the terminal of a shell currently is, relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// No window carries the shell's tag.
    NoWindow,
    /// The tagged window is on another workspace or in the scratchpad.
    ExistingElsewhere,
    /// The tagged window is on the focused workspace.
    ExistingOnCurrentWorkspace,
}

/// What a toggle does about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAction {
    Spawn,
    Hide(WindowHandle),
    /// Hide, then show on the focused workspace.
    Relocate(WindowHandle),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Hidden { window_id: ConId },
    Shown { window_id: ConId },
    Spawned(SpawnOutcome),
    /// The menu was dismissed or answered with an unknown shell.
    NoSelection,
}
