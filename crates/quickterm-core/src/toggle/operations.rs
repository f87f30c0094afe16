use crate::toggle::types::{ToggleAction, ToggleState};
use crate::workspace::WindowHandle;

pub fn classify(tagged: Option<&WindowHandle>, current_workspace: &str) -> ToggleState {
    match tagged {
        None => ToggleState::NoWindow,
        Some(handle) if handle.is_on_workspace(current_workspace) => {
            ToggleState::ExistingOnCurrentWorkspace
        }
        Some(_) => ToggleState::ExistingElsewhere,
    }
}

/// Decide what toggling does, given the tagged window (if any) and the name
/// of the focused workspace.
pub fn decide(tagged: Option<WindowHandle>, current_workspace: &str) -> ToggleAction {
    match (classify(tagged.as_ref(), current_workspace), tagged) {
        (ToggleState::ExistingOnCurrentWorkspace, Some(handle)) => ToggleAction::Hide(handle),
        (ToggleState::ExistingElsewhere, Some(handle)) => ToggleAction::Relocate(handle),
        _ => ToggleAction::Spawn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::SCRATCHPAD_WORKSPACE;

    fn handle(workspace: Option<&str>) -> WindowHandle {
        WindowHandle {
            id: 42,
            workspace: workspace.map(str::to_string),
        }
    }

    #[test]
    fn test_no_window_spawns() {
        assert_eq!(classify(None, "1"), ToggleState::NoWindow);
        assert_eq!(decide(None, "1"), ToggleAction::Spawn);
    }

    #[test]
    fn test_window_on_current_workspace_hides() {
        let h = handle(Some("1"));
        assert_eq!(
            classify(Some(&h), "1"),
            ToggleState::ExistingOnCurrentWorkspace
        );
        assert_eq!(decide(Some(h.clone()), "1"), ToggleAction::Hide(h));
    }

    #[test]
    fn test_window_elsewhere_relocates() {
        let h = handle(Some("2"));
        assert_eq!(classify(Some(&h), "1"), ToggleState::ExistingElsewhere);
        assert_eq!(decide(Some(h.clone()), "1"), ToggleAction::Relocate(h));
    }

    #[test]
    fn test_window_in_scratchpad_relocates() {
        let h = handle(Some(SCRATCHPAD_WORKSPACE));
        assert_eq!(decide(Some(h.clone()), "1"), ToggleAction::Relocate(h));
    }

    #[test]
    fn test_window_outside_any_workspace_relocates() {
        let h = handle(None);
        assert_eq!(decide(Some(h.clone()), "1"), ToggleAction::Relocate(h));
    }
}
