use tracing::debug;

use crate::ipc::{Node, WindowManager, Workspace};
use crate::workspace::errors::WorkspaceError;
use crate::workspace::types::{MarkPattern, WindowHandle};

/// Name of the hidden workspace holding scratchpad windows.
pub const SCRATCHPAD_WORKSPACE: &str = "__i3_scratch";

/// Query the focused workspace and its subtree of the layout tree.
///
/// Both are fresh snapshots; nothing is cached between calls.
pub fn current_workspace(wm: &mut dyn WindowManager) -> Result<(Workspace, Node), WorkspaceError> {
    let workspace = focused_workspace(wm.workspaces()?)?;
    let subtree = take_workspace_node(wm.tree()?, &workspace.name).ok_or_else(|| {
        WorkspaceError::NotInTree {
            name: workspace.name.clone(),
        }
    })?;

    debug!(
        event = "core.workspace.current",
        name = workspace.name,
        x = workspace.rect.x,
        y = workspace.rect.y,
        width = workspace.rect.width,
        height = workspace.rect.height
    );

    Ok((workspace, subtree))
}

/// Pick the single focused workspace.
pub fn focused_workspace(workspaces: Vec<Workspace>) -> Result<Workspace, WorkspaceError> {
    let mut focused: Vec<Workspace> = workspaces.into_iter().filter(|ws| ws.focused).collect();
    match focused.len() {
        0 => Err(WorkspaceError::NoFocusedWorkspace),
        1 => Ok(focused.remove(0)),
        count => Err(WorkspaceError::MultipleFocused { count }),
    }
}

/// Detach the workspace node named `name` from the tree.
pub fn take_workspace_node(node: Node, name: &str) -> Option<Node> {
    if node.is_workspace() && node.name.as_deref() == Some(name) {
        return Some(node);
    }
    node.nodes
        .into_iter()
        .chain(node.floating_nodes)
        .find_map(|child| take_workspace_node(child, name))
}

/// All windows under `node` carrying a mark accepted by `pattern`.
pub fn find_tagged(node: &Node, pattern: &MarkPattern) -> Vec<WindowHandle> {
    let mut found = Vec::new();
    collect_tagged(node, pattern, None, &mut found);
    found
}

fn collect_tagged(
    node: &Node,
    pattern: &MarkPattern,
    workspace: Option<&str>,
    found: &mut Vec<WindowHandle>,
) {
    let workspace = if node.is_workspace() {
        node.name.as_deref()
    } else {
        workspace
    };

    if node.marks.iter().any(|mark| pattern.matches(mark)) {
        found.push(WindowHandle {
            id: node.id,
            workspace: workspace.map(str::to_string),
        });
    }

    for child in node.children() {
        collect_tagged(child, pattern, workspace, found);
    }
}
