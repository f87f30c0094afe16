//! The two window mutations i3-quickterm performs.
//!
//! Hiding parks a window in the scratchpad. Showing pulls the tagged window
//! out of the scratchpad onto the focused workspace at the overlay geometry.
//! Every higher-level action is a combination of these.

use tracing::info;

use crate::geometry::{Overlay, OverlayGeometry};
use crate::ipc::{IpcError, WindowManager};
use crate::workspace::{WindowTag, WorkspaceError, current_workspace};

pub fn hide_command(selector: &str) -> String {
    format!("{} floating enable, move scratchpad", selector)
}

pub fn show_command(tag: &WindowTag, geometry: &OverlayGeometry) -> String {
    format!(
        "{} resize set {} px {} px, move absolute position {}px {}px, move scratchpad, scratchpad show",
        tag.selector(),
        geometry.width,
        geometry.height,
        geometry.x,
        geometry.y
    )
}

/// Move the windows matched by `selector` to the scratchpad.
pub fn hide(wm: &mut dyn WindowManager, selector: &str) -> Result<(), IpcError> {
    wm.command(&hide_command(selector))?;
    info!(event = "core.scratchpad.hidden", selector);
    Ok(())
}

/// Show the window tagged `tag` at `geometry` on the focused workspace.
pub fn show(
    wm: &mut dyn WindowManager,
    tag: &WindowTag,
    geometry: &OverlayGeometry,
) -> Result<(), IpcError> {
    wm.command(&show_command(tag, geometry))?;
    info!(
        event = "core.scratchpad.shown",
        tag = tag.as_str(),
        x = geometry.x,
        y = geometry.y,
        width = geometry.width,
        height = geometry.height
    );
    Ok(())
}

/// Plan the overlay for the focused workspace and show `tag` there.
pub fn show_on_current_workspace(
    wm: &mut dyn WindowManager,
    tag: &WindowTag,
    overlay: Overlay,
) -> Result<OverlayGeometry, WorkspaceError> {
    let (workspace, _) = current_workspace(wm)?;
    let geometry = overlay.plan(workspace.rect);
    show(wm, tag, &geometry)?;
    Ok(geometry)
}
