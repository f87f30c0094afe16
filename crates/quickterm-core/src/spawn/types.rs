use std::time::Duration;

use tracing::debug;

use crate::geometry::Overlay;
use crate::ipc::{ConId, WindowEvent};
use crate::workspace::WindowTag;

/// Product name used in window titles.
pub const PRODUCT_NAME: &str = "i3-quickterm";

/// Everything needed to launch and tag the terminal of one shell.
#[derive(Debug, Clone)]
pub struct SpawnRequest<'a> {
    pub shell: &'a str,
    pub shell_command: &'a str,
    pub term: &'a str,
    pub overlay: Overlay,
    pub timeout: Duration,
}

/// Decides whether a focused window is the terminal we launched.
///
/// The instance name is compared with the synthesized class and with the bare
/// terminal program name. The latter also matches any other window of the
/// same terminal that happens to take focus during the wait; terminals that
/// ignore the class option leave no better signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceMatcher {
    class_name: String,
    program: String,
}

impl InstanceMatcher {
    pub fn new(program: &str) -> Self {
        Self {
            class_name: class_name(program),
            program: program.to_string(),
        }
    }

    pub fn matches(&self, instance: Option<&str>) -> bool {
        matches!(instance, Some(name) if name == self.class_name || name == self.program)
    }
}

/// Window class requested from the terminal, e.g. `urxvt-quickterm`.
pub fn class_name(program: &str) -> String {
    format!("{}-quickterm", program)
}

/// Window title requested from the terminal, e.g. `python - i3-quickterm`.
pub fn term_title(shell: &str) -> String {
    format!("{} - {}", shell, PRODUCT_NAME)
}

/// A launched terminal waiting for its window to show up.
#[derive(Debug, Clone)]
pub struct PendingSpawn {
    tag: WindowTag,
    matcher: InstanceMatcher,
}

impl PendingSpawn {
    pub fn new(tag: WindowTag, matcher: InstanceMatcher) -> Self {
        Self { tag, matcher }
    }

    /// Inspect a focus event; returns the container id once our window appears.
    pub fn on_focus(&self, event: &WindowEvent) -> Option<ConId> {
        let instance = event.container.instance();
        debug!(
            event = "core.spawn.focus_observed",
            tag = self.tag.as_str(),
            con_id = event.container.id,
            instance = ?instance
        );
        self.matcher
            .matches(instance)
            .then_some(event.container.id)
    }
}

/// How a spawn ended. Neither variant is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The window appeared and now carries the tag.
    Tagged { window_id: ConId, tag: WindowTag },
    /// No matching window appeared in time; nothing was tagged.
    TimedOut { tag: WindowTag },
}
