use std::fmt;

use crate::escape::escape_regex;
use crate::ipc::ConId;

/// Prefix shared by all marks set by i3-quickterm.
pub const TAG_PREFIX: &str = "quickterm_";

/// Mark identifying the drop-down terminal of one shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowTag(String);

impl WindowTag {
    pub fn for_shell(shell: &str) -> Self {
        Self(format!("{}{}", TAG_PREFIX, shell))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// i3 criteria matching exactly the window carrying this mark.
    ///
    /// `con_mark` is a regular expression, so the mark is escaped and anchored
    /// to keep `quickterm_py` from matching `quickterm_python`. The value is
    /// double-quoted, so `"` is escaped as well.
    pub fn selector(&self) -> String {
        let pattern = escape_regex(&self.0).replace('"', "\\\"");
        format!("[con_mark=\"^{}$\"]", pattern)
    }
}

impl fmt::Display for WindowTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which marks a tagged-window search accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkPattern {
    /// The mark of one shell.
    Exact(WindowTag),
    /// Any mark set by i3-quickterm.
    AnyQuickterm,
}

impl MarkPattern {
    pub fn matches(&self, mark: &str) -> bool {
        match self {
            MarkPattern::Exact(tag) => mark == tag.as_str(),
            MarkPattern::AnyQuickterm => mark.starts_with(TAG_PREFIX),
        }
    }
}

/// Reference to a window container owned by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    pub id: ConId,
    /// Name of the enclosing workspace; `__i3_scratch` while hidden.
    pub workspace: Option<String>,
}

impl WindowHandle {
    /// i3 criteria matching this container.
    pub fn selector(&self) -> String {
        format!("[con_id={}]", self.id)
    }

    pub fn is_on_workspace(&self, name: &str) -> bool {
        self.workspace.as_deref() == Some(name)
    }
}
