//! Structured replies and events of the i3 IPC protocol.
//!
//! Only the fields i3-quickterm reads are modelled; everything else in the
//! JSON is ignored.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// i3 container id.
pub type ConId = u64;

/// One entry of the `GET_WORKSPACES` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub num: i64,
    pub name: String,
    #[serde(default)]
    pub visible: bool,
    pub focused: bool,
    pub rect: Rect,
    #[serde(default)]
    pub output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowProperties {
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A node of the `GET_TREE` reply, also carried by window events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: ConId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub marks: Vec<String>,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub window_properties: Option<WindowProperties>,
    /// Wayland application id (sway only).
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub floating_nodes: Vec<Node>,
}

impl Node {
    pub fn is_workspace(&self) -> bool {
        self.node_type == "workspace"
    }

    /// Program instance name of the window in this container.
    ///
    /// X11 windows report `WM_CLASS` instance; native Wayland windows under
    /// sway only have an app id, which terminals set from their class option.
    pub fn instance(&self) -> Option<&str> {
        self.window_properties
            .as_ref()
            .and_then(|props| props.instance.as_deref())
            .or(self.app_id.as_deref())
    }

    /// Direct children, tiling first then floating.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().chain(self.floating_nodes.iter())
    }
}

/// Payload of a `window` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowEvent {
    pub change: String,
    pub container: Node,
}

impl WindowEvent {
    pub fn is_focus(&self) -> bool {
        self.change == "focus"
    }
}

/// One outcome of a `RUN_COMMAND` reply. i3 answers with one per command
/// in the comma/semicolon separated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `SUBSCRIBE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeReply {
    pub success: bool,
}
