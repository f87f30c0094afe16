//! In-memory window manager used by unit tests.
//!
//! Models just enough of i3 to exercise the toggle flow: workspaces, windows
//! with marks, the scratchpad, and focus events emitted by `exec`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::geometry::Rect;
use crate::ipc::{
    ConId, EventSource, IpcError, Node, WindowEvent, WindowManager, WindowProperties, Workspace,
};
use crate::workspace::SCRATCHPAD_WORKSPACE;

pub(crate) const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1080,
};

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    pub id: ConId,
    pub instance: String,
    pub marks: Vec<String>,
    pub workspace: String,
}

type EventQueue = Rc<RefCell<VecDeque<WindowEvent>>>;

pub(crate) struct FakeWindowManager {
    pub workspaces: Vec<Workspace>,
    pub windows: Vec<FakeWindow>,
    /// Commands in the order they were issued.
    pub commands: Vec<String>,
    /// Commands and subscriptions in the order they were issued.
    pub calls: Vec<String>,
    tree_workspaces: Vec<String>,
    events: EventQueue,
    spawn_on_exec: VecDeque<(ConId, String)>,
    reject: Option<String>,
}

impl FakeWindowManager {
    pub fn new(names: &[&str], focused: &str) -> Self {
        let workspaces = names
            .iter()
            .enumerate()
            .map(|(i, name)| Workspace {
                num: i as i64 + 1,
                name: name.to_string(),
                visible: *name == focused,
                focused: *name == focused,
                rect: SCREEN,
                output: "eDP-1".to_string(),
            })
            .collect();

        Self {
            workspaces,
            windows: Vec::new(),
            commands: Vec::new(),
            calls: Vec::new(),
            tree_workspaces: names.iter().map(|n| n.to_string()).collect(),
            events: Rc::new(RefCell::new(VecDeque::new())),
            spawn_on_exec: VecDeque::new(),
            reject: None,
        }
    }

    pub fn add_window(&mut self, id: ConId, instance: &str, workspace: &str, mark: Option<&str>) {
        self.windows.push(FakeWindow {
            id,
            instance: instance.to_string(),
            marks: mark.map(|m| vec![m.to_string()]).unwrap_or_default(),
            workspace: workspace.to_string(),
        });
    }

    /// The next `exec` opens a window with this id and instance and focuses it.
    pub fn spawn_window_on_exec(&mut self, id: ConId, instance: &str) {
        self.spawn_on_exec.push_back((id, instance.to_string()));
    }

    pub fn queue_focus_event(&mut self, id: ConId, instance: &str) {
        self.events
            .borrow_mut()
            .push_back(focus_event(id, instance));
    }

    pub fn reject_commands_containing(&mut self, needle: &str) {
        self.reject = Some(needle.to_string());
    }

    pub fn marked(&self, mark: &str) -> Option<ConId> {
        self.windows
            .iter()
            .find(|w| w.marks.iter().any(|m| m == mark))
            .map(|w| w.id)
    }

    pub fn window_workspace(&self, id: ConId) -> Option<&str> {
        self.windows
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.workspace.as_str())
    }

    pub fn count_marked(&self, mark: &str) -> usize {
        self.windows
            .iter()
            .filter(|w| w.marks.iter().any(|m| m == mark))
            .count()
    }

    fn focused_name(&self) -> String {
        self.workspaces
            .iter()
            .find(|ws| ws.focused)
            .map(|ws| ws.name.clone())
            .unwrap_or_default()
    }

    fn selected(&self, selector: &str) -> Vec<ConId> {
        if let Some(id) = selector
            .strip_prefix("[con_id=")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return id.parse().into_iter().collect();
        }
        if let Some(pattern) = selector
            .strip_prefix("[con_mark=\"^")
            .and_then(|rest| rest.strip_suffix("$\"]"))
        {
            let mark = pattern.replace('\\', "");
            return self
                .windows
                .iter()
                .filter(|w| w.marks.contains(&mark))
                .map(|w| w.id)
                .collect();
        }
        Vec::new()
    }

    fn apply(&mut self, command: &str) {
        if command.starts_with("exec ") {
            if let Some((id, instance)) = self.spawn_on_exec.pop_front() {
                let workspace = self.focused_name();
                self.add_window(id, &instance, &workspace, None);
                self.queue_focus_event(id, &instance);
            }
            return;
        }

        let Some(end) = command.find(']') else {
            return;
        };
        let (selector, action) = command.split_at(end + 1);
        let ids = self.selected(selector);
        let action = action.trim();

        if let Some(mark) = action.strip_prefix("mark ") {
            let mark = mark.trim_matches('"').to_string();
            for window in &mut self.windows {
                window.marks.retain(|m| *m != mark);
                if ids.contains(&window.id) {
                    window.marks.push(mark.clone());
                }
            }
        } else if action.ends_with("scratchpad show") {
            let target = self.focused_name();
            self.move_windows(&ids, &target);
        } else if action.ends_with("move scratchpad") {
            self.move_windows(&ids, SCRATCHPAD_WORKSPACE);
        }
    }

    fn move_windows(&mut self, ids: &[ConId], workspace: &str) {
        for window in self.windows.iter_mut().filter(|w| ids.contains(&w.id)) {
            window.workspace = workspace.to_string();
        }
    }

    fn window_node(window: &FakeWindow) -> Node {
        Node {
            id: window.id,
            node_type: "con".to_string(),
            marks: window.marks.clone(),
            window_properties: Some(WindowProperties {
                instance: Some(window.instance.clone()),
                ..WindowProperties::default()
            }),
            ..Node::default()
        }
    }

    fn workspace_node(&self, id: ConId, name: &str) -> Node {
        Node {
            id,
            name: Some(name.to_string()),
            node_type: "workspace".to_string(),
            rect: SCREEN,
            floating_nodes: self
                .windows
                .iter()
                .filter(|w| w.workspace == name)
                .map(Self::window_node)
                .collect(),
            ..Node::default()
        }
    }
}

impl WindowManager for FakeWindowManager {
    fn command(&mut self, command: &str) -> Result<(), IpcError> {
        self.commands.push(command.to_string());
        self.calls.push(command.to_string());
        if let Some(needle) = &self.reject {
            if command.contains(needle.as_str()) {
                return Err(IpcError::CommandRejected {
                    command: command.to_string(),
                    message: "rejected by fake".to_string(),
                });
            }
        }
        self.apply(command);
        Ok(())
    }

    fn workspaces(&mut self) -> Result<Vec<Workspace>, IpcError> {
        Ok(self.workspaces.clone())
    }

    fn tree(&mut self) -> Result<Node, IpcError> {
        let mut nodes: Vec<Node> = self
            .tree_workspaces
            .iter()
            .enumerate()
            .map(|(i, name)| self.workspace_node(10 + i as ConId, name))
            .collect();
        nodes.push(self.workspace_node(9, SCRATCHPAD_WORKSPACE));

        Ok(Node {
            id: 1,
            name: Some("root".to_string()),
            node_type: "root".to_string(),
            nodes,
            ..Node::default()
        })
    }

    fn subscribe_window_events(&mut self) -> Result<Box<dyn EventSource>, IpcError> {
        self.calls.push("SUBSCRIBE window".to_string());
        Ok(Box::new(FakeEvents {
            queue: Rc::clone(&self.events),
        }))
    }
}

struct FakeEvents {
    queue: EventQueue,
}

impl EventSource for FakeEvents {
    fn next_window_event(&mut self, _timeout: Duration) -> Result<Option<WindowEvent>, IpcError> {
        Ok(self.queue.borrow_mut().pop_front())
    }
}

pub(crate) fn focus_event(id: ConId, instance: &str) -> WindowEvent {
    WindowEvent {
        change: "focus".to_string(),
        container: Node {
            id,
            node_type: "con".to_string(),
            window_properties: Some(WindowProperties {
                instance: Some(instance.to_string()),
                ..WindowProperties::default()
            }),
            ..Node::default()
        },
    }
}
