// File: ./src/model.rs
// Core data types shared by the store, the navigation layer and the TUI.
use std::fmt;
use uuid::Uuid;

/// Stable identifier handed out when a task is created.
///
/// Positions in the task list are also valid handles today because the list
/// only grows, but anything that may outlive a render (queued events, a
/// selection kept across tab switches) should hold on to the id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Note = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableItem {
    pub id: TaskId,
    pub label: String,
    pub is_checked: bool,
}

impl CheckableItem {
    /// New tasks always start unchecked.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            label: label.into(),
            is_checked: false,
        }
    }

    /// Returns a copy carrying the new check state; the label and id are kept.
    pub fn with_checked(&self, is_checked: bool) -> Self {
        Self {
            is_checked,
            ..self.clone()
        }
    }

    pub fn checkbox(&self) -> &'static str {
        if self.is_checked { "[x]" } else { "[ ]" }
    }
}
