// File: ./src/tui/action.rs
// Intents produced by key handling and applied to the store or the navigator.
use crate::model::TaskId;
use crate::navigation::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddNote(String),
    AddTask(String),
    SetTaskChecked(TaskId, bool),
    Select(Screen),
    Back,
    Quit,
}
