// File: src/store.rs
// In-memory notes and tasks, with change notifications for whoever renders them.
use crate::model::{CheckableItem, Note, TaskId};
use anyhow::{Result, bail};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Emitted after every successful mutation of a [`StateStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    NoteAdded { index: usize },
    TaskAdded { id: TaskId, index: usize },
    TaskToggled { id: TaskId, index: usize, checked: bool },
}

/// Shared handle for callers that touch the store from more than one thread.
/// The lock keeps `toggle_task`'s read-modify-write atomic.
pub type SharedStore = Arc<Mutex<StateStore>>;

#[derive(Debug, Default)]
pub struct StateStore {
    notes: Vec<Note>,
    tasks: Vec<CheckableItem>,
    listeners: Vec<mpsc::UnboundedSender<StoreEvent>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Registers a new listener. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StoreEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    fn emit(&mut self, event: StoreEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }

    // --- Notes ---

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn add_note(&mut self, text: impl Into<String>) {
        self.notes.push(text.into());
        let index = self.notes.len() - 1;
        log::debug!("Added note #{}", index);
        self.emit(StoreEvent::NoteAdded { index });
    }

    // --- Tasks ---

    pub fn tasks(&self) -> &[CheckableItem] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> Option<&CheckableItem> {
        self.tasks.get(index)
    }

    pub fn task_by_id(&self, id: TaskId) -> Option<&CheckableItem> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn add_task(&mut self, label: impl Into<String>) -> TaskId {
        let item = CheckableItem::new(label);
        let id = item.id;
        self.tasks.push(item);
        let index = self.tasks.len() - 1;
        log::debug!("Added task {} at #{}", id, index);
        self.emit(StoreEvent::TaskAdded { id, index });
        id
    }

    /// Sets the check state of the task at `index`.
    ///
    /// An index past the end is a caller error; the store is left untouched.
    pub fn toggle_task(&mut self, index: usize, checked: bool) -> Result<&CheckableItem> {
        if index >= self.tasks.len() {
            bail!(
                "Task index {} out of range ({} tasks)",
                index,
                self.tasks.len()
            );
        }

        let updated = self.tasks[index].with_checked(checked);
        let id = updated.id;
        self.tasks[index] = updated;
        log::debug!("Task {} at #{} checked={}", id, index, checked);
        self.emit(StoreEvent::TaskToggled { id, index, checked });
        Ok(&self.tasks[index])
    }

    pub fn toggle_task_by_id(&mut self, id: TaskId, checked: bool) -> Result<&CheckableItem> {
        match self.position_of(id) {
            Some(index) => self.toggle_task(index, checked),
            None => bail!("Unknown task {}", id),
        }
    }
}
