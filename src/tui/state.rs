// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::Config;
use crate::model::CheckableItem;
use crate::navigation::{NavController, Screen};
use crate::store::{StateStore, StoreEvent};
use ratatui::widgets::ListState;
use strum::EnumCount;
use tokio::sync::mpsc;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

/// UI state owned by a single screen, kept while other tabs are shown.
#[derive(Debug, Default)]
pub struct PageState {
    pub input_buffer: String,
    pub cursor_position: usize,
    pub list_state: ListState,
}

impl PageState {
    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }

    pub fn delete_char_forward(&mut self) {
        let current_index = self.cursor_position;
        if current_index < self.input_buffer.chars().count() {
            let before = self.input_buffer.chars().take(current_index);
            let after = self.input_buffer.chars().skip(current_index + 1);
            self.input_buffer = before.chain(after).collect();
        }
    }

    /// Returns the current text and clears the field.
    pub fn take_input(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.input_buffer)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.list_state.select(Some(i));
    }
}

pub struct AppState {
    // Data
    pub store: StateStore,
    pub nav: NavController,
    pub store_events: mpsc::UnboundedReceiver<StoreEvent>,

    // UI State
    pages: [PageState; Screen::COUNT],
    pub mode: InputMode,
    pub message: String,
    pub show_full_help: bool,
    pub strikethrough_checked: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut store = StateStore::new();
        let store_events = store.subscribe();

        Self {
            store,
            nav: NavController::new(config.start_screen),
            store_events,
            pages: std::array::from_fn(|_| PageState::default()),
            mode: InputMode::Normal,
            message: "Ready.".to_string(),
            show_full_help: config.show_help_on_start,
            strikethrough_checked: config.strikethrough_checked,
        }
    }

    pub fn active_screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn page(&self, screen: Screen) -> &PageState {
        &self.pages[screen as usize]
    }

    pub fn page_mut(&mut self, screen: Screen) -> &mut PageState {
        &mut self.pages[screen as usize]
    }

    pub fn current_page_mut(&mut self) -> &mut PageState {
        let screen = self.active_screen();
        self.page_mut(screen)
    }

    /// Whether the screen has an input field at all.
    pub fn accepts_input(screen: Screen) -> bool {
        matches!(screen, Screen::Notes | Screen::Tasks)
    }

    pub fn list_len(&self, screen: Screen) -> usize {
        match screen {
            Screen::Notes => self.store.notes().len(),
            Screen::Tasks => self.store.tasks().len(),
            Screen::Calendar => 0,
        }
    }

    pub fn selected_task(&self) -> Option<&CheckableItem> {
        let idx = self.page(Screen::Tasks).list_state.selected()?;
        self.store.task(idx)
    }

    pub fn next(&mut self) {
        let screen = self.active_screen();
        let len = self.list_len(screen);
        self.page_mut(screen).select_next(len);
    }

    pub fn previous(&mut self) {
        let screen = self.active_screen();
        let len = self.list_len(screen);
        self.page_mut(screen).select_previous(len);
    }
}
