// File: src/tui/handlers.rs
// Handles keyboard input, store notifications and action dispatch for the TUI.
use crate::navigation::Screen;
use crate::store::StoreEvent;
use crate::tui::action::Action;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press to an [`Action`].
///
/// Purely local edits (typing, cursor and list movement, help toggle) are
/// applied to `state` directly and yield `None`.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.mode {
        InputMode::Editing => handle_editing_key(key, state),
        InputMode::Normal => handle_normal_key(key, state),
    }
}

fn handle_editing_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    let screen = state.active_screen();
    let page = state.page_mut(screen);

    match key.code {
        KeyCode::Enter => {
            // Empty input is accepted as-is.
            let text = page.take_input();
            match screen {
                Screen::Notes => Some(Action::AddNote(text)),
                Screen::Tasks => Some(Action::AddTask(text)),
                Screen::Calendar => {
                    state.mode = InputMode::Normal;
                    None
                }
            }
        }
        KeyCode::Esc => {
            // Leave the draft in place; it comes back on the next edit.
            state.mode = InputMode::Normal;
            None
        }
        KeyCode::Backspace => {
            page.delete_char();
            None
        }
        KeyCode::Delete => {
            page.delete_char_forward();
            None
        }
        KeyCode::Left => {
            page.move_cursor_left();
            None
        }
        KeyCode::Right => {
            page.move_cursor_right();
            None
        }
        KeyCode::Home => {
            page.move_cursor_home();
            None
        }
        KeyCode::End => {
            page.move_cursor_end();
            None
        }
        KeyCode::Char(c) => {
            page.enter_char(c);
            None
        }
        _ => None,
    }
}

fn handle_normal_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    let screen = state.active_screen();

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => {
            state.show_full_help = !state.show_full_help;
            None
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            Screen::all().get(idx).copied().map(Action::Select)
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::Select(screen.next())),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            Some(Action::Select(screen.previous()))
        }
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Down | KeyCode::Char('j') => {
            state.next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous();
            None
        }
        // With nothing selected, Enter opens the input field instead.
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x')
            if screen == Screen::Tasks
                && (key.code != KeyCode::Enter || state.selected_task().is_some()) =>
        {
            match state.selected_task() {
                Some(task) => Some(Action::SetTaskChecked(task.id, !task.is_checked)),
                None => {
                    state.message = "No task selected.".to_string();
                    None
                }
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => {
            if AppState::accepts_input(screen) {
                state.mode = InputMode::Editing;
                state.current_page_mut().move_cursor_end();
            } else {
                state.message = format!("Nothing to add on {}.", screen.title());
            }
            None
        }
        _ => None,
    }
}

/// Applies an action. Returns `false` when the application should exit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => return false,
        Action::AddNote(text) => state.store.add_note(text),
        Action::AddTask(label) => {
            state.store.add_task(label);
        }
        Action::SetTaskChecked(id, checked) => {
            if let Err(e) = state.store.toggle_task_by_id(id, checked) {
                log::warn!("Toggle rejected: {}", e);
                state.message = format!("Error: {}", e);
            }
        }
        Action::Select(screen) => {
            state.mode = InputMode::Normal;
            state.nav.select(screen);
            log::info!("Switched to {}", screen);
        }
        Action::Back => {
            state.mode = InputMode::Normal;
            if state.nav.back() {
                log::info!("Back to {}", state.active_screen());
            } else {
                state.message = "Press q to quit.".to_string();
            }
        }
    }
    process_store_events(state);
    true
}

/// Drains pending store notifications into the UI state.
pub fn process_store_events(state: &mut AppState) {
    while let Ok(event) = state.store_events.try_recv() {
        handle_store_event(state, event);
    }
}

pub fn handle_store_event(state: &mut AppState, event: StoreEvent) {
    log::info!("Store changed: {:?}", event);
    match event {
        StoreEvent::NoteAdded { index } => {
            state.page_mut(Screen::Notes).list_state.select(Some(index));
            state.message = "Note added.".to_string();
        }
        StoreEvent::TaskAdded { index, .. } => {
            state.page_mut(Screen::Tasks).list_state.select(Some(index));
            state.message = "Task added.".to_string();
        }
        StoreEvent::TaskToggled { checked, .. } => {
            state.message = if checked {
                "Task checked.".to_string()
            } else {
                "Task unchecked.".to_string()
            };
        }
    }
}
